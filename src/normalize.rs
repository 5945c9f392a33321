use tracing::debug;

use crate::models::{CardCategory, MainDeck, PrimaryDecklist, RawPrimaryDecklist};

/// Builds the normalized decklist. A null decklist stays null; otherwise every
/// bucket of the result is a (possibly empty) list. The input is left untouched.
pub fn normalize_decklist(raw: Option<&RawPrimaryDecklist>) -> Option<PrimaryDecklist> {
    raw.map(PrimaryDecklist::from_raw)
}

impl PrimaryDecklist {
    pub fn from_raw(raw: &RawPrimaryDecklist) -> Self {
        let mut main_deck = MainDeck::default();

        for (key, cards) in raw.main_deck.iter().flatten() {
            let category = CardCategory::from_key(key);
            if category == CardCategory::Unknown && key != CardCategory::Unknown.key() {
                debug!(key = %key, "folding unrecognized card category into Unknown");
            }
            if let Some(cards) = cards {
                main_deck.cards_mut(category).extend(cards.iter().cloned());
            }
        }

        Self {
            archetype: raw.archetype.clone(),
            main_deck,
            sideboard: raw.sideboard.clone().unwrap_or_default(),
        }
    }
}
