use crate::{
    models::{Card, CardCategory, Mulligan, PrimaryDecklist},
    view_model::GameDifference,
};

pub const SIDEBOARD_HEADER: &str = "Sideboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    /// Locates the rendered row, and so the preview anchor.
    pub identifier: String,
    pub label: String,
    pub card: Card,
}

/// A header followed by one row per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList {
    pub header: String,
    pub rows: Vec<CardRow>,
}

impl CardList {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn card_label(card: &Card, include_mana_value: bool) -> String {
    if include_mana_value {
        format!("{} {} - {}", card.quantity, card.name, card.mana_value)
    } else {
        format!("{} {}", card.quantity, card.name)
    }
}

pub fn card_rows(prefix: &str, cards: &[Card], include_mana_value: bool) -> Vec<CardRow> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardRow {
            identifier: format!("{prefix}-{index}"),
            label: card_label(card, include_mana_value),
            card: card.clone(),
        })
        .collect()
}

/// Always returns the block, even with no rows; callers decide whether an
/// empty block is shown.
pub fn build_card_list(header: &str, cards: &[Card], include_mana_value: bool) -> CardList {
    CardList {
        header: header.to_owned(),
        rows: card_rows(header, cards, include_mana_value),
    }
}

/// Category blocks in display order followed by the sideboard. Empty blocks
/// are left out.
pub fn main_deck_sections(decklist: &PrimaryDecklist) -> Vec<CardList> {
    CardCategory::ALL
        .iter()
        .map(|&category| {
            build_card_list(
                category.header(),
                decklist.main_deck.cards(category),
                category.shows_mana_value(),
            )
        })
        .chain(std::iter::once(build_card_list(
            SIDEBOARD_HEADER,
            &decklist.sideboard,
            true,
        )))
        .filter(|list| !list.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceBlock {
    pub game_number: usize,
    pub added: Vec<CardRow>,
    pub removed: Vec<CardRow>,
}

pub fn difference_blocks(differences: &[GameDifference]) -> Vec<DifferenceBlock> {
    differences
        .iter()
        .enumerate()
        .map(|(game_idx, difference)| DifferenceBlock {
            game_number: difference.game_number,
            added: card_rows(
                &format!("Sideboard-added-{game_idx}"),
                &difference.added,
                false,
            ),
            removed: card_rows(
                &format!("Sideboard-removed-{game_idx}"),
                &difference.removed,
                false,
            ),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulliganBlock {
    pub game_number: i32,
    pub hand: Vec<CardRow>,
    pub opponent_identity: String,
    pub number_to_keep: i32,
    pub play_draw: String,
    pub decision: String,
}

/// One column per game group.
pub fn mulligan_columns(groups: &[Vec<Mulligan>]) -> Vec<Vec<MulliganBlock>> {
    groups
        .iter()
        .enumerate()
        .map(|(game_idx, group)| {
            group
                .iter()
                .enumerate()
                .map(|(mulligan_idx, mulligan)| MulliganBlock {
                    game_number: mulligan.game_number,
                    hand: card_rows(
                        &format!("mulligan-{game_idx}-{mulligan_idx}"),
                        &mulligan.hand,
                        false,
                    ),
                    opponent_identity: mulligan.opponent_identity.clone(),
                    number_to_keep: mulligan.number_to_keep,
                    play_draw: mulligan.play_draw.clone(),
                    decision: mulligan.decision.clone(),
                })
                .collect()
        })
        .collect()
}
