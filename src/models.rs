use std::{collections::BTreeMap, fmt};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Match identifier as delivered by the backend. Older backends emit a number,
/// newer ones the arena match GUID.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum MatchId {
    Number(i64),
    Text(String),
}

impl Default for MatchId {
    fn default() -> Self {
        MatchId::Number(0)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Number(n) => write!(f, "{n}"),
            MatchId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub mana_value: u32,
    #[serde(default)]
    pub image_uri: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardCategory {
    Creature,
    Instant,
    Sorcery,
    Enchantment,
    Artifact,
    Planeswalker,
    Land,
    Unknown,
}

impl CardCategory {
    /// Display order of the main deck.
    pub const ALL: [CardCategory; 8] = [
        CardCategory::Creature,
        CardCategory::Instant,
        CardCategory::Sorcery,
        CardCategory::Enchantment,
        CardCategory::Artifact,
        CardCategory::Planeswalker,
        CardCategory::Land,
        CardCategory::Unknown,
    ];

    /// Backend key for this bucket.
    pub fn key(self) -> &'static str {
        match self {
            CardCategory::Creature => "Creature",
            CardCategory::Instant => "Instant",
            CardCategory::Sorcery => "Sorcery",
            CardCategory::Enchantment => "Enchantment",
            CardCategory::Artifact => "Artifact",
            CardCategory::Planeswalker => "Planeswalker",
            CardCategory::Land => "Land",
            CardCategory::Unknown => "Unknown",
        }
    }

    /// Any key outside the closed set (e.g. "Battle") lands in `Unknown`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Creature" => CardCategory::Creature,
            "Instant" => CardCategory::Instant,
            "Sorcery" => CardCategory::Sorcery,
            "Enchantment" => CardCategory::Enchantment,
            "Artifact" => CardCategory::Artifact,
            "Planeswalker" => CardCategory::Planeswalker,
            "Land" => CardCategory::Land,
            _ => CardCategory::Unknown,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            CardCategory::Creature => "Creatures",
            CardCategory::Instant => "Instants",
            CardCategory::Sorcery => "Sorceries",
            CardCategory::Enchantment => "Enchantments",
            CardCategory::Artifact => "Artifacts",
            CardCategory::Planeswalker => "Planeswalkers",
            CardCategory::Land => "Lands",
            CardCategory::Unknown => "Unknown",
        }
    }

    pub fn shows_mana_value(self) -> bool {
        !matches!(self, CardCategory::Land)
    }
}

/// Primary decklist exactly as the backend sends it: any bucket may be
/// missing or null.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RawPrimaryDecklist {
    #[serde(default)]
    pub archetype: String,
    #[serde(default)]
    pub main_deck: Option<BTreeMap<String, Option<Vec<Card>>>>,
    #[serde(default)]
    pub sideboard: Option<Vec<Card>>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct MainDeck {
    #[serde(rename = "Creature")]
    pub creature: Vec<Card>,
    #[serde(rename = "Instant")]
    pub instant: Vec<Card>,
    #[serde(rename = "Sorcery")]
    pub sorcery: Vec<Card>,
    #[serde(rename = "Enchantment")]
    pub enchantment: Vec<Card>,
    #[serde(rename = "Artifact")]
    pub artifact: Vec<Card>,
    #[serde(rename = "Planeswalker")]
    pub planeswalker: Vec<Card>,
    #[serde(rename = "Land")]
    pub land: Vec<Card>,
    #[serde(rename = "Unknown")]
    pub unknown: Vec<Card>,
}

impl MainDeck {
    pub fn cards(&self, category: CardCategory) -> &[Card] {
        match category {
            CardCategory::Creature => &self.creature,
            CardCategory::Instant => &self.instant,
            CardCategory::Sorcery => &self.sorcery,
            CardCategory::Enchantment => &self.enchantment,
            CardCategory::Artifact => &self.artifact,
            CardCategory::Planeswalker => &self.planeswalker,
            CardCategory::Land => &self.land,
            CardCategory::Unknown => &self.unknown,
        }
    }

    pub fn cards_mut(&mut self, category: CardCategory) -> &mut Vec<Card> {
        match category {
            CardCategory::Creature => &mut self.creature,
            CardCategory::Instant => &mut self.instant,
            CardCategory::Sorcery => &mut self.sorcery,
            CardCategory::Enchantment => &mut self.enchantment,
            CardCategory::Artifact => &mut self.artifact,
            CardCategory::Planeswalker => &mut self.planeswalker,
            CardCategory::Land => &mut self.land,
            CardCategory::Unknown => &mut self.unknown,
        }
    }
}

/// Normalized primary decklist. Every bucket is present.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct PrimaryDecklist {
    pub archetype: String,
    pub main_deck: MainDeck,
    pub sideboard: Vec<Card>,
}

impl From<&PrimaryDecklist> for RawPrimaryDecklist {
    fn from(decklist: &PrimaryDecklist) -> Self {
        let main_deck = CardCategory::ALL
            .iter()
            .map(|&category| {
                (
                    category.key().to_owned(),
                    Some(decklist.main_deck.cards(category).to_vec()),
                )
            })
            .collect();

        Self {
            archetype: decklist.archetype.clone(),
            main_deck: Some(main_deck),
            sideboard: Some(decklist.sideboard.clone()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct DeckDifference {
    #[serde(default)]
    pub added: Vec<Card>,
    #[serde(default)]
    pub removed: Vec<Card>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct GameResult {
    pub game_number: i32,
    pub winning_player: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Mulligan {
    pub hand: Vec<Card>,
    pub opponent_identity: String,
    pub game_number: i32,
    pub number_to_keep: i32,
    pub play_draw: String,
    pub decision: String,
}

/// Legacy per-game deck snapshot. Only carried through, never rendered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DeckSnapshot {
    pub game_number: i32,
    pub deck: Vec<serde_json::Value>,
    pub sideboard: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct MatchDetails {
    pub id: MatchId,
    pub did_controller_win: bool,
    pub controller_player_name: String,
    pub opponent_player_name: String,
    pub created_at: String,
    pub primary_decklist: Option<RawPrimaryDecklist>,
    pub game_results: Vec<GameResult>,
    pub differences: Option<Vec<DeckDifference>>,
    pub decklists: Vec<DeckSnapshot>,
    pub mulligans: Vec<Mulligan>,
}

impl MatchDetails {
    /// Zero-valued record shown when no match identifier was supplied.
    pub fn placeholder() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MatchSummary {
    pub id: MatchId,
    pub controller_player_name: String,
    pub opponent_player_name: String,
    pub created_at: String,
}

/// Formats an RFC 3339 timestamp as `Jan 5, 2024, 03:04 PM`, falling back to
/// the raw string.
pub fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats_rfc3339() {
        assert_eq!(
            display_timestamp("2024-01-05T15:04:00+00:00"),
            "Jan 5, 2024, 03:04 PM"
        );
    }

    #[test]
    fn timestamp_keeps_unparseable_input() {
        assert_eq!(display_timestamp("yesterday"), "yesterday");
        assert_eq!(display_timestamp(""), "");
    }

    #[test]
    fn unrecognized_category_keys_fold_into_unknown() {
        assert_eq!(CardCategory::from_key("Battle"), CardCategory::Unknown);
        assert_eq!(CardCategory::from_key("Land"), CardCategory::Land);
        for category in CardCategory::ALL {
            assert_eq!(CardCategory::from_key(category.key()), category);
        }
    }
}
