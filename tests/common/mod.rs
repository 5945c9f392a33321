//! Shared fixtures for the match viewer integration tests.

#![allow(dead_code)]

use match_viewer::models::{Card, MatchDetails, Mulligan};

pub fn card(name: &str, quantity: u32, mana_value: u32) -> Card {
    Card {
        name: name.to_owned(),
        quantity,
        mana_value,
        image_uri: Some(format!("https://cards.example/{}.jpg", name.replace(' ', "-"))),
    }
}

pub fn mulligan(game_number: i32, decision: &str) -> Mulligan {
    Mulligan {
        hand: vec![card("Mountain", 1, 0), card("Lightning Bolt", 1, 1)],
        opponent_identity: "Mono Blue".to_owned(),
        game_number,
        number_to_keep: 7,
        play_draw: "play".to_owned(),
        decision: decision.to_owned(),
    }
}

/// A best-of-three match as the backend serializes it. The decklist has no
/// `Land` bucket, a null `Planeswalker` bucket and an unrecognized `Battle` one.
pub fn sample_match_json() -> serde_json::Value {
    serde_json::json!({
        "id": "4f1c2a90-0000-4d3e-9b1a-6c2f0e5d7a11",
        "did_controller_win": true,
        "controller_player_name": "Chandra",
        "opponent_player_name": "Jace",
        "controller_seat_id": 1,
        "created_at": "2024-01-05T15:04:00Z",
        "primary_decklist": {
            "archetype": "Unknown",
            "main_deck": {
                "Creature": [
                    { "name": "Goblin Guide", "card_type": "Creature", "mana_value": 1, "quantity": 4, "image_uri": "" },
                    { "name": "Monastery Swiftspear", "card_type": "Creature", "mana_value": 1, "quantity": 4, "image_uri": "" }
                ],
                "Instant": [
                    { "name": "Lightning Bolt", "card_type": "Instant", "mana_value": 1, "quantity": 4, "image_uri": "" }
                ],
                "Sorcery": [
                    { "name": "Lava Spike", "card_type": "Sorcery", "mana_value": 1, "quantity": 4, "image_uri": "" }
                ],
                "Planeswalker": null,
                "Battle": [
                    { "name": "Invasion of Regatha", "card_type": "Battle", "mana_value": 3, "quantity": 1, "image_uri": "" }
                ]
            },
            "sideboard": [
                { "name": "Smash to Smithereens", "card_type": "Instant", "mana_value": 2, "quantity": 3, "image_uri": "" }
            ]
        },
        "game_results": [
            { "game_number": 1, "winning_player": "Chandra" },
            { "game_number": 2, "winning_player": "Jace" },
            { "game_number": 3, "winning_player": "Chandra" }
        ],
        "differences": [
            {
                "added": [{ "name": "Smash to Smithereens", "mana_value": 2, "quantity": 2, "image_uri": "" }],
                "removed": [{ "name": "Lava Spike", "mana_value": 1, "quantity": 2, "image_uri": "" }]
            },
            { "added": [], "removed": [] }
        ],
        "decklists": [
            { "game_number": 1, "deck": [1, 1, 2], "sideboard": [3] }
        ],
        "mulligans": [
            { "hand": [], "opponent_identity": "", "game_number": 1, "number_to_keep": 7, "play_draw": "play", "decision": "Mulligan" },
            { "hand": [], "opponent_identity": "", "game_number": 1, "number_to_keep": 6, "play_draw": "play", "decision": "Keep" },
            { "hand": [], "opponent_identity": "Mono Blue", "game_number": 3, "number_to_keep": 7, "play_draw": "draw", "decision": "Keep" }
        ]
    })
}

pub fn sample_match() -> MatchDetails {
    serde_json::from_value(sample_match_json()).unwrap()
}
