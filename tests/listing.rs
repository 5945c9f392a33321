//! Match listing search tests.

use match_viewer::listing::search_matches;
use match_viewer::models::{MatchId, MatchSummary};

fn summary(id: i64, controller: &str, opponent: &str) -> MatchSummary {
    MatchSummary {
        id: MatchId::Number(id),
        controller_player_name: controller.to_owned(),
        opponent_player_name: opponent.to_owned(),
        created_at: "2024-01-05T15:04:00Z".to_owned(),
    }
}

#[test]
fn empty_query_keeps_listing_order() {
    let matches = vec![
        summary(3, "Me", "Jace"),
        summary(2, "Me", "Liliana"),
        summary(1, "Me", "Nissa"),
    ];

    assert_eq!(search_matches("  ", &matches, 10), matches);
    assert_eq!(search_matches("", &matches, 2).len(), 2);
}

#[test]
fn query_filters_by_player_names() {
    let matches = vec![
        summary(3, "Me", "Jace"),
        summary(2, "Me", "Liliana"),
        summary(1, "Me", "Nissa"),
    ];

    let result = search_matches("lili", &matches, 10);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, MatchId::Number(2));
}
