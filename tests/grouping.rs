//! Mulligan grouping tests.

mod common;

use match_viewer::grouping::{group_mulligans, DEFAULT_GAME_GROUPS, MAX_GAMES_PER_MATCH};
use match_viewer::ViewerError;

#[test]
fn no_mulligans_gives_three_empty_groups() {
    let groups = group_mulligans(&[]).unwrap();

    assert_eq!(groups.len(), DEFAULT_GAME_GROUPS);
    assert!(groups.iter().all(Vec::is_empty));
}

#[test]
fn mulligans_bucket_by_game_in_order() {
    let m1 = common::mulligan(1, "Mulligan");
    let m2 = common::mulligan(1, "Keep");
    let m3 = common::mulligan(3, "Keep");

    let groups = group_mulligans(&[m1.clone(), m2.clone(), m3.clone()]).unwrap();

    assert_eq!(groups, vec![vec![m1, m2], vec![], vec![m3]]);
}

#[test]
fn later_games_grow_the_groups() {
    let mulligans = [
        common::mulligan(5, "Keep"),
        common::mulligan(2, "Mulligan"),
        common::mulligan(5, "Mulligan"),
    ];

    let groups = group_mulligans(&mulligans).unwrap();

    assert_eq!(groups.len(), 5);
    assert!(groups[0].is_empty());
    assert_eq!(groups[1], vec![mulligans[1].clone()]);
    assert!(groups[2].is_empty() && groups[3].is_empty());
    assert_eq!(groups[4], vec![mulligans[0].clone(), mulligans[2].clone()]);
}

#[test]
fn every_group_holds_exactly_its_game() {
    let mulligans: Vec<_> = [2, 1, 4, 2, 1, 7, 3]
        .iter()
        .enumerate()
        .map(|(i, &game)| common::mulligan(game, &format!("decision {i}")))
        .collect();

    let groups = group_mulligans(&mulligans).unwrap();

    assert!(groups.len() >= DEFAULT_GAME_GROUPS);
    for (index, group) in groups.iter().enumerate() {
        let expected: Vec<_> = mulligans
            .iter()
            .filter(|m| m.game_number as usize == index + 1)
            .cloned()
            .collect();
        assert_eq!(group, &expected);
    }
}

#[test]
fn non_positive_game_number_is_rejected() {
    for game_number in [0, -1] {
        let mulligans = [common::mulligan(1, "Keep"), common::mulligan(game_number, "Keep")];

        let result = group_mulligans(&mulligans);

        assert!(
            matches!(
                result,
                Err(ViewerError::InvalidGameNumber { game_number: g }) if g == game_number
            ),
            "game {game_number}"
        );
    }
}

#[test]
fn game_number_past_the_last_game_is_rejected() {
    let last = MAX_GAMES_PER_MATCH as i32;

    let groups = group_mulligans(&[common::mulligan(last, "Keep")]).unwrap();
    assert_eq!(groups.len(), MAX_GAMES_PER_MATCH);

    for game_number in [last + 1, 20_000_000, i32::MAX] {
        let result = group_mulligans(&[common::mulligan(game_number, "Keep")]);

        assert!(
            matches!(
                result,
                Err(ViewerError::InvalidGameNumber { game_number: g }) if g == game_number
            ),
            "game {game_number}"
        );
    }
}
