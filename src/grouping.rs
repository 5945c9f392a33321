use crate::error::{Result, ViewerError};
use crate::models::Mulligan;

/// Groups always cover a best-of-three match.
pub const DEFAULT_GAME_GROUPS: usize = 3;

/// Highest game number a match can record (best of seven).
pub const MAX_GAMES_PER_MATCH: usize = 7;

pub fn empty_groups() -> Vec<Vec<Mulligan>> {
    vec![Vec::new(); DEFAULT_GAME_GROUPS]
}

/// Buckets mulligans by game: group `i` holds every mulligan of game `i + 1`,
/// in input order. Grows past three groups when a later game shows up.
///
/// A game number outside `1..=MAX_GAMES_PER_MATCH` breaks the backend
/// contract and is returned as [`ViewerError::InvalidGameNumber`] instead of
/// being clamped.
pub fn group_mulligans(mulligans: &[Mulligan]) -> Result<Vec<Vec<Mulligan>>> {
    let mut groups = empty_groups();

    for mulligan in mulligans {
        let index = usize::try_from(mulligan.game_number)
            .ok()
            .filter(|game_number| *game_number <= MAX_GAMES_PER_MATCH)
            .and_then(|game_number| game_number.checked_sub(1))
            .ok_or(ViewerError::InvalidGameNumber {
                game_number: mulligan.game_number,
            })?;

        if index >= groups.len() {
            groups.resize_with(index + 1, Vec::new);
        }
        groups[index].push(mulligan.clone());
    }

    Ok(groups)
}
