use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};

use crate::models::MatchSummary;

/// Best `top` matches for `query` over player names, best first. An empty
/// query keeps the listing as is.
pub fn search_matches(query: &str, matches: &[MatchSummary], top: usize) -> Vec<MatchSummary> {
    let query = query.trim();
    if query.is_empty() {
        return matches.iter().take(top).cloned().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = matches
        .iter()
        .filter_map(|m| {
            let opponent = matcher.fuzzy_match(&m.opponent_player_name, query);
            let controller = matcher.fuzzy_match(&m.controller_player_name, query);
            opponent.max(controller).map(|score| (m, score))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|(_, a), (_, b)| b.cmp(a));

    scored
        .into_iter()
        .take(top)
        .map(|(m, _)| m.clone())
        .collect()
}
