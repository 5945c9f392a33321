use std::fmt;

use tracing::{error, info, warn};

use crate::{
    error::Result,
    grouping::{empty_groups, group_mulligans},
    models::{Card, DeckSnapshot, GameResult, MatchDetails, MatchId, Mulligan, PrimaryDecklist},
    normalize::normalize_decklist,
};

/// The first difference describes the changes going into game 2.
pub const FIRST_SIDEBOARDED_GAME: usize = 2;

/// Tags one load so that only the latest response updates the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub match_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// No identifier: the placeholder record is already in place.
    Placeholder,
    /// Issue exactly one fetch for this request.
    Fetch(FetchRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDifference {
    pub game_number: usize,
    pub added: Vec<Card>,
    pub removed: Vec<Card>,
}

/// Render-ready match record.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    pub id: MatchId,
    pub did_controller_win: bool,
    pub controller_player_name: String,
    pub opponent_player_name: String,
    pub created_at: String,
    pub game_results: Vec<GameResult>,
    pub primary_decklist: Option<PrimaryDecklist>,
    pub differences: Option<Vec<GameDifference>>,
    pub decklists: Vec<DeckSnapshot>,
    pub mulligan_groups: Vec<Vec<Mulligan>>,
}

impl MatchView {
    pub fn build(details: &MatchDetails) -> Result<Self> {
        let mulligan_groups = group_mulligans(&details.mulligans)?;
        Ok(Self::compose(details, mulligan_groups))
    }

    pub fn placeholder() -> Self {
        Self::compose(&MatchDetails::placeholder(), empty_groups())
    }

    fn compose(details: &MatchDetails, mulligan_groups: Vec<Vec<Mulligan>>) -> Self {
        let differences = details.differences.as_ref().map(|differences| {
            differences
                .iter()
                .enumerate()
                .map(|(index, difference)| GameDifference {
                    game_number: index + FIRST_SIDEBOARDED_GAME,
                    added: difference.added.clone(),
                    removed: difference.removed.clone(),
                })
                .collect()
        });

        Self {
            id: details.id.clone(),
            did_controller_win: details.did_controller_win,
            controller_player_name: details.controller_player_name.clone(),
            opponent_player_name: details.opponent_player_name.clone(),
            created_at: details.created_at.clone(),
            game_results: details.game_results.clone(),
            primary_decklist: normalize_decklist(details.primary_decklist.as_ref()),
            differences,
            decklists: details.decklists.clone(),
            mulligan_groups,
        }
    }

    pub fn winner(&self) -> &str {
        if self.did_controller_win {
            &self.controller_player_name
        } else {
            &self.opponent_player_name
        }
    }
}

/// State of the match details screen for one activation at a time.
#[derive(Debug, Default)]
pub struct MatchDetailView {
    last_token: u64,
    pending: Option<FetchRequest>,
    current: Option<MatchView>,
}

impl MatchDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new activation. Any earlier record or in-flight request is
    /// dropped; responses to it will be discarded.
    pub fn activate(&mut self, match_id: Option<&str>) -> Activation {
        match match_id {
            Some(match_id) => Activation::Fetch(self.begin_load(match_id)),
            None => {
                info!("no match id supplied, showing placeholder");
                self.pending = None;
                self.current = Some(MatchView::placeholder());
                Activation::Placeholder
            }
        }
    }

    /// Issues a token for a load from any source (backend or file).
    pub fn begin_load(&mut self, source: impl Into<String>) -> FetchRequest {
        self.last_token += 1;
        let request = FetchRequest {
            token: RequestToken(self.last_token),
            match_id: source.into(),
        };
        info!(match_id = %request.match_id, token = ?request.token, "loading match details");

        self.current = None;
        self.pending = Some(request.clone());
        request
    }

    /// Applies a load result if it answers the active request. Returns whether
    /// a new record is now exposed.
    pub fn complete<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: std::result::Result<MatchDetails, E>,
    ) -> bool {
        let request = match self.pending.take() {
            Some(request) if request.token == token => request,
            other => {
                self.pending = other;
                warn!(token = ?token, "discarding stale match details response");
                return false;
            }
        };

        let details = match result {
            Ok(details) => details,
            Err(e) => {
                error!(match_id = %request.match_id, "failed to load match details: {}", e);
                return false;
            }
        };

        match MatchView::build(&details) {
            Ok(view) => {
                self.current = Some(view);
                true
            }
            Err(e) => {
                error!(match_id = %request.match_id, "rejecting match details: {}", e);
                false
            }
        }
    }

    /// Navigation away from the screen.
    pub fn deactivate(&mut self) {
        self.pending = None;
        self.current = None;
    }

    pub fn current(&self) -> Option<&MatchView> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> Option<&FetchRequest> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
