#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "mulligan recorded for game {game_number}, expected 1 to {max}",
        max = crate::grouping::MAX_GAMES_PER_MATCH
    )]
    InvalidGameNumber { game_number: i32 },

    #[error("Invalid backend url: {0}")]
    InvalidBackendUrl(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
