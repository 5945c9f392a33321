use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub mod app;
pub mod backend;
pub mod card_list;
pub mod config;
pub mod error;
pub mod grouping;
pub mod listing;
pub mod models;
pub mod normalize;
pub mod overlay;
pub mod preview;
pub mod view_model;

pub use error::{Result, ViewerError};

static INIT: Once = Once::new();

/// Installs the global fmt subscriber. Later calls are no-ops.
pub fn setup_logger(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_line_number(true)
            .try_init();
    });
}
