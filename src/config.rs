use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, Parser)]
#[command(name = "mtga-match-viewer", about = "Browse recorded MTG Arena matches")]
pub struct ViewerConfig {
    /// Base url of the match insight backend
    #[arg(long, env = "MATCH_VIEWER_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Match to open on start
    #[arg(long = "id", env = "MATCH_VIEWER_MATCH_ID")]
    pub match_id: Option<String>,

    #[arg(long, env = "MATCH_VIEWER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// tracing filter directive, e.g. `match_viewer=debug`
    #[arg(long = "log", env = "MATCH_VIEWER_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ViewerConfig {
    /// Reads `.env` (if any), then the command line and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            match_id: None,
            timeout_secs: 10,
            log_filter: "info".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_backend_come_from_arguments() {
        let config = ViewerConfig::try_parse_from([
            "mtga-match-viewer",
            "--id",
            "42",
            "--backend-url",
            "http://localhost:9000",
            "--timeout-secs",
            "3",
        ])
        .unwrap();

        assert_eq!(config.match_id.as_deref(), Some("42"));
        assert_eq!(config.backend_url, "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
