use std::{fs, path::Path, time::Duration};

use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    models::{MatchDetails, MatchSummary},
    overlay::ImageRequest,
};

/// Client for the match insight backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ViewerError::InvalidBackendUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ViewerError::InvalidBackendUrl(base_url.to_owned()));
        }
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::new(&config.backend_url, config.timeout())
    }

    pub fn matches_url(&self) -> Url {
        self.endpoint(&["matches"])
    }

    pub fn match_details_url(&self, match_id: &str) -> Url {
        self.endpoint(&["matches", match_id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn matches(&self) -> Result<Vec<MatchSummary>> {
        let url = self.matches_url();
        info!(%url, "fetching match list");
        let matches = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(matches)
    }

    pub async fn match_details(&self, match_id: &str) -> Result<MatchDetails> {
        let url = self.match_details_url(match_id);
        info!(%url, "fetching match details");
        let details = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(details)
    }
}

/// Reads a match details document exported from the backend.
pub fn load_match_file(path: &Path) -> Result<MatchDetails> {
    info!(path = %path.display(), "loading match details from file");
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Downloads a card image for the preview overlay. Returns the card name with
/// the bytes, or `None` when the download failed.
pub async fn download_image(request: ImageRequest) -> (String, Option<Bytes>) {
    let bytes = match fetch_bytes(&request.uri).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(card_name = %request.card_name, "image download failed: {}", e);
            None
        }
    };
    (request.card_name, bytes)
}

async fn fetch_bytes(uri: &str) -> Result<Bytes> {
    Ok(reqwest::get(uri).await?.error_for_status()?.bytes().await?)
}
