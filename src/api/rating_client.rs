use anyhow::{Result, bail};
use log::info;
use urlencoding::encode;

use crate::config::{FtcApiSettings, RatingServiceSettings};
use crate::domain::{RatingsResponse, TeamRating};
use crate::http::ApiHttpClient;

/// Client for the upstream service that publishes per-team OPR/DPR/CCWM
#[derive(Debug, Clone)]
pub struct RatingClient {
    client: ApiHttpClient,
    base_url: Option<String>,
}

impl RatingClient {
    pub fn new(settings: &RatingServiceSettings, api: &FtcApiSettings) -> Result<Self> {
        let client = ApiHttpClient::new(api.user_agent, api.timeout_secs, None)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    pub async fn fetch_ratings(&self, event_code: &str) -> Result<Vec<TeamRating>> {
        let Some(url) = self.build_ratings_url(event_code) else {
            bail!("No rating service configured");
        };
        info!("Fetching ratings for event {}", event_code);

        let response: RatingsResponse = self.client.get_json(&url).await?;
        Ok(response.opr)
    }

    fn build_ratings_url(&self, event_code: &str) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/api/events/{}/opr", base, encode(event_code)))
    }
}
