use anyhow::Result;
use log::info;

use crate::config::FtcApiSettings;
use crate::domain::{Event, EventsResponse, Match, MatchesResponse, TeamNumber};
use crate::http::{ApiHttpClient, BasicCredentials};

/// FTC events API client
#[derive(Debug, Clone)]
pub struct FtcClient {
    client: ApiHttpClient,
    base_url: String,
    season: i32,
}

impl FtcClient {
    pub fn new(settings: &FtcApiSettings) -> Result<Self> {
        let client = ApiHttpClient::new(settings.user_agent, settings.timeout_secs, Self::credentials(settings))?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            season: settings.season,
        })
    }

    /// Fetch every event of the configured season
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let url = self.build_events_url();
        info!("Fetching events for season {}", self.season);

        let response: EventsResponse = self.client.get_json(&url).await?;
        Ok(response.events)
    }

    /// Fetch the match schedule of one event, optionally limited to one team
    pub async fn fetch_matches(&self, event_code: &str, team: Option<TeamNumber>) -> Result<Vec<Match>> {
        let url = self.build_matches_url(event_code, team);
        info!("Fetching matches for event {}", event_code);

        let response: MatchesResponse = self.client.get_json(&url).await?;
        Ok(response.matches)
    }

    // --- Helper Methods ---

    fn credentials(settings: &FtcApiSettings) -> Option<BasicCredentials> {
        match (&settings.username, &settings.api_key) {
            (Some(username), Some(api_key)) => Some(BasicCredentials {
                username: username.clone(),
                password: api_key.clone(),
            }),
            _ => None,
        }
    }

    fn build_events_url(&self) -> String {
        format!("{}/{}/events", self.base_url, self.season)
    }

    fn build_matches_url(&self, event_code: &str, team: Option<TeamNumber>) -> String {
        let base = format!("{}/{}/matches/{}", self.base_url, self.season, event_code.to_uppercase());
        match team {
            Some(team) => format!("{}?teamNumber={}", base, team),
            None => base,
        }
    }
}
