use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::api::{FtcClient, RatingClient};
use crate::config::{AppConfig, PredictionSettings};
use crate::domain::{Match, TeamNumber, TeamRating};
use crate::prediction::{self, PredictionReport, PredictionSummary};
use crate::schedule::{self, EventWindow};

/// Fetches upstream data and runs the window selector and match predictor on it
#[derive(Debug, Clone)]
pub struct ForecastService {
    config: AppConfig,
    ftc: FtcClient,
    ratings: RatingClient,
}

impl ForecastService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            ftc: FtcClient::new(&config.ftc_api)?,
            ratings: RatingClient::new(&config.rating_service, &config.ftc_api)?,
            config,
        })
    }

    pub async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<EventWindow> {
        info!("Fetching upcoming events...");
        let events = self.ftc.fetch_events().await?;

        let window = schedule::select_window(events, now, &self.config.window);
        info!(
            "Found {} upcoming events out of {} total events",
            window.events.len(),
            window.total_events
        );
        Ok(window)
    }

    pub async fn predictions(&self, event_code: &str, team: Option<TeamNumber>) -> PredictionReport {
        info!("Fetching prediction data for event: {}", event_code);

        let (matches, ratings) = tokio::join!(
            self.ftc.fetch_matches(event_code, team),
            self.ratings.fetch_ratings(event_code),
        );

        let report = assemble_report(matches, ratings, &self.config.prediction);
        info!(
            "Generated {} match predictions using {}",
            report.predictions.len(),
            report.summary.method
        );
        report
    }
}

/// Joins the two fetch outcomes: missing ratings degrade, missing matches fail the run
pub fn assemble_report(
    matches: Result<Vec<Match>>,
    ratings: Result<Vec<TeamRating>>,
    settings: &PredictionSettings,
) -> PredictionReport {
    let matches = match matches {
        Ok(matches) => matches,
        Err(e) => {
            error!("Error fetching matches: {:#}", e);
            return PredictionReport {
                predictions: Vec::new(),
                summary: PredictionSummary::failed(),
            };
        }
    };

    let ratings = ratings.unwrap_or_else(|e| {
        warn!("Rating data unavailable ({:#}), using fallback prediction method", e);
        Vec::new()
    });

    prediction::predict_matches(&matches, &ratings, settings)
}
