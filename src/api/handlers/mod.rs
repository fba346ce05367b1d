use serde::Deserialize;

use crate::api::parsers::EventCodeValidator;
use crate::services::forecast::ForecastService;

pub mod events;
pub mod predictions;

pub struct AppState {
    pub forecast: ForecastService,
    pub event_codes: EventCodeValidator,
}

#[derive(Debug, Deserialize)]
pub struct PredictionParams {
    pub team: Option<String>,
}
