use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::api::models::UpcomingEventsResponse;

pub async fn get_upcoming_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.forecast.upcoming_events(Utc::now()).await {
        Ok(window) => Json(UpcomingEventsResponse::from(window)),
        Err(e) => {
            error!("Error fetching upcoming events: {:#}", e);
            Json(UpcomingEventsResponse::failure(format!("{:#}", e)))
        }
    }
}
