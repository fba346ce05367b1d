use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, PredictionParams};
use crate::api::models::{ErrorResponse, PredictionsResponse};
use crate::api::parsers::parse_team_filter;

pub async fn get_event_predictions(
    State(state): State<Arc<AppState>>,
    Path(event_code): Path<String>,
    Query(params): Query<PredictionParams>,
) -> impl IntoResponse {
    let event_code = match state.event_codes.parse(&event_code) {
        Ok(code) => code,
        Err(e) => return bad_request(e),
    };

    let team = match parse_team_filter(params.team.as_deref()) {
        Ok(team) => team,
        Err(e) => return bad_request(e),
    };

    let report = state.forecast.predictions(&event_code, team).await;
    Json(PredictionsResponse::from(report)).into_response()
}

fn bad_request(e: anyhow::Error) -> axum::response::Response {
    let body = ErrorResponse { error: e.to_string() };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
