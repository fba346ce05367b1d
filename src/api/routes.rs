use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{AppState, events::get_upcoming_events, predictions::get_event_predictions};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/events/upcoming", get(get_upcoming_events))
        .route("/api/events/:event_code/predictions", get(get_event_predictions))
        .with_state(state)
}
