use serde::Serialize;

use crate::domain::Event;
use crate::prediction::{MatchPrediction, PredictionReport, PredictionSummary};
use crate::schedule::EventWindow;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEventsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_events: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpcomingEventsResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            events: None,
            total_events: None,
            error: Some(error.into()),
        }
    }
}

impl From<EventWindow> for UpcomingEventsResponse {
    fn from(window: EventWindow) -> Self {
        Self {
            success: true,
            events: Some(window.events.into_iter().map(|normalized| normalized.event).collect()),
            total_events: Some(window.total_events),
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionsResponse {
    pub predictions: Vec<MatchPrediction>,
    pub opr_calculation: PredictionSummary,
}

impl From<PredictionReport> for PredictionsResponse {
    fn from(report: PredictionReport) -> Self {
        Self {
            predictions: report.predictions,
            opr_calculation: report.summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_payload_fields() {
        let value = serde_json::to_value(UpcomingEventsResponse::failure("401 Unauthorized")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "401 Unauthorized"}));
    }

    #[test]
    fn test_window_response_shape() {
        let window = EventWindow {
            events: Vec::new(),
            total_events: 12,
        };
        let value = serde_json::to_value(UpcomingEventsResponse::from(window)).unwrap();
        assert_eq!(value, json!({"success": true, "events": [], "totalEvents": 12}));
    }

    #[test]
    fn test_failed_predictions_shape() {
        let report = PredictionReport {
            predictions: Vec::new(),
            summary: PredictionSummary::failed(),
        };
        let value = serde_json::to_value(PredictionsResponse::from(report)).unwrap();
        assert_eq!(
            value,
            json!({
                "predictions": [],
                "oprCalculation": {"method": "failed", "teamsAnalyzed": 0, "dataQuality": "none"}
            })
        );
    }
}
