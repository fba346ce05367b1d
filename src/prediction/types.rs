use serde::{Deserialize, Serialize};

use crate::domain::{TeamNumber, TeamRating};

pub const PREDICTION_METHOD: &str = "custom_matrix_algebra";
pub const FAILED_METHOD: &str = "failed";

/// Strength profile used by the predictor; missing data is all zeros
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingProfile {
    pub opr: f64,
    pub dpr: f64,
    pub ccwm: f64,
}

impl RatingProfile {
    pub const ZERO: RatingProfile = RatingProfile {
        opr: 0.0,
        dpr: 0.0,
        ccwm: 0.0,
    };

    /// A team counts as rated when either side of its profile is non-zero
    pub fn is_rated(&self) -> bool {
        self.opr != 0.0 || self.dpr != 0.0
    }
}

impl From<&TeamRating> for RatingProfile {
    fn from(rating: &TeamRating) -> Self {
        Self {
            opr: rating.opr.unwrap_or(0.0),
            dpr: rating.dpr.unwrap_or(0.0),
            ccwm: rating.ccwm.unwrap_or(0.0),
        }
    }
}

/// Summed ratings of the two teams on one alliance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllianceStrength {
    pub opr: f64,
    pub dpr: f64,
}

impl AllianceStrength {
    pub fn of(first: &RatingProfile, second: &RatingProfile) -> Self {
        Self {
            opr: first.opr + second.opr,
            dpr: first.dpr + second.dpr,
        }
    }

    /// Expected output against `opponent`, never below zero
    pub fn expected_score_against(&self, opponent: &AllianceStrength) -> f64 {
        (self.opr - opponent.dpr).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,    // no rating data for the event
    Medium, // some participant unrated
    High,   // every participant rated
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    Good,
    Limited,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPrediction {
    pub match_number: u32,
    pub description: String,
    pub start_time: Option<String>,
    pub red1: TeamNumber,
    pub red2: TeamNumber,
    pub blue1: TeamNumber,
    pub blue2: TeamNumber,
    pub predicted_red_score: u32,
    pub predicted_blue_score: u32,
    pub red_win_probability: u8,
    pub blue_win_probability: u8,
    pub confidence: Confidence,
    pub tournament_level: String,
}

/// Metadata describing how a prediction run was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub method: String,
    pub teams_analyzed: usize,
    pub data_quality: DataQuality,
}

impl PredictionSummary {
    pub fn from_rating_count(teams_analyzed: usize) -> Self {
        let data_quality = if teams_analyzed > 0 {
            DataQuality::Good
        } else {
            DataQuality::Limited
        };
        Self {
            method: PREDICTION_METHOD.to_string(),
            teams_analyzed,
            data_quality,
        }
    }

    /// Reported when match data itself could not be obtained
    pub fn failed() -> Self {
        Self {
            method: FAILED_METHOD.to_string(),
            teams_analyzed: 0,
            data_quality: DataQuality::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub predictions: Vec<MatchPrediction>,
    pub summary: PredictionSummary,
}
