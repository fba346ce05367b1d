pub mod predictor;
pub mod probability;
pub mod ratings;
pub mod types;

pub use predictor::{predict_match, predict_matches};
pub use probability::{WinProbability, win_probability};
pub use ratings::RatingBook;
pub use types::{
    AllianceStrength, Confidence, DataQuality, MatchPrediction, PredictionReport, PredictionSummary,
    RatingProfile,
};
