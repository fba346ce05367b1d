pub mod settings;

pub use settings::{AppConfig, FtcApiSettings, PredictionSettings, RatingServiceSettings, WindowSettings};
