use std::env;

#[derive(Debug, Clone)]
pub struct FtcApiSettings {
    pub base_url: String,
    pub season: i32,
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FtcApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://ftc-api.firstinspires.org/v2.0".to_string(),
            season: 2024,
            username: None,
            api_key: None,
            user_agent: "FtcForecast/1.0",
            timeout_secs: 30,
        }
    }
}

impl FtcApiSettings {
    fn apply_env(&mut self) {
        if let Ok(base_url) = env::var("FTC_API_BASE") {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(season) = env::var("FTC_SEASON").ok().and_then(|s| s.parse().ok()) {
            self.season = season;
        }
        self.username = env::var("FTC_USERNAME").ok();
        self.api_key = env::var("FTC_API_KEY").ok();
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatingServiceSettings {
    /// Origin serving `/api/events/{code}/opr`; ratings are skipped when unset
    pub base_url: Option<String>,
}

impl RatingServiceSettings {
    fn apply_env(&mut self) {
        self.base_url = env::var("RATING_SERVICE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
    }
}

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub lookahead_days: i64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { lookahead_days: 14 }
    }
}

#[derive(Debug, Clone)]
pub struct PredictionSettings {
    /// One standard deviation of match-to-match score variance
    pub score_uncertainty: f64,
    pub min_win_probability: f64,
    pub max_win_probability: f64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            score_uncertainty: 15.0,
            min_win_probability: 0.05,
            max_win_probability: 0.95,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ftc_api: FtcApiSettings,
    pub rating_service: RatingServiceSettings,
    pub window: WindowSettings,
    pub prediction: PredictionSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment (and `.env`, if present)
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::new();
        config.ftc_api.apply_env();
        config.rating_service.apply_env();
        config
    }

    pub fn with_season(mut self, season: Option<i32>) -> Self {
        if let Some(season) = season {
            self.ftc_api.season = season;
        }
        self
    }
}
