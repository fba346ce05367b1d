use crate::config::PredictionSettings;

/// Complementary win chances for the two alliances, as fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinProbability {
    pub red: f64,
    pub blue: f64,
}

impl WinProbability {
    /// Each side rounded on its own; the pair may sum to 99 or 101
    pub fn as_percentages(&self) -> (u8, u8) {
        (to_percent(self.red), to_percent(self.blue))
    }
}

/// Linear map from predicted score difference to a clamped red win chance
pub fn win_probability(red_score: f64, blue_score: f64, settings: &PredictionSettings) -> WinProbability {
    let score_diff = red_score - blue_score;
    let raw_red = 0.5 + score_diff / (2.0 * settings.score_uncertainty);
    let red = raw_red.clamp(settings.min_win_probability, settings.max_win_probability);

    // Blue is derived from the clamped value so the pair stays complementary
    WinProbability { red, blue: 1.0 - red }
}

fn to_percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
