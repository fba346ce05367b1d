use log::debug;

use super::probability::win_probability;
use super::ratings::RatingBook;
use super::types::{AllianceStrength, Confidence, MatchPrediction, PredictionReport, PredictionSummary, RatingProfile};
use crate::config::PredictionSettings;
use crate::domain::{Match, Station, TeamRating};

/// Predicts every unplayed match from per-team OPR/DPR
pub fn predict_matches(
    matches: &[Match],
    ratings: &[TeamRating],
    settings: &PredictionSettings,
) -> PredictionReport {
    // 1. Index the ratings; an empty book is fine and drives confidence to low
    let book = RatingBook::new(ratings);

    // 2. Predict eligible matches, preserving input order
    let predictions: Vec<MatchPrediction> = matches
        .iter()
        .filter(|m| m.is_eligible())
        .map(|m| predict_match(m, &book, settings))
        .collect();

    debug!(
        "Predicted {} of {} matches with {} rated teams",
        predictions.len(),
        matches.len(),
        book.record_count()
    );

    PredictionReport {
        predictions,
        summary: PredictionSummary::from_rating_count(book.record_count()),
    }
}

pub fn predict_match(m: &Match, book: &RatingBook, settings: &PredictionSettings) -> MatchPrediction {
    let [red1, red2, blue1, blue2] = Station::ALL.map(|station| book.rating_of(m.team_at(station)));

    let red = AllianceStrength::of(&red1, &red2);
    let blue = AllianceStrength::of(&blue1, &blue2);

    let red_score = red.expected_score_against(&blue);
    let blue_score = blue.expected_score_against(&red);

    let (red_win_probability, blue_win_probability) =
        win_probability(red_score, blue_score, settings).as_percentages();

    MatchPrediction {
        match_number: m.match_number,
        description: m.description.clone(),
        start_time: m.start_time(),
        red1: m.team_at(Station::Red1).unwrap_or(0),
        red2: m.team_at(Station::Red2).unwrap_or(0),
        blue1: m.team_at(Station::Blue1).unwrap_or(0),
        blue2: m.team_at(Station::Blue2).unwrap_or(0),
        predicted_red_score: round_score(red_score),
        predicted_blue_score: round_score(blue_score),
        red_win_probability,
        blue_win_probability,
        confidence: classify_confidence(book, &[red1, red2, blue1, blue2]),
        tournament_level: m.level(),
    }
}

fn classify_confidence(book: &RatingBook, participants: &[RatingProfile]) -> Confidence {
    if book.is_empty() {
        Confidence::Low
    } else if participants.iter().all(RatingProfile::is_rated) {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

fn round_score(score: f64) -> u32 {
    score.round() as u32
}
