use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fmt::Write as _;

use crate::prediction::{Confidence, MatchPrediction, PredictionReport};
use crate::schedule::EventWindow;

/// Human-readable listing of an event window, live events highlighted
pub fn render_upcoming(window: &EventWindow, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} upcoming of {} total events",
        window.events.len().to_string().bold(),
        window.total_events
    );

    for normalized in &window.events {
        let event = &normalized.event;
        let marker = if normalized.is_live(now) {
            "LIVE".green().bold()
        } else {
            "    ".normal()
        };
        let place = [event.city.as_deref(), event.stateprov.as_deref(), event.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "{} {:<10} {}  {} -> {}  {}",
            marker,
            event.code.cyan(),
            event.name,
            event.date_start,
            event.date_end,
            place.dimmed()
        );
    }

    out
}

/// Table of predictions followed by the run summary
pub fn render_predictions(event_code: &str, report: &PredictionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Predictions for {}", event_code.cyan().bold());

    if report.predictions.is_empty() {
        let _ = writeln!(out, "{}", "No unplayed matches".dimmed());
    }

    for prediction in &report.predictions {
        let _ = writeln!(out, "{}", render_prediction(prediction));
    }

    let _ = writeln!(
        out,
        "method: {}  teams analyzed: {}  data quality: {:?}",
        report.summary.method, report.summary.teams_analyzed, report.summary.data_quality
    );
    out
}

fn render_prediction(p: &MatchPrediction) -> String {
    let red = format!("{:>5} {:>5}  {:>3} ({:>2}%)", p.red1, p.red2, p.predicted_red_score, p.red_win_probability);
    let blue = format!("{:>3} ({:>2}%)  {:>5} {:>5}", p.predicted_blue_score, p.blue_win_probability, p.blue1, p.blue2);
    format!(
        "{:>4} {:<20} {} vs {}  {}",
        p.match_number,
        p.description,
        red.red(),
        blue.blue(),
        confidence_label(p.confidence)
    )
}

fn confidence_label(confidence: Confidence) -> colored::ColoredString {
    match confidence {
        Confidence::High => confidence.as_str().green(),
        Confidence::Medium => confidence.as_str().yellow(),
        Confidence::Low => confidence.as_str().red(),
    }
}
