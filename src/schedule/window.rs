use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use super::timezone::{EventInstant, normalize_end, normalize_start};
use crate::config::WindowSettings;
use crate::domain::Event;

/// Event whose timestamps have been rewritten to UTC where possible
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub event: Event,
    pub start: EventInstant,
    pub end: EventInstant,
}

impl NormalizedEvent {
    /// Both bounds as instants, or `None` if either failed to parse
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start.instant()?, self.end.instant()?))
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= now && now <= end)
    }
}

/// Result of a window selection: retained events plus how many were considered
#[derive(Debug, Clone, PartialEq)]
pub struct EventWindow {
    pub events: Vec<NormalizedEvent>,
    pub total_events: usize,
}

pub fn normalize_event(mut event: Event) -> NormalizedEvent {
    let start = normalize_start(&event.date_start, &event.timezone);
    let end = normalize_end(&event.date_end, &event.timezone);

    event.date_start = start.render();
    event.date_end = end.render();

    NormalizedEvent { event, start, end }
}

/// Keeps events that are live or start within the lookahead, live ones first
pub fn select_window(events: Vec<Event>, now: DateTime<Utc>, settings: &WindowSettings) -> EventWindow {
    let total_events = events.len();
    let horizon = now + TimeDelta::days(settings.lookahead_days);

    let mut retained: Vec<(bool, DateTime<Utc>, NormalizedEvent)> = events
        .into_iter()
        .map(normalize_event)
        .filter_map(|normalized| {
            let Some((start, end)) = normalized.bounds() else {
                debug!("Skipping event {} with unparsed dates", normalized.event.code);
                return None;
            };
            if end < now || start > horizon {
                return None;
            }
            Some((normalized.is_live(now), start, normalized))
        })
        .collect();

    // `sort_by` is stable, so equal keys keep their input order
    retained.sort_by(|(a_live, a_start, _), (b_live, b_start, _)| {
        b_live.cmp(a_live).then(a_start.cmp(b_start))
    });

    EventWindow {
        events: retained.into_iter().map(|(_, _, normalized)| normalized).collect(),
        total_events,
    }
}
