use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, TimeZone,
    Utc,
};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of normalizing one event timestamp to UTC
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventInstant {
    Normalized(DateTime<Utc>),
    /// Timestamp or zone could not be interpreted; raw text kept as-is
    Unparsed(String),
}

impl EventInstant {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            EventInstant::Normalized(dt) => Some(*dt),
            EventInstant::Unparsed(_) => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            EventInstant::Normalized(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            EventInstant::Unparsed(raw) => raw.clone(),
        }
    }
}

/// Interpret `raw` as wall-clock time in `timezone` and convert to UTC
pub fn normalize_start(raw: &str, timezone: &str) -> EventInstant {
    to_instant(raw, timezone.parse::<Tz>().ok().and_then(|tz| parse_in_zone(raw, &tz)))
}

/// Like [`normalize_start`], but first advanced to 23:59:59.999 of the local day
pub fn normalize_end(raw: &str, timezone: &str) -> EventInstant {
    let end_of_day = timezone
        .parse::<Tz>()
        .ok()
        .and_then(|tz| parse_in_zone(raw, &tz).and_then(|local| end_of_local_day(&local, &tz)));
    to_instant(raw, end_of_day)
}

fn to_instant(raw: &str, local: Option<DateTime<Tz>>) -> EventInstant {
    match local {
        Some(dt) => EventInstant::Normalized(dt.with_timezone(&Utc)),
        None => EventInstant::Unparsed(raw.to_string()),
    }
}

fn parse_in_zone(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let trimmed = raw.trim();

    // An explicit offset pins the instant; the zone only decides the local day
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(tz));
    }

    parse_naive(trimmed).and_then(|naive| localize(tz, naive))
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn end_of_local_day(local: &DateTime<Tz>, tz: &Tz) -> Option<DateTime<Tz>> {
    let last_moment = local.date_naive().and_hms_milli_opt(23, 59, 59, 999)?;
    localize(tz, last_moment)
}

fn localize(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        // Skipped by a DST jump: resolve to the same wall time an hour later
        LocalResult::None => tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest(),
    }
}
