use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type TeamNumber = u32;

/// Scheduled event as delivered by the FTC events API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub date_start: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub date_end: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub timezone: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stateprov: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Upstream fields we do not model, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// A null field degrades to "" so one sparse record cannot sink the whole list;
// empty dates or zones then normalize to an unparsed instant
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One of the four fixed positions on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    Red1,
    Red2,
    Blue1,
    Blue2,
}

impl Station {
    pub const ALL: [Station; 4] = [Station::Red1, Station::Red2, Station::Blue1, Station::Blue2];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Red1" => Some(Station::Red1),
            "Red2" => Some(Station::Red2),
            "Blue1" => Some(Station::Blue1),
            "Blue2" => Some(Station::Blue2),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    #[serde(default)]
    pub team_number: Option<TeamNumber>,
    #[serde(default, deserialize_with = "deserialize_station")]
    pub station: Option<Station>,
}

// Unknown labels (e.g. surrogate slots) must not fail the whole match list
fn deserialize_station<'de, D>(deserializer: D) -> Result<Option<Station>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Station::from_label))
}

/// Scheduled or completed match between two 2-team alliances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_number: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub actual_start_time: Option<String>,
    #[serde(default)]
    pub scheduled_start_time: Option<String>,
    #[serde(default)]
    pub tournament_level: Option<String>,
    #[serde(default)]
    pub played: bool,
    #[serde(default)]
    pub score_red_final: Option<i32>,
    #[serde(default)]
    pub score_blue_final: Option<i32>,
    #[serde(default)]
    pub teams: Vec<MatchTeam>,
}

impl Match {
    /// Unplayed and no final score on either side
    pub fn is_eligible(&self) -> bool {
        !self.played && self.score_red_final.is_none() && self.score_blue_final.is_none()
    }

    pub fn team_at(&self, station: Station) -> Option<TeamNumber> {
        self.teams
            .iter()
            .find(|t| t.station == Some(station))
            .and_then(|t| t.team_number)
    }

    pub fn start_time(&self) -> Option<String> {
        self.actual_start_time
            .as_ref()
            .filter(|s| !s.is_empty())
            .or(self.scheduled_start_time.as_ref())
            .cloned()
    }

    pub fn level(&self) -> String {
        self.tournament_level
            .as_ref()
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| "Qualification".to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// Precomputed strength profile for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRating {
    /// `None` when upstream sent a null number; such records match no station
    #[serde(default)]
    pub team_number: Option<TeamNumber>,
    #[serde(default)]
    pub opr: Option<f64>,
    #[serde(default)]
    pub dpr: Option<f64>,
    #[serde(default)]
    pub ccwm: Option<f64>,
}

impl TeamRating {
    pub fn new(team_number: TeamNumber, opr: f64, dpr: f64, ccwm: f64) -> Self {
        Self {
            team_number: Some(team_number),
            opr: Some(opr),
            dpr: Some(dpr),
            ccwm: Some(ccwm),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RatingsResponse {
    #[serde(default)]
    pub opr: Vec<TeamRating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_keeps_unmodelled_fields() {
        let json = r#"{
            "code": "USNYNYQ1",
            "name": "NYC Qualifier",
            "dateStart": "2024-06-01T00:00:00",
            "dateEnd": "2024-06-01T00:00:00",
            "timezone": "America/New_York",
            "venue": "Armory",
            "city": "New York",
            "stateprov": "NY",
            "country": "USA",
            "typeName": "Qualifier",
            "published": true
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.code, "USNYNYQ1");
        assert_eq!(event.extra.get("typeName"), Some(&Value::from("Qualifier")));

        let out = serde_json::to_value(&event).unwrap();
        assert_eq!(out["published"], Value::Bool(true));
        assert_eq!(out["dateStart"], "2024-06-01T00:00:00");
    }

    #[test]
    fn test_match_station_lookup_tolerates_unknown_labels() {
        let json = r#"{
            "matchNumber": 7,
            "description": "Qualification 7",
            "scheduledStartTime": "2024-06-01T10:00:00",
            "played": false,
            "scoreRedFinal": null,
            "scoreBlueFinal": null,
            "teams": [
                {"teamNumber": 100, "station": "Red1"},
                {"teamNumber": 200, "station": "Red2"},
                {"teamNumber": 300, "station": "Blue1"},
                {"teamNumber": 999, "station": "Red3"},
                {"teamNumber": null, "station": "Blue2"}
            ]
        }"#;

        let m: Match = serde_json::from_str(json).unwrap();
        assert!(m.is_eligible());
        assert_eq!(m.team_at(Station::Red1), Some(100));
        assert_eq!(m.team_at(Station::Blue1), Some(300));
        assert_eq!(m.team_at(Station::Blue2), None);
        assert_eq!(m.start_time().as_deref(), Some("2024-06-01T10:00:00"));
        assert_eq!(m.level(), "Qualification");
    }

    #[test]
    fn test_match_eligibility_requires_no_scores() {
        let mut m = Match {
            match_number: 1,
            description: String::new(),
            actual_start_time: Some("2024-06-01T10:03:00".to_string()),
            scheduled_start_time: Some("2024-06-01T10:00:00".to_string()),
            tournament_level: Some("Playoff".to_string()),
            played: false,
            score_red_final: None,
            score_blue_final: Some(0),
            teams: Vec::new(),
        };
        assert!(!m.is_eligible());

        m.score_blue_final = None;
        assert!(m.is_eligible());
        assert_eq!(m.start_time().as_deref(), Some("2024-06-01T10:03:00"));
        assert_eq!(m.level(), "Playoff");

        m.played = true;
        assert!(!m.is_eligible());
    }

    #[test]
    fn test_match_without_score_keys_is_eligible() {
        let m: Match = serde_json::from_str(r#"{"matchNumber": 12, "played": false, "teams": []}"#).unwrap();
        assert_eq!(m.score_red_final, None);
        assert!(m.is_eligible());
    }

    #[test]
    fn test_rating_with_null_fields_parses() {
        let json = r#"{"opr": [{"teamNumber": 5, "opr": 12.5, "dpr": null}]}"#;
        let parsed: RatingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.opr.len(), 1);
        assert_eq!(parsed.opr[0].dpr, None);
        assert_eq!(parsed.opr[0].ccwm, None);
    }

    #[test]
    fn test_null_event_fields_do_not_fail_the_list() {
        let json = r#"{"events": [
            {"code": "USNYNYQ1", "name": "NYC Qualifier", "dateStart": "2024-06-01T00:00:00", "dateEnd": "2024-06-01T00:00:00", "timezone": "America/New_York"},
            {"code": "USCAQ2", "name": null, "dateStart": null, "dateEnd": null, "timezone": null, "venue": null}
        ]}"#;

        let parsed: EventsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.events.len(), 2);
        assert_eq!(parsed.events[0].timezone, "America/New_York");
        let sparse = &parsed.events[1];
        assert_eq!(sparse.code, "USCAQ2");
        assert_eq!(sparse.name, "");
        assert_eq!(sparse.date_start, "");
        assert_eq!(sparse.date_end, "");
        assert_eq!(sparse.timezone, "");
        assert_eq!(sparse.venue, None);
    }

    #[test]
    fn test_null_team_number_keeps_other_ratings() {
        let json = r#"{"opr": [
            {"teamNumber": 5, "opr": 12.5, "dpr": 3.0, "ccwm": 9.5},
            {"teamNumber": null, "opr": 40.0, "dpr": 1.0, "ccwm": 39.0}
        ]}"#;

        let parsed: RatingsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.opr.len(), 2);
        assert_eq!(parsed.opr[0].team_number, Some(5));
        assert_eq!(parsed.opr[1].team_number, None);
    }
}
