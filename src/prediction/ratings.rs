use std::collections::HashMap;

use super::types::RatingProfile;
use crate::domain::{TeamNumber, TeamRating};

/// Team number -> rating profile for a single event
#[derive(Debug, Clone, Default)]
pub struct RatingBook {
    profiles: HashMap<TeamNumber, RatingProfile>,
    records: usize,
}

impl RatingBook {
    pub fn new(ratings: &[TeamRating]) -> Self {
        let profiles = ratings
            .iter()
            .filter_map(|rating| Some((rating.team_number?, RatingProfile::from(rating))))
            .collect();

        Self {
            profiles,
            records: ratings.len(),
        }
    }

    /// Total lookup: unknown teams and empty stations get [`RatingProfile::ZERO`]
    pub fn rating_of(&self, team: Option<TeamNumber>) -> RatingProfile {
        team.and_then(|number| self.profiles.get(&number))
            .copied()
            .unwrap_or(RatingProfile::ZERO)
    }

    /// Number of rating records supplied, duplicates included
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_team_resolves_profile() {
        let book = RatingBook::new(&[TeamRating::new(100, 50.0, 10.0, 40.0)]);

        let profile = book.rating_of(Some(100));
        assert_eq!(profile.opr, 50.0);
        assert_eq!(profile.dpr, 10.0);
        assert_eq!(profile.ccwm, 40.0);
    }

    #[test]
    fn test_missing_team_and_empty_station_default_to_zero() {
        let book = RatingBook::new(&[TeamRating::new(100, 50.0, 10.0, 40.0)]);

        assert_eq!(book.rating_of(Some(4242)), RatingProfile::ZERO);
        assert_eq!(book.rating_of(None), RatingProfile::ZERO);
    }

    #[test]
    fn test_null_fields_count_as_zero() {
        let rating = TeamRating {
            team_number: Some(7),
            opr: Some(12.0),
            dpr: None,
            ccwm: None,
        };
        let book = RatingBook::new(&[rating]);

        let profile = book.rating_of(Some(7));
        assert_eq!(profile.dpr, 0.0);
        assert!(profile.is_rated());
    }

    #[test]
    fn test_unnumbered_record_is_counted_but_not_indexed() {
        let unnumbered = TeamRating {
            team_number: None,
            opr: Some(40.0),
            dpr: Some(1.0),
            ccwm: Some(39.0),
        };
        let book = RatingBook::new(&[TeamRating::new(5, 12.5, 3.0, 9.5), unnumbered]);

        assert_eq!(book.record_count(), 2);
        assert_eq!(book.rating_of(Some(5)).opr, 12.5);
        assert_eq!(book.rating_of(None), RatingProfile::ZERO);
    }

    #[test]
    fn test_empty_book() {
        let book = RatingBook::new(&[]);
        assert!(book.is_empty());
        assert_eq!(book.record_count(), 0);
    }
}
