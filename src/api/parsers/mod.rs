pub mod params;

pub use params::{EventCodeValidator, parse_team_filter};
