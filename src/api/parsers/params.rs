use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::domain::TeamNumber;

/// Validates event codes before they are placed into upstream URLs
#[derive(Debug, Clone)]
pub struct EventCodeValidator {
    event_code_regex: Regex,
}

impl EventCodeValidator {
    pub fn new() -> Result<Self> {
        let event_code_regex = Self::compile_regex()?;
        Ok(Self { event_code_regex })
    }

    pub fn parse(&self, raw: &str) -> Result<String> {
        let code = raw.trim();
        if !self.event_code_regex.is_match(code) {
            bail!("Invalid event code: {:?}", raw);
        }
        Ok(code.to_uppercase())
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^[A-Za-z0-9]{1,32}$").context("Failed to compile event code regex")
    }
}

/// Empty or absent means "all teams"
pub fn parse_team_filter(raw: Option<&str>) -> Result<Option<TeamNumber>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(team) => team
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid team number: {:?}", team)),
        None => Ok(None),
    }
}
