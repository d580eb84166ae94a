// src/params.rs
//! Request vocabulary and validation.
//!
//! Every user-facing parameter is checked against a closed list before any URL
//! is built. Shared vocabularies live here; league-specific lists (seasons,
//! phases offered, categories) live in `leagues`.

use crate::config::options::Operation;
use crate::error::{Error, Result};

pub const FIELD_SEASON: &str = "season";
pub const FIELD_PHASE: &str = "phase";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_AGGREGATION: &str = "aggregation";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_VENUE: &str = "venue";
pub const FIELD_CONCEDED: &str = "conceded";

/// Return the domain entry equal to `value`, or `InvalidParameter` listing the domain.
pub fn validate<'a>(field: &'static str, value: &str, domain: &[&'a str]) -> Result<&'a str> {
    domain
        .iter()
        .copied()
        .find(|d| *d == value)
        .ok_or_else(|| Error::invalid(field, value, domain))
}

/// `true` / `false`, any case.
pub fn validate_flag(field: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidFlag { field, value: s!(value) }),
    }
}

/// Competition stage filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Regular,
    Playoffs,
    Total,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Regular, Phase::Playoffs, Phase::Total];

    pub fn key(&self) -> &'static str {
        match self {
            Phase::Regular => "regular",
            Phase::Playoffs => "playoffs",
            Phase::Total => "total",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Aggregation {
    #[default]
    Average,
    Sum,
}

impl Aggregation {
    pub const KEYS: [&'static str; 2] = ["avg", "sum"];

    pub fn key(&self) -> &'static str {
        match self {
            Aggregation::Average => "avg",
            Aggregation::Sum => "sum",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let k = validate(FIELD_AGGREGATION, s, &Self::KEYS)?;
        Ok(if k == "sum" { Aggregation::Sum } else { Aggregation::Average })
    }
}

/// Who the stats aggregate over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subject {
    #[default]
    Athletes,
    Teams,
}

impl Subject {
    pub const KEYS: [&'static str; 2] = ["athletes", "teams"];

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Athletes => "athletes",
            Subject::Teams => "teams",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let k = validate(FIELD_SUBJECT, s, &Self::KEYS)?;
        Ok(if k == "teams" { Subject::Teams } else { Subject::Athletes })
    }
}

/// Home/away filter. Leagues without venue support only accept `Both`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Venue {
    #[default]
    Both,
    Home,
    Away,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::Both, Venue::Home, Venue::Away];

    pub fn key(&self) -> &'static str {
        match self {
            Venue::Both => "ambos",
            Venue::Home => "mandante",
            Venue::Away => "visitante",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == s)
    }
}

/// Raw, unvalidated stats request as typed by a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsRequest {
    pub season: String,
    pub phase: String,
    pub category: String,
    pub aggregation: String,
    pub subject: String,
    pub venue: String,
    pub conceded: String,
}

impl StatsRequest {
    pub fn new(season: &str, phase: &str, category: &str) -> Self {
        Self {
            season: s!(season),
            phase: s!(phase),
            category: s!(category),
            aggregation: s!(Aggregation::default().key()),
            subject: s!(Subject::default().key()),
            venue: s!(Venue::default().key()),
            conceded: s!("false"),
        }
    }

    pub fn aggregation(mut self, v: &str) -> Self { self.aggregation = s!(v); self }
    pub fn subject(mut self, v: &str) -> Self { self.subject = s!(v); self }
    pub fn venue(mut self, v: &str) -> Self { self.venue = s!(v); self }
    pub fn conceded(mut self, v: impl ToString) -> Self { self.conceded = v.to_string(); self }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsQuery {
    pub season: String,
    pub phase: Phase,
    pub category: String,
    pub aggregation: Aggregation,
    pub subject: Subject,
    pub venue: Venue,
    pub conceded: bool,
}

/// Validated request. Only `LeagueConfig` builds these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Classification { season: String },
    Scores { season: String, phase: Phase },
    Stats(StatsQuery),
}

impl Query {
    pub fn operation(&self) -> Operation {
        match self {
            Query::Classification { .. } => Operation::Classification,
            Query::Scores { .. } => Operation::Scores,
            Query::Stats(_) => Operation::Stats,
        }
    }

    pub fn season(&self) -> &str {
        match self {
            Query::Classification { season } | Query::Scores { season, .. } => season,
            Query::Stats(q) => &q.season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_returns_domain_entry() {
        assert_eq!(validate(FIELD_SEASON, "2023", &["2022", "2023"]).unwrap(), "2023");
        let err = validate(FIELD_SEASON, "1999", &["2022", "2023"]).unwrap_err();
        assert_eq!(err.to_string(), "1999 is not a valid season. Try one of: 2022, 2023");
    }

    #[test]
    fn flags_accept_any_case() {
        assert!(validate_flag(FIELD_CONCEDED, "TRUE").unwrap());
        assert!(!validate_flag(FIELD_CONCEDED, "False").unwrap());
        let err = validate_flag(FIELD_CONCEDED, "yes").unwrap_err();
        assert_eq!(err.to_string(), "yes is not a valid conceded: must be true or false");
    }

    #[test]
    fn stats_request_defaults() {
        let r = StatsRequest::new("2023-24", "regular", "pontos");
        assert_eq!(r.aggregation, "avg");
        assert_eq!(r.subject, "athletes");
        assert_eq!(r.venue, "ambos");
        assert_eq!(r.conceded, "false");
        assert_eq!(r.conceded(true).conceded, "true");
    }

    #[test]
    fn shared_vocabularies() {
        assert_eq!(Aggregation::parse("sum").unwrap(), Aggregation::Sum);
        assert!(Aggregation::parse("media").is_err());
        assert_eq!(Subject::parse("teams").unwrap(), Subject::Teams);
        assert_eq!(Venue::from_key("visitante"), Some(Venue::Away));
        assert_eq!(Phase::from_key("total"), Some(Phase::Total));
        assert_eq!(Phase::from_key("finals"), None);
    }
}
