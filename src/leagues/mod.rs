// src/leagues/mod.rs
//! League adapters.
//!
//! The three leagues share one pipeline. Everything that differs between them
//! (paths, season codes, phase encodings, venue support, error policy) is data
//! in a `LeagueConfig`; `Adapter` is the one implementation of `League`.

pub mod ldb;
pub mod liga_ouro;
pub mod nbb;

use crate::config::options::{FetchOptions, Operation};
use crate::core::net::{Fetch, HttpFetcher};
use crate::data::ResultTable;
use crate::error::{Error, Result};
use crate::params::{
    validate, validate_flag, Aggregation, Phase, Query, StatsQuery, StatsRequest, Subject, Venue,
    FIELD_CATEGORY, FIELD_CONCEDED, FIELD_PHASE, FIELD_SEASON, FIELD_VENUE,
};
use crate::scrape;

/// What to do when a classification/scores page cannot be fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Return the `Fetch` error to the caller.
    Propagate,
    /// Log a warning and return an empty, correctly-shaped table with an advisory.
    Degrade,
}

/// Query parameter carrying the home/away filter, with its code table.
#[derive(Debug)]
pub struct VenueParam {
    pub name: &'static str,
    pub codes: &'static [(Venue, &'static str)],
}

#[derive(Debug)]
pub struct LeagueConfig {
    pub key: &'static str,
    pub name: &'static str,
    /// `{season}` is replaced by the season label.
    pub classification_path: &'static str,
    pub scores_path: &'static str,
    /// `{category}` is replaced by the stats category.
    pub stats_path: &'static str,
    /// Season label → site-internal season id.
    pub season_codes: &'static [(&'static str, &'static str)],
    /// Seasons with a standings page but no season id.
    pub extra_classification_seasons: &'static [&'static str],
    /// When set, only these seasons have a working standings page.
    pub classification_live: Option<&'static [&'static str]>,
    pub classification_advisory: &'static str,
    /// Phase → complete query fragment (`phase%5B%5D=1`, …).
    pub phases: &'static [(Phase, &'static str)],
    pub categories: &'static [&'static str],
    pub venue: Option<VenueParam>,
    /// Seasons whose score page has one unnamed column fewer.
    pub legacy_score_seasons: &'static [&'static str],
    pub fetch_policy: FetchPolicy,
    pub unavailable_advisory: &'static str,
}

impl LeagueConfig {
    /// Legal season labels for an operation, oldest first.
    pub fn seasons(&self, op: Operation) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = self.season_codes.iter().map(|(s, _)| *s).collect();
        if op == Operation::Classification {
            out.extend(self.extra_classification_seasons.iter().copied());
        }
        out
    }

    pub fn phase_keys(&self) -> Vec<&'static str> {
        self.phases.iter().map(|(p, _)| p.key()).collect()
    }

    pub fn categories(&self) -> &'static [&'static str] {
        self.categories
    }

    pub fn venue_keys(&self) -> Vec<&'static str> {
        match &self.venue {
            Some(v) => v.codes.iter().map(|(v, _)| v.key()).collect(),
            None => vec![Venue::Both.key()],
        }
    }

    pub fn supports_venue(&self) -> bool {
        self.venue.is_some()
    }

    pub fn season_code(&self, season: &str) -> Option<&'static str> {
        self.season_codes.iter().find(|(s, _)| *s == season).map(|(_, c)| *c)
    }

    pub fn phase_fragment(&self, phase: Phase) -> Option<&'static str> {
        self.phases.iter().find(|(p, _)| *p == phase).map(|(_, f)| *f)
    }

    /// `(param name, code)` for leagues that filter by venue.
    pub fn venue_code(&self, venue: Venue) -> Option<(&'static str, &'static str)> {
        let param = self.venue.as_ref()?;
        param.codes.iter().find(|(v, _)| *v == venue).map(|(_, c)| (param.name, *c))
    }

    pub fn classification_is_live(&self, season: &str) -> bool {
        self.classification_live.is_none_or(|live| live.contains(&season))
    }

    pub fn is_legacy_score_season(&self, season: &str) -> bool {
        self.legacy_score_seasons.contains(&season)
    }

    fn valid_season(&self, op: Operation, season: &str) -> Result<String> {
        validate(FIELD_SEASON, season, &self.seasons(op)).map(|s| s!(s))
    }

    fn valid_phase(&self, phase: &str) -> Result<Phase> {
        let key = validate(FIELD_PHASE, phase, &self.phase_keys())?;
        Phase::from_key(key).ok_or_else(|| Error::invalid(FIELD_PHASE, phase, &self.phase_keys()))
    }

    pub fn classification_query(&self, season: &str) -> Result<Query> {
        Ok(Query::Classification { season: self.valid_season(Operation::Classification, season)? })
    }

    pub fn scores_query(&self, season: &str, phase: &str) -> Result<Query> {
        Ok(Query::Scores {
            season: self.valid_season(Operation::Scores, season)?,
            phase: self.valid_phase(phase)?,
        })
    }

    /// Fields are checked in request order; the first bad one is reported.
    pub fn stats_query(&self, req: &StatsRequest) -> Result<Query> {
        let season = self.valid_season(Operation::Stats, &req.season)?;
        let phase = self.valid_phase(&req.phase)?;
        let category = s!(validate(FIELD_CATEGORY, &req.category, self.categories)?);
        let aggregation = Aggregation::parse(&req.aggregation)?;
        let subject = Subject::parse(&req.subject)?;
        let venue_keys = self.venue_keys();
        let venue = validate(FIELD_VENUE, &req.venue, &venue_keys)
            .map(Venue::from_key)?
            .unwrap_or_default();
        let conceded = validate_flag(FIELD_CONCEDED, &req.conceded)?;
        Ok(Query::Stats(StatsQuery { season, phase, category, aggregation, subject, venue, conceded }))
    }
}

/// The operations every league exposes.
pub trait League {
    fn config(&self) -> &'static LeagueConfig;
    fn classification(&self, season: &str) -> Result<ResultTable>;
    fn scores(&self, season: &str, phase: &str) -> Result<ResultTable>;
    fn stats(&self, req: &StatsRequest) -> Result<ResultTable>;
}

/// `LeagueConfig` + page source + base URL.
#[derive(Debug)]
pub struct Adapter<F> {
    config: &'static LeagueConfig,
    fetcher: F,
    base_url: String,
}

impl<F: Fetch> Adapter<F> {
    pub fn new(config: &'static LeagueConfig, fetcher: F, base_url: &str) -> Self {
        Self { config, fetcher, base_url: s!(base_url.trim_end_matches('/')) }
    }

    fn run(&self, query: Query) -> Result<ResultTable> {
        scrape::run(self.config, &self.fetcher, &self.base_url, &query)
    }
}

impl<F: Fetch> League for Adapter<F> {
    fn config(&self) -> &'static LeagueConfig {
        self.config
    }

    fn classification(&self, season: &str) -> Result<ResultTable> {
        self.run(self.config.classification_query(season)?)
    }

    fn scores(&self, season: &str, phase: &str) -> Result<ResultTable> {
        self.run(self.config.scores_query(season, phase)?)
    }

    fn stats(&self, req: &StatsRequest) -> Result<ResultTable> {
        self.run(self.config.stats_query(req)?)
    }
}

/// Closed set of supported leagues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LeagueKind {
    #[default]
    Nbb,
    LigaOuro,
    Ldb,
}

impl LeagueKind {
    pub const ALL: [LeagueKind; 3] = [LeagueKind::Nbb, LeagueKind::LigaOuro, LeagueKind::Ldb];

    pub fn config(&self) -> &'static LeagueConfig {
        match self {
            LeagueKind::Nbb => &nbb::CONFIG,
            LeagueKind::LigaOuro => &liga_ouro::CONFIG,
            LeagueKind::Ldb => &ldb::CONFIG,
        }
    }

    pub fn key(&self) -> &'static str {
        self.config().key
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == s)
    }

    /// Production adapter over HTTP.
    pub fn adapter(&self, opts: &FetchOptions) -> Result<Adapter<HttpFetcher>> {
        Ok(Adapter::new(self.config(), HttpFetcher::new(opts)?, &opts.base_url))
    }

    pub fn adapter_with<F: Fetch>(&self, fetcher: F, base_url: &str) -> Adapter<F> {
        Adapter::new(self.config(), fetcher, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_domains_per_operation() {
        let lo = LeagueKind::LigaOuro.config();
        assert!(lo.seasons(Operation::Classification).contains(&"2025"));
        assert!(!lo.seasons(Operation::Scores).contains(&"2025"));
        assert_eq!(LeagueKind::Nbb.config().seasons(Operation::Stats).len(), 16);
    }

    #[test]
    fn venue_only_for_nbb() {
        assert_eq!(LeagueKind::Nbb.config().venue_keys(), vec!["ambos", "mandante", "visitante"]);
        assert_eq!(LeagueKind::Ldb.config().venue_keys(), vec!["ambos"]);
        assert_eq!(LeagueKind::Nbb.config().venue_code(Venue::Away), Some(("wherePlaying", "2")));
        assert_eq!(LeagueKind::Ldb.config().venue_code(Venue::Both), None);
    }

    #[test]
    fn ldb_has_no_playoffs_phase() {
        let err = LeagueKind::Ldb.config().scores_query("2023", "playoffs").unwrap_err();
        assert_eq!(err.to_string(), "playoffs is not a valid phase. Try one of: regular, total");
    }

    #[test]
    fn stats_query_reports_first_bad_field() {
        let cfg = LeagueKind::Nbb.config();
        let req = StatsRequest::new("2023-24", "regular", "cestinhas").subject("coaches");
        let err = cfg.stats_query(&req).unwrap_err();
        assert!(err.to_string().starts_with("cestinhas is not a valid category"));

        let req = StatsRequest::new("2023-24", "regular", "pontos").conceded("maybe");
        assert!(matches!(cfg.stats_query(&req), Err(Error::InvalidFlag { .. })));
    }

    #[test]
    fn ldb_live_classification_seasons() {
        let cfg = LeagueKind::Ldb.config();
        assert!(cfg.classification_is_live("2023"));
        assert!(!cfg.classification_is_live("2019"));
        assert!(LeagueKind::Nbb.config().classification_is_live("2008-09"));
    }

    #[test]
    fn league_keys_round_trip() {
        for l in LeagueKind::ALL {
            assert_eq!(LeagueKind::from_key(l.key()), Some(l));
        }
        assert_eq!(LeagueKind::from_key("nba"), None);
    }
}
