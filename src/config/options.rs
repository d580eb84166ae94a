// src/config/options.rs
use std::time::Duration;
use super::consts::*;

/// The three public operations every league exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Classification,
    Scores,
    Stats,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Classification, Operation::Scores, Operation::Stats];

    pub fn title(&self) -> &'static str {
        match self {
            Operation::Classification => "Classification",
            Operation::Scores => "Scores",
            Operation::Stats => "Stats",
        }
    }

    /// Lowercase key used in logs and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Operation::Classification => "classification",
            Operation::Scores => "scores",
            Operation::Stats => "stats",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Runtime knobs for the HTTP side. Defaults come from `consts`;
/// the CLI can override each one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base_url = s!(base.trim_end_matches('/'));
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}
