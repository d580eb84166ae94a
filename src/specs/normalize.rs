// src/specs/normalize.rs
// Column normalizer: ordered rule sets, first match wins.

use std::collections::HashSet;

use tracing::debug;

use crate::config::options::Operation;
use crate::data::RawTable;
use crate::error::{Error, Result};

/// A source column, by header text or by position in the fetched table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    Header(&'static str),
    Position(usize),
}

impl ColumnKey {
    fn resolve(&self, raw: &RawTable) -> Option<usize> {
        match *self {
            ColumnKey::Header(h) => raw.column_index(h),
            ColumnKey::Position(p) => (p < raw.width()).then_some(p),
        }
    }
}

/// Canonical name `to`, taken from the first of `from` present in the table.
#[derive(Clone, Copy, Debug)]
pub struct Rename {
    pub to: &'static str,
    pub from: &'static [ColumnKey],
}

#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    /// All must be present for the rule set to apply.
    pub require: &'static [ColumnKey],
    /// Noise columns; absent ones are ignored.
    pub drop: &'static [&'static str],
    pub renames: &'static [Rename],
}

impl RuleSet {
    pub fn applies(&self, raw: &RawTable) -> bool {
        self.require.iter().all(|k| k.resolve(raw).is_some())
    }

    /// drop noise → rename → drop all-empty non-canonical columns.
    fn apply(&self, raw: &RawTable) -> RawTable {
        let mut names: Vec<Option<String>> = raw.headers.iter().cloned().map(Some).collect();
        for d in self.drop {
            if let Some(i) = raw.column_index(d) {
                names[i] = None;
            }
        }

        let mut canonical: HashSet<usize> = HashSet::new();
        for r in self.renames {
            let hit = r
                .from
                .iter()
                .filter_map(|k| k.resolve(raw))
                .find(|i| names[*i].is_some() && !canonical.contains(i));
            if let Some(i) = hit {
                names[i] = Some(s!(r.to));
                canonical.insert(i);
            }
        }

        let keep: Vec<usize> = (0..raw.width())
            .filter(|i| names[*i].is_some())
            .filter(|i| canonical.contains(i) || !raw.column_is_empty(*i))
            .collect();

        let headers = keep.iter().filter_map(|i| names[*i].clone()).collect();
        let rows = raw
            .rows
            .iter()
            .map(|r| keep.iter().map(|i| r.get(*i).cloned().unwrap_or_default()).collect())
            .collect();
        RawTable::new(headers, rows)
    }
}

/// Apply the first rule set whose required columns exist.
pub fn normalize(raw: &RawTable, candidates: &[&RuleSet], operation: Operation) -> Result<RawTable> {
    match candidates.iter().find(|r| r.applies(raw)) {
        Some(rule) => {
            debug!(operation = operation.key(), rule = rule.name, "layout matched");
            Ok(rule.apply(raw))
        }
        None => Err(Error::SchemaMismatch {
            operation: operation.key(),
            tried: candidates.iter().map(|r| r.name).collect(),
            headers: raw.headers.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ColumnKey::{Header, Position};

    static WITH_TEAM: RuleSet = RuleSet {
        name: "with-team",
        require: &[Header("EQUIPES")],
        drop: &["#"],
        renames: &[
            Rename { to: "team", from: &[Header("EQUIPES")] },
            Rename { to: "points", from: &[Header("PTS"), Header("PONTOS")] },
            Rename { to: "games", from: &[Header("J")] },
        ],
    };

    static BY_POSITION: RuleSet = RuleSet {
        name: "by-position",
        require: &[Position(1)],
        drop: &[],
        renames: &[Rename { to: "team", from: &[Position(1)] }],
    };

    fn raw() -> RawTable {
        RawTable::new(
            vec![s!("#"), s!("Equipes"), s!("PONTOS"), s!("Unnamed: 3"), s!("J")],
            vec![
                vec![s!("1"), s!("01 Flamengo"), s!("40"), s!(""), s!("")],
                vec![s!("2"), s!("02 Franca"), s!("38"), s!(""), s!("")],
            ],
        )
    }

    #[test]
    fn first_matching_rule_set_wins() {
        let out = normalize(&raw(), &[&WITH_TEAM, &BY_POSITION], Operation::Classification).unwrap();
        // `#` dropped, empty Unnamed dropped, empty but canonical `games` kept.
        assert_eq!(out.headers, vec!["team", "points", "games"]);
        assert_eq!(out.rows[1], vec!["02 Franca", "38", ""]);
    }

    #[test]
    fn positional_fallback() {
        let mut t = raw();
        t.headers[1] = s!("Clube");
        let out = normalize(&t, &[&WITH_TEAM, &BY_POSITION], Operation::Classification).unwrap();
        assert_eq!(out.headers[1], "team");
        assert_eq!(out.headers[0], "#");
    }

    #[test]
    fn no_rule_set_is_schema_mismatch() {
        let t = RawTable::new(vec![s!("A")], vec![vec![s!("x")]]);
        match normalize(&t, &[&WITH_TEAM, &BY_POSITION], Operation::Scores) {
            Err(Error::SchemaMismatch { operation, tried, headers }) => {
                assert_eq!(operation, "scores");
                assert_eq!(tried, vec!["with-team", "by-position"]);
                assert_eq!(headers, vec!["A"]);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }
}
