// src/specs/stats.rs
//! Stats page (`/{league}/estatisticas/{category}/`).
//!
//! Athlete rows name the player as `"Name #Number"`; the number becomes
//! `jersey_number`. The rank column `Pos.` is dropped. Every remaining
//! column is a metric whose set depends on the category, so metric columns
//! pass through under snake_case keys with an inferred type.
//!
//! Columns: subject_name, [jersey_number, team] (athletes only), metrics…, season.

use std::collections::HashSet;

use super::normalize::{normalize, ColumnKey::Header, Rename, RuleSet};
use crate::config::options::Operation;
use crate::core::sanitize::snake_key;
use crate::data::{infer_type, typed_value, Column, ColumnType, RawTable, ResultTable, Value};
use crate::error::Result;
use crate::params::Subject;

const ATHLETE_RENAMES: &[Rename] = &[
    Rename { to: "subject_name", from: &[Header("JOGADOR"), Header("ATLETA")] },
    Rename { to: "team", from: &[Header("EQUIPE"), Header("TIME")] },
];

const TEAM_RENAMES: &[Rename] = &[Rename {
    to: "subject_name",
    from: &[Header("EQUIPE"), Header("EQUIPES"), Header("TIME")],
}];

const NOISE: &[&str] = &["Pos."];

pub static JOGADOR: RuleSet = RuleSet {
    name: "athletes/JOGADOR",
    require: &[Header("JOGADOR")],
    drop: NOISE,
    renames: ATHLETE_RENAMES,
};

pub static ATLETA: RuleSet = RuleSet {
    name: "athletes/ATLETA",
    require: &[Header("ATLETA")],
    drop: NOISE,
    renames: ATHLETE_RENAMES,
};

pub static EQUIPE: RuleSet = RuleSet {
    name: "teams/EQUIPE",
    require: &[Header("EQUIPE")],
    drop: NOISE,
    renames: TEAM_RENAMES,
};

pub static EQUIPES: RuleSet = RuleSet {
    name: "teams/EQUIPES",
    require: &[Header("EQUIPES")],
    drop: NOISE,
    renames: TEAM_RENAMES,
};

pub static TIME: RuleSet = RuleSet {
    name: "teams/TIME",
    require: &[Header("TIME")],
    drop: NOISE,
    renames: TEAM_RENAMES,
};

pub fn rule_sets(subject: Subject) -> Vec<&'static RuleSet> {
    match subject {
        Subject::Athletes => vec![&JOGADOR, &ATLETA],
        Subject::Teams => vec![&EQUIPE, &EQUIPES, &TIME],
    }
}

/// `"Yago Santos #7"` → `("Yago Santos", Some("7"))`. Splits on the last `#`.
///
/// The number stays text: `#0` and `#00` are different jerseys.
pub fn split_name_number(cell: &str) -> (String, Option<String>) {
    match cell.rfind('#') {
        Some(i) => {
            let digits: String = cell[i + 1..].trim_start().chars().take_while(char::is_ascii_digit).collect();
            (s!(cell[..i].trim()), Some(digits).filter(|d| !d.is_empty()))
        }
        None => (s!(cell), None),
    }
}

/// Identity columns for a subject, before metrics.
fn identity_columns(subject: Subject) -> Vec<Column> {
    let mut cols = vec![Column::new("subject_name", ColumnType::Text)];
    if subject == Subject::Athletes {
        cols.push(Column::new("jersey_number", ColumnType::Text));
        cols.push(Column::new("team", ColumnType::Text));
    }
    cols
}

pub fn derive(raw: &RawTable, subject: Subject, season: &str) -> Result<ResultTable> {
    let table = normalize(raw, &rule_sets(subject), Operation::Stats)?;
    let name_idx = table.column_index("subject_name");
    let team_idx = table.column_index("team").filter(|_| subject == Subject::Athletes);

    let mut columns = identity_columns(subject);
    let mut used: HashSet<String> = columns.iter().map(|c| c.name.clone()).collect();
    used.insert(s!(crate::config::consts::SEASON_COLUMN));

    let mut metrics: Vec<(usize, ColumnType)> = Vec::new();
    for (i, header) in table.headers.iter().enumerate() {
        if Some(i) == name_idx || Some(i) == team_idx { continue; }
        let base = snake_key(header);
        let mut key = base.clone();
        let mut n = 2;
        while used.contains(&key) {
            key = format!("{base}_{n}");
            n += 1;
        }
        used.insert(key.clone());
        let kind = infer_type(table.column(i));
        columns.push(Column { name: key, kind });
        metrics.push((i, kind));
    }

    let rows = table
        .rows
        .iter()
        .map(|r| {
            let name_cell = name_idx.map(|i| r[i].as_str()).unwrap_or("");
            let mut out = Vec::with_capacity(columns.len());
            match subject {
                Subject::Athletes => {
                    let (name, jersey) = split_name_number(name_cell);
                    out.push(Value::text(&name));
                    out.push(jersey.map(Value::Text).unwrap_or(Value::Null));
                    out.push(team_idx.map(|i| Value::text(&r[i])).unwrap_or(Value::Null));
                }
                Subject::Teams => out.push(Value::text(name_cell)),
            }
            out.extend(metrics.iter().map(|(i, kind)| typed_value(*kind, &r[*i])));
            out
        })
        .collect();

    Ok(ResultTable::new(columns, rows).with_season(season))
}
