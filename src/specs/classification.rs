// src/specs/classification.rs
//! Standings page (`/nbb/{season}`, `/liga-ouro/liga-ouro-{season}`, `/ldb/temporada-{season}`).
//!
//! The site renders a collapsible detail row under every team, so only rows
//! 0, 2, 4, … are standings. The team cell carries a fixed-width ordinal
//! prefix (`"01 Flamengo"`); the first three characters are cut, and the
//! first two, when numeric, are the position.
//!
//! Columns: position, team, points, games, wins, losses, win_pct, points_for,
//! points_against, point_diff, season.

use super::normalize::{normalize, ColumnKey::Header, Rename, RuleSet};
use crate::config::options::Operation;
use crate::data::{parse_int, typed_value, Column, ColumnType, RawTable, ResultTable, Value};
use crate::error::Result;

const COLUMNS: [(&str, ColumnType); 10] = [
    ("position", ColumnType::Integer),
    ("team", ColumnType::Text),
    ("points", ColumnType::Integer),
    ("games", ColumnType::Integer),
    ("wins", ColumnType::Integer),
    ("losses", ColumnType::Integer),
    ("win_pct", ColumnType::Decimal),
    ("points_for", ColumnType::Integer),
    ("points_against", ColumnType::Integer),
    ("point_diff", ColumnType::Integer),
];

const RENAMES: &[Rename] = &[
    Rename { to: "team", from: &[Header("EQUIPES"), Header("EQUIPE")] },
    Rename { to: "points", from: &[Header("PTS"), Header("PONTOS")] },
    Rename { to: "games", from: &[Header("J"), Header("JOGOS")] },
    Rename { to: "wins", from: &[Header("V"), Header("VITORIAS")] },
    Rename { to: "losses", from: &[Header("D"), Header("DERROTAS")] },
    Rename { to: "win_pct", from: &[Header("%"), Header("APROV"), Header("APROV.")] },
    Rename { to: "points_for", from: &[Header("PRO"), Header("PP")] },
    Rename { to: "points_against", from: &[Header("CON"), Header("PC")] },
    Rename { to: "point_diff", from: &[Header("SAL"), Header("SALDO"), Header("SP")] },
];

pub static EQUIPES: RuleSet = RuleSet {
    name: "standings/EQUIPES",
    require: &[Header("EQUIPES")],
    drop: &[],
    renames: RENAMES,
};

pub static EQUIPE: RuleSet = RuleSet {
    name: "standings/EQUIPE",
    require: &[Header("EQUIPE")],
    drop: &[],
    renames: RENAMES,
};

pub fn rule_sets() -> [&'static RuleSet; 2] {
    [&EQUIPES, &EQUIPE]
}

pub fn columns() -> Vec<Column> {
    COLUMNS.iter().map(|(n, k)| Column::new(n, *k)).collect()
}

/// Empty standings with the canonical shape.
pub fn empty(season: &str, advisory: &str) -> ResultTable {
    ResultTable::empty(columns(), advisory).with_season(season)
}

/// `"01 Flamengo"` → `(Some(1), "Flamengo")`. Exactly three characters are cut.
pub fn split_ordinal(cell: &str) -> (Option<i64>, String) {
    let position = parse_int(&cell.chars().take(2).collect::<String>());
    let team: String = cell.chars().skip(3).collect();
    (position, team)
}

pub fn derive(mut raw: RawTable, season: &str) -> Result<ResultTable> {
    raw.keep_every_other_row();
    let table = normalize(&raw, &rule_sets(), Operation::Classification)?;

    let idx: Vec<Option<usize>> = COLUMNS.iter().map(|(n, _)| table.column_index(n)).collect();
    let rows = table
        .rows
        .iter()
        .map(|r| {
            let team_cell = idx[1].map(|i| r[i].as_str()).unwrap_or("");
            let (position, team) = split_ordinal(team_cell);
            COLUMNS
                .iter()
                .zip(&idx)
                .map(|((name, kind), i)| match *name {
                    "position" => position.map(Value::Integer).unwrap_or(Value::Null),
                    "team" => Value::text(&team),
                    _ => i.map(|i| typed_value(*kind, &r[i])).unwrap_or(Value::Null),
                })
                .collect()
        })
        .collect();

    Ok(ResultTable::new(columns(), rows).with_season(season))
}
