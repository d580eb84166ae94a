// src/specs/scores.rs
//! Games page (`/{league}/tabela-de-jogos/`).
//!
//! The header labels on this page sit one column to the right of the data:
//! the column titled `TRANSMISSÃO` holds the arena, `FASE` the round,
//! `CAMPEONATO` the stage. Teams and the packed score live under unnamed
//! headers (`Unnamed: 3` home, `Unnamed: 5` score, `Unnamed: 7` away).
//! Older seasons have one trailing unnamed column fewer.
//!
//! Columns: date, home_team, home_score, away_score, away_team, winner,
//! round, stage, venue, season.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::normalize::{
    normalize,
    ColumnKey::{Header, Position},
    Rename, RuleSet,
};
use crate::config::consts::{DATE_FORMAT, REPORT_LINK_SUFFIX};
use crate::config::options::Operation;
use crate::core::sanitize::normalize_ws;
use crate::data::{Column, ColumnType, RawTable, ResultTable, Value};
use crate::error::Result;

const COLUMNS: [(&str, ColumnType); 9] = [
    ("date", ColumnType::Date),
    ("home_team", ColumnType::Text),
    ("home_score", ColumnType::Integer),
    ("away_score", ColumnType::Integer),
    ("away_team", ColumnType::Text),
    ("winner", ColumnType::Text),
    ("round", ColumnType::Text),
    ("stage", ColumnType::Text),
    ("venue", ColumnType::Text),
];

const SHIFTED_LABELS: [Rename; 3] = [
    Rename { to: "round", from: &[Header("FASE")] },
    Rename { to: "stage", from: &[Header("CAMPEONATO")] },
    Rename { to: "venue", from: &[Header("TRANSMISSÃO")] },
];

const NAMED_RENAMES: &[Rename] = &[
    Rename { to: "date", from: &[Header("DATA")] },
    Rename { to: "home_team", from: &[Header("Unnamed: 3")] },
    Rename { to: "score", from: &[Header("Unnamed: 5")] },
    Rename { to: "away_team", from: &[Header("Unnamed: 7")] },
    SHIFTED_LABELS[0],
    SHIFTED_LABELS[1],
    SHIFTED_LABELS[2],
];

pub static CURRENT: RuleSet = RuleSet {
    name: "games/current",
    require: &[
        Header("DATA"),
        Header("Unnamed: 3"),
        Header("Unnamed: 5"),
        Header("Unnamed: 7"),
        Header("Unnamed: 15"),
    ],
    drop: &["#", "CASA", "Unnamed: 15", "GINÁSIO", "RODADA"],
    renames: NAMED_RENAMES,
};

pub static LEGACY: RuleSet = RuleSet {
    name: "games/legacy",
    require: &[
        Header("DATA"),
        Header("Unnamed: 3"),
        Header("Unnamed: 5"),
        Header("Unnamed: 7"),
        Header("Unnamed: 14"),
    ],
    drop: &["#", "CASA", "Unnamed: 14", "GINÁSIO", "RODADA"],
    renames: NAMED_RENAMES,
};

pub static POSITIONAL: RuleSet = RuleSet {
    name: "games/positional",
    require: &[Position(1), Position(3), Position(5), Position(7)],
    drop: &[],
    renames: &[
        Rename { to: "date", from: &[Position(1)] },
        Rename { to: "home_team", from: &[Position(3)] },
        Rename { to: "score", from: &[Position(5)] },
        Rename { to: "away_team", from: &[Position(7)] },
        SHIFTED_LABELS[0],
        SHIFTED_LABELS[1],
        SHIFTED_LABELS[2],
    ],
};

/// Candidate order for a season.
pub fn rule_sets(legacy_first: bool) -> [&'static RuleSet; 3] {
    if legacy_first {
        [&LEGACY, &CURRENT, &POSITIONAL]
    } else {
        [&CURRENT, &LEGACY, &POSITIONAL]
    }
}

pub fn columns() -> Vec<Column> {
    COLUMNS.iter().map(|(n, k)| Column::new(n, *k)).collect()
}

pub fn empty(season: &str, advisory: &str) -> ResultTable {
    ResultTable::empty(columns(), advisory).with_season(season)
}

static SCORE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*[Xx]\s*(\d+)").ok());

/// `"75 X 70  VER RELATÓRIO"` → `Some((75, 70))`. Unplayed games (`" X "`) → `None`.
pub fn parse_score(cell: &str) -> Option<(i64, i64)> {
    let cell = cell.trim();
    let cell = cell.strip_suffix(REPORT_LINK_SUFFIX).unwrap_or(cell);
    let caps = SCORE.as_ref()?.captures(cell)?;
    let home = caps.get(1)?.as_str().parse().ok()?;
    let away = caps.get(2)?.as_str().parse().ok()?;
    Some((home, away))
}

/// Strictly greater score wins; ties have no winner.
pub fn winner<'a>(home: &'a str, away: &'a str, score: Option<(i64, i64)>) -> Option<&'a str> {
    match score? {
        (h, a) if h > a => Some(home),
        (h, a) if a > h => Some(away),
        _ => None,
    }
}

/// `dd/mm/yyyy hh:mm`, any whitespace between date and time. Date-only cells get midnight.
pub fn parse_date(cell: &str) -> Option<NaiveDateTime> {
    let cell = normalize_ws(cell);
    NaiveDateTime::parse_from_str(&cell, DATE_FORMAT)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&cell, "%d/%m/%Y").ok()?.and_hms_opt(0, 0, 0))
}

pub fn derive(raw: &RawTable, season: &str, legacy_first: bool) -> Result<ResultTable> {
    let table = normalize(raw, &rule_sets(legacy_first), Operation::Scores)?;

    let col = |name: &str| table.column_index(name);
    let (date, home, score, away) = (col("date"), col("home_team"), col("score"), col("away_team"));
    let (round, stage, venue) = (col("round"), col("stage"), col("venue"));

    let rows = table
        .rows
        .iter()
        .map(|r| {
            let cell = |i: Option<usize>| i.map(|i| r[i].as_str()).unwrap_or("");
            let parsed = parse_score(cell(score));
            let (home_team, away_team) = (cell(home), cell(away));
            vec![
                parse_date(cell(date)).map(Value::Date).unwrap_or(Value::Null),
                Value::text(home_team),
                parsed.map(|(h, _)| Value::Integer(h)).unwrap_or(Value::Null),
                parsed.map(|(_, a)| Value::Integer(a)).unwrap_or(Value::Null),
                Value::text(away_team),
                winner(home_team, away_team, parsed).map(Value::text).unwrap_or(Value::Null),
                Value::text(cell(round)),
                Value::text(cell(stage)),
                Value::text(cell(venue)),
            ]
        })
        .collect();

    Ok(ResultTable::new(columns(), rows).with_season(season))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games_page(trailing: usize) -> RawTable {
        let mut headers: Vec<String> = vec![
            "#", "DATA", "CASA", "Unnamed: 3", "Unnamed: 4", "Unnamed: 5", "Unnamed: 6",
            "Unnamed: 7", "FASE", "CAMPEONATO", "RODADA", "TRANSMISSÃO", "GINÁSIO",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        for i in 0..trailing {
            headers.push(format!("Unnamed: {}", 13 + i));
        }
        let mut row: Vec<String> = vec![
            "1", "12/10/2023  19:00", "", "Flamengo", "", "75 X 70  VER RELATÓRIO", "",
            "Franca", "1ª Rodada", "Temporada Regular", "", "Maracanãzinho", "",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        row.resize(headers.len(), s!());
        RawTable::new(headers, vec![row])
    }

    #[test]
    fn current_layout() {
        let t = derive(&games_page(3), "2023-24", false).unwrap();
        assert_eq!(t.get(0, "home_team"), Some(&Value::text("Flamengo")));
        assert_eq!(t.get(0, "home_score"), Some(&Value::Integer(75)));
        assert_eq!(t.get(0, "away_score"), Some(&Value::Integer(70)));
        assert_eq!(t.get(0, "winner"), Some(&Value::text("Flamengo")));
        assert_eq!(t.get(0, "round"), Some(&Value::text("1ª Rodada")));
        assert_eq!(t.get(0, "stage"), Some(&Value::text("Temporada Regular")));
        assert_eq!(t.get(0, "venue"), Some(&Value::text("Maracanãzinho")));
        let expected = NaiveDate::from_ymd_opt(2023, 10, 12).unwrap().and_hms_opt(19, 0, 0).unwrap();
        assert_eq!(t.get(0, "date"), Some(&Value::Date(expected)));
    }

    #[test]
    fn legacy_layout_has_one_column_fewer() {
        // Up to `Unnamed: 14` only: current rule set cannot apply.
        let t = derive(&games_page(2), "2008-09", false).unwrap();
        assert_eq!(t.get(0, "away_team"), Some(&Value::text("Franca")));
        assert_eq!(t.columns().len(), 10);
    }

    #[test]
    fn scores_and_winner() {
        assert_eq!(parse_score("75 X 70 VER RELATÓRIO"), Some((75, 70)));
        assert_eq!(parse_score("101 x 99"), Some((101, 99)));
        assert_eq!(parse_score(" X "), None);
        assert_eq!(parse_score("80 X "), None);
        assert_eq!(winner("A", "B", Some((70, 75))), Some("B"));
        assert_eq!(winner("A", "B", Some((70, 70))), None);
        assert_eq!(winner("A", "B", None), None);
    }

    #[test]
    fn unplayed_game_has_nulls() {
        let mut raw = games_page(3);
        raw.rows[0][5] = s!(" X ");
        let t = derive(&raw, "2023-24", false).unwrap();
        assert!(t.get(0, "home_score").unwrap().is_null());
        assert!(t.get(0, "winner").unwrap().is_null());
    }

    #[test]
    fn bad_date_is_null() {
        assert_eq!(parse_date("adiado"), None);
        assert!(parse_date("01/02/2020 20:30").is_some());
        assert!(parse_date("01/02/2020").is_some());
    }
}
