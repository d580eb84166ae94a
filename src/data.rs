// src/data.rs
//
// Table shapes flowing through the pipeline.
//
// - RawTable:    as-fetched (or as-normalized) string grid. Produced and
//                consumed within one adapter call.
// - ResultTable: canonical output. Named, typed columns; `season` always last.
//                Built once per call, read-only afterwards.

use std::fmt;

use chrono::NaiveDateTime;

use crate::config::consts::SEASON_COLUMN;
use crate::core::sanitize::fold_header;

/// Headers + rows of plain strings, rows padded to the header width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, s!());
                r
            })
            .collect();
        Self { headers, rows }
    }

    pub fn width(&self) -> usize { self.headers.len() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Header lookup, insensitive to case, accents and spacing.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let want = fold_header(name);
        self.headers.iter().position(|h| fold_header(h) == want)
    }

    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |r| r.get(idx).map(String::as_str).unwrap_or(""))
    }

    pub fn column_is_empty(&self, idx: usize) -> bool {
        self.column(idx).all(|c| c.trim().is_empty())
    }

    /// Keep rows 0, 2, 4, … (the standings page interleaves a detail row per team).
    pub fn keep_every_other_row(&mut self) {
        let rows = std::mem::take(&mut self.rows);
        self.rows = rows.into_iter().step_by(2).collect();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Decimal,
    Date,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDateTime),
}

impl Value {
    /// Empty/whitespace-only text becomes `Null`.
    pub fn text(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() { Value::Null } else { Value::Text(s!(t)) }
    }

    pub fn integer(s: &str) -> Self {
        parse_int(s).map(Value::Integer).unwrap_or(Value::Null)
    }

    pub fn decimal(s: &str) -> Self {
        parse_decimal(s).map(Value::Decimal).unwrap_or(Value::Null)
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Integer cell: optional sign, digits. Anything else → None.
pub fn parse_int(s: &str) -> Option<i64> {
    let t = s.trim();
    let t = t.strip_prefix('+').unwrap_or(t);
    if t.is_empty() { return None; }
    t.parse().ok()
}

/// Decimal cell: comma or dot separator, optional trailing `%`.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let t = s.trim().trim_end_matches('%').trim();
    if t.is_empty() { return None; }
    let t = t.strip_prefix('+').unwrap_or(t);
    t.replace(',', ".").parse().ok()
}

/// Narrowest type every non-empty cell fits: Integer ⊂ Decimal ⊂ Text.
pub fn infer_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut kind = ColumnType::Integer;
    let mut seen = false;
    for c in cells {
        if c.trim().is_empty() { continue; }
        seen = true;
        if kind == ColumnType::Integer && parse_int(c).is_none() {
            kind = ColumnType::Decimal;
        }
        if kind == ColumnType::Decimal && parse_decimal(c).is_none() {
            return ColumnType::Text;
        }
    }
    if seen { kind } else { ColumnType::Text }
}

pub fn typed_value(kind: ColumnType, cell: &str) -> Value {
    match kind {
        ColumnType::Integer => Value::integer(cell),
        ColumnType::Decimal => Value::decimal(cell),
        ColumnType::Text | ColumnType::Date => Value::text(cell),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
}

impl Column {
    pub fn new(name: &str, kind: ColumnType) -> Self {
        Self { name: s!(name), kind }
    }
}

/// Canonical result of one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
    advisory: Option<String>,
}

impl ResultTable {
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows, advisory: None }
    }

    /// Correctly-shaped table with no rows, carrying a message for the user.
    pub fn empty(columns: Vec<Column>, advisory: impl Into<String>) -> Self {
        Self { columns, rows: Vec::new(), advisory: Some(advisory.into()) }
    }

    /// Append the `season` column holding the caller's label on every row.
    pub fn with_season(mut self, season: &str) -> Self {
        self.columns.push(Column::new(SEASON_COLUMN, ColumnType::Text));
        for r in &mut self.rows {
            r.push(Value::Text(s!(season)));
        }
        self
    }

    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn rows(&self) -> &[Vec<Value>] { &self.rows }
    pub fn advisory(&self) -> Option<&str> { self.advisory.as_deref() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let ci = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(ci))
    }

    /// Owned string headers (GUI grid / export boundary).
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Owned string rows; nulls render as empty cells.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_table_pads_rows_and_finds_columns() {
        let t = RawTable::new(
            vec![s!("EQUIPES"), s!("GINÁSIO")],
            vec![vec![s!("01 Flamengo")]],
        );
        assert_eq!(t.rows[0], vec![s!("01 Flamengo"), s!("")]);
        assert_eq!(t.column_index("equipes"), Some(0));
        assert_eq!(t.column_index("GINASIO"), Some(1));
        assert!(t.column_is_empty(1));
    }

    #[test]
    fn every_other_row_keeps_even_indices() {
        let mut t = RawTable::new(
            vec![s!("A")],
            (0..5).map(|i| vec![i.to_string()]).collect(),
        );
        t.keep_every_other_row();
        let kept: Vec<&str> = t.column(0).collect();
        assert_eq!(kept, vec!["0", "2", "4"]);
    }

    #[test]
    fn numeric_cells_and_inference() {
        assert_eq!(parse_int("+12"), Some(12));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_decimal("66,7%"), Some(66.7));
        assert_eq!(infer_type(["1", "", "2"].into_iter()), ColumnType::Integer);
        assert_eq!(infer_type(["1", "2,5"].into_iter()), ColumnType::Decimal);
        assert_eq!(infer_type(["1", "abc"].into_iter()), ColumnType::Text);
        assert_eq!(infer_type(["", " "].into_iter()), ColumnType::Text);
    }

    #[test]
    fn season_is_appended_last() {
        let t = ResultTable::new(
            vec![Column::new("team", ColumnType::Text)],
            vec![vec![Value::text("Flamengo")]],
        )
        .with_season("2023");
        assert_eq!(t.column_names(), vec!["team", "season"]);
        assert_eq!(t.get(0, "season"), Some(&Value::Text(s!("2023"))));
        assert_eq!(t.string_rows(), vec![vec![s!("Flamengo"), s!("2023")]]);
    }
}
