// src/core/html.rs
//! First-`<table>` extraction.
//!
//! Header resolution, in order:
//! 1. last `<tr>` inside `<thead>`
//! 2. first row, when every cell in it is a `<th>`
//! 3. positional names `"0"`, `"1"`, …
//!
//! Empty header text becomes `Unnamed: {index}`, repeated names get `.1`, `.2`
//! suffixes, and `colspan` repeats a cell across the positions it spans. The
//! score pages depend on these names (`Unnamed: 3` is the home team).

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::data::RawTable;

struct Cell {
    text: String,
    header: bool,
}

fn is_named(e: &ElementRef, name: &str) -> bool {
    e.value().name().eq_ignore_ascii_case(name)
}

/// Rows of nested tables are skipped.
fn belongs_to(tr: ElementRef, table: ElementRef) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| is_named(e, "table"))
        .is_some_and(|t| t.id() == table.id())
}

fn in_thead(tr: ElementRef) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .take_while(|e| !is_named(e, "table"))
        .any(|e| is_named(&e, "thead"))
}

fn row_cells(tr: ElementRef) -> Vec<Cell> {
    let mut out = Vec::new();
    for el in tr.children().filter_map(ElementRef::wrap) {
        let header = is_named(&el, "th");
        if !header && !is_named(&el, "td") { continue; }
        let text = normalize_ws(&el.text().collect::<Vec<_>>().join(""));
        let span = el
            .value()
            .attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        for _ in 1..span {
            out.push(Cell { text: text.clone(), header });
        }
        out.push(Cell { text, header });
    }
    out
}

fn header_names(cells: Option<Vec<Cell>>, width: usize) -> Vec<String> {
    let Some(cells) = cells else {
        return (0..width).map(|i| i.to_string()).collect();
    };

    let mut seen: HashMap<String, usize> = HashMap::new();
    (0..width)
        .map(|i| {
            let raw = cells.get(i).map(|c| c.text.as_str()).unwrap_or("");
            let base = if raw.is_empty() { format!("Unnamed: {i}") } else { s!(raw) };
            let n = seen.entry(base.clone()).or_insert(0);
            let name = if *n == 0 { base } else { format!("{base}.{n}") };
            *n += 1;
            name
        })
        .collect()
}

/// Parse the first `<table>` of a page. `None` when the page has none.
pub fn first_table(html: &str) -> Option<RawTable> {
    let doc = Html::parse_document(html);
    let table_sel = Selector::parse("table").ok()?;
    let tr_sel = Selector::parse("tr").ok()?;
    let table = doc.select(&table_sel).next()?;

    let mut head_rows = Vec::new();
    let mut body_rows = Vec::new();
    for tr in table.select(&tr_sel) {
        if !belongs_to(tr, table) { continue; }
        let cells = row_cells(tr);
        if cells.is_empty() { continue; }
        if in_thead(tr) { head_rows.push(cells) } else { body_rows.push(cells) }
    }

    let header = match head_rows.pop() {
        Some(h) => Some(h),
        None if body_rows.first().is_some_and(|r| r.iter().all(|c| c.header)) => {
            Some(body_rows.remove(0))
        }
        None => None,
    };

    let width = body_rows
        .iter()
        .map(Vec::len)
        .chain(header.as_ref().map(Vec::len))
        .max()
        .unwrap_or(0);

    let headers = header_names(header, width);
    let rows = body_rows
        .into_iter()
        .map(|r| r.into_iter().map(|c| c.text).collect())
        .collect();
    Some(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thead_last_row_names_columns() {
        let html = r#"
            <html><body><p>intro</p>
            <table>
              <thead>
                <tr><th colspan="3">Group</th></tr>
                <tr><th>#</th><th></th><th>EQUIPES</th></tr>
              </thead>
              <tbody>
                <tr><td>1</td><td> x </td><td>01 Flamengo
                    </td></tr>
                <tr></tr>
                <tr><td>2</td><td></td></tr>
              </tbody>
            </table>
            <table><tr><td>second</td></tr></table>
            </body></html>"#;
        let t = first_table(html).unwrap();
        assert_eq!(t.headers, vec!["#", "Unnamed: 1", "EQUIPES"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0], vec!["1", "x", "01 Flamengo"]);
        assert_eq!(t.rows[1], vec!["2", "", ""]);
    }

    #[test]
    fn duplicate_and_spanned_headers() {
        let html = r#"<table>
            <tr><th>DATA</th><th colspan="2">EQUIPE</th><th>PTS</th><th>PTS</th></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td></tr>
        </table>"#;
        let t = first_table(html).unwrap();
        assert_eq!(t.headers, vec!["DATA", "EQUIPE", "EQUIPE.1", "PTS", "PTS.1"]);
        assert_eq!(t.rows.len(), 1);
    }

    #[test]
    fn positional_headers_without_th() {
        let html = "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>";
        let t = first_table(html).unwrap();
        assert_eq!(t.headers, vec!["0", "1"]);
        assert_eq!(t.rows, vec![vec!["a", "b"], vec!["c", ""]]);
    }

    #[test]
    fn no_table_is_none() {
        assert!(first_table("<html><body><p>Nada</p></body></html>").is_none());
    }
}
