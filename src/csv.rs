// src/csv.rs
// CSV/TSV writer shared by CLI output and GUI copy.

use std::io::{self, Write};

use crate::config::options::ExportFormat;
use crate::data::ResultTable;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a result table; nulls are empty cells.
pub fn write_table<W: Write>(
    mut w: W,
    table: &ResultTable,
    format: ExportFormat,
    include_headers: bool,
) -> io::Result<()> {
    let sep = format.delim();
    if include_headers {
        write_row(&mut w, &table.headers(), sep)?;
    }
    for r in table.string_rows() {
        write_row(&mut w, &r, sep)?;
    }
    w.flush()
}

/// Whole table as one string (clipboard).
pub fn table_to_string(table: &ResultTable, format: ExportFormat, include_headers: bool) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, format, include_headers);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
