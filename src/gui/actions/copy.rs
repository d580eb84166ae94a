// src/gui/actions/copy.rs
use eframe::egui;
use tracing::debug;

use crate::{config::options::ExportFormat, csv, gui::app::App};

/// Current table as TSV on the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.table.as_ref() else {
        app.status("Nothing to copy");
        return;
    };

    let txt = csv::table_to_string(table, ExportFormat::Tsv, app.state.gui.copy_headers);
    let rows = table.len();
    debug!(rows, bytes = txt.len(), "copy");
    ui_ctx.copy_text(txt);
    app.status(format!("Copied {rows} row(s)"));
}
