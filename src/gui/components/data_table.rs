// src/gui/components/data_table.rs
//
// Result grid. Purely a view over `App::headers` / `App::rows`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::ROW_HEIGHT, data::ColumnType, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.headers.is_empty() {
        ui.label("No data yet. Pick parameters and press Execute.");
        return;
    }

    let cols = app.headers.len();
    let numeric: Vec<bool> = match &app.table {
        Some(t) => t
            .columns()
            .iter()
            .map(|c| matches!(c.kind, ColumnType::Integer | ColumnType::Decimal))
            .collect(),
        None => vec![false; cols],
    };

    egui::ScrollArea::horizontal()
        .id_salt("result_hscroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .columns(Column::auto().resizable(true).clip(true).at_least(30.0), cols)
                .header(24.0, |mut header| {
                    for h in &app.headers {
                        header.col(|ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, app.rows.len(), |mut row| {
                        let Some(data) = app.rows.get(row.index()) else { return };
                        for (ci, cell) in data.iter().enumerate() {
                            let is_numeric = numeric.get(ci).copied().unwrap_or(false);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if is_numeric {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell.as_str());
                                    });
                                } else {
                                    ui.label(cell.as_str());
                                }
                            });
                        }
                    });
                });
        });
}
