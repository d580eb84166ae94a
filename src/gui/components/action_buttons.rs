// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        let running = app.running();
        if ui.add_enabled(!running, egui::Button::new("Execute")).clicked() {
            actions::execute::execute(app, &ctx);
        }
        if ui.add_enabled(!running && app.table.is_some(), egui::Button::new("Copy")).clicked() {
            actions::copy::copy(app, &ctx);
        }
        ui.checkbox(&mut app.state.gui.copy_headers, "Copy headers");

        ui.separator();
        if app.running() {
            ui.add(Spinner::new());
        }
        ui.label(app.status.as_str());
    });
}
