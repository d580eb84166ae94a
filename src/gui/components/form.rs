// src/gui/components/form.rs
//
// League/operation pickers and the per-operation parameter widgets.
// Every combo is filled from the selected league's domains.

use eframe::egui;

use crate::{
    config::options::Operation,
    gui::app::App,
    leagues::LeagueKind,
    params::{Aggregation, Subject},
};

fn combo(ui: &mut egui::Ui, id: &str, label: &str, value: &mut String, choices: &[&str]) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for c in choices {
                ui.selectable_value(value, s!(*c), *c);
            }
        });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let form = &mut app.state.form;

    ui.horizontal(|ui| {
        let mut league = form.league;
        ui.label("League:");
        egui::ComboBox::from_id_salt("league")
            .selected_text(league.name())
            .show_ui(ui, |ui| {
                for l in LeagueKind::ALL {
                    ui.selectable_value(&mut league, l, l.name());
                }
            });
        form.set_league(league);

        let mut op = form.operation;
        ui.label("Operation:");
        egui::ComboBox::from_id_salt("operation")
            .selected_text(op.title())
            .show_ui(ui, |ui| {
                for o in Operation::ALL {
                    ui.selectable_value(&mut op, o, o.title());
                }
            });
        if op != form.operation {
            form.set_operation(op);
        }
    });

    let cfg = form.league.config();
    ui.horizontal(|ui| {
        let seasons = form.seasons();
        combo(ui, "season", "Season:", &mut form.season, &seasons);

        if form.operation != Operation::Classification {
            combo(ui, "phase", "Phase:", &mut form.phase, &cfg.phase_keys());
        }

        if form.operation == Operation::Stats {
            combo(ui, "category", "Category:", &mut form.category, cfg.categories());
            combo(ui, "aggregation", "Aggregation:", &mut form.aggregation, &Aggregation::KEYS);
            combo(ui, "subject", "Subject:", &mut form.subject, &Subject::KEYS);
            if cfg.supports_venue() {
                combo(ui, "venue", "Venue:", &mut form.venue, &cfg.venue_keys());
            }
            ui.checkbox(&mut form.conceded, "Conceded");
        }
    });
}
