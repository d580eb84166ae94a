// src/gui/actions/execute.rs
use std::{sync::mpsc, thread};

use eframe::egui;
use tracing::info;

use crate::{
    config::options::{FetchOptions, Operation},
    gui::app::App,
    leagues::League,
};

/// Run the form's request on a worker thread. One request at a time.
pub fn execute(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }

    let form = app.state.form.clone();
    info!(
        league = form.league.key(),
        operation = form.operation.key(),
        season = %form.season,
        "execute"
    );

    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let result = form.league.adapter(&FetchOptions::default()).and_then(|a| match form.operation {
            Operation::Classification => a.classification(&form.season),
            Operation::Scores => a.scores(&form.season, &form.phase),
            Operation::Stats => a.stats(&form.stats_request()),
        });
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    app.pending = Some(rx);
    app.status("Running…");
}
