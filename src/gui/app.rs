// src/gui/app.rs
use std::error::Error;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;
use tracing::{error, info};

use crate::config::state::AppState;
use crate::data::ResultTable;
use crate::error::Result as ScrapeResult;

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NBB Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful result and its display copy
    pub table: Option<ResultTable>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    pub status: String,
    /// Pending worker result; `Some` while a request is in flight.
    pub pending: Option<Receiver<ScrapeResult<ResultTable>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        info!(league = state.form.league.key(), "gui started");
        Self {
            state,
            table: None,
            headers: Vec::new(),
            rows: Vec::new(),
            status: s!("Idle"),
            pending: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool { self.pending.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) { self.status = msg.into(); }

    /// Install a finished result as the current table.
    pub fn show_table(&mut self, table: ResultTable) {
        self.headers = table.headers();
        self.rows = table.string_rows();
        let msg = match table.advisory() {
            Some(a) => s!(a),
            None => format!("{} row(s)", table.len()),
        };
        self.status(msg);
        self.table = Some(table);
    }

    /// Drain the worker channel, if any.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(table)) => {
                self.pending = None;
                self.show_table(table);
            }
            Ok(Err(e)) => {
                self.pending = None;
                error!(error = %e, recoverable = e.is_recoverable(), "request failed");
                // Previous table stays on screen.
                self.status(e.to_string());
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.status("Request aborted");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("form").show(ctx, |ui| {
            crate::gui::components::form::draw(ui, self);
            ui.separator();
            crate::gui::components::action_buttons::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
