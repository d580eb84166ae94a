// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use nbb_scrape::config::consts::{WINDOW_H, WINDOW_W};
use nbb_scrape::{gui, log};

fn main() {
    if let Err(e) = log::init_file() {
        eprintln!("Log file unavailable: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("NBB Scraper")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
