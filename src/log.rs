// src/log.rs
// tracing subscriber setup for the two binaries.

use std::fs::{self, OpenOptions};
use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE, STORE_DIR};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// CLI: human-readable events on stderr, stdout stays clean for table output.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// GUI: append to `.store/debug.log` (no console on Windows).
pub fn init_file() -> io::Result<()> {
    fs::create_dir_all(STORE_DIR)?;
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
