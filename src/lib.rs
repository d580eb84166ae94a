// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod leagues;
pub mod log;
pub mod params;
pub mod scrape;
pub mod specs;
pub mod url;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{Column, ColumnType, RawTable, ResultTable, Value};
pub use error::{Error, Result};
pub use leagues::{Adapter, League, LeagueConfig, LeagueKind};
pub use params::StatsRequest;
