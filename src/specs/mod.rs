// src/specs/mod.rs
//! # Page "specs"
//!
//! One module per page family. Each spec knows **what the site's table looks
//! like** for that page and how to turn it into the canonical result.
//!
//! ## What lives here
//! - **Rule sets** (`normalize::RuleSet`): which source columns identify a
//!   layout, which are noise, and what each useful column is called canonically.
//!   A page family can have several layouts across seasons; they are tried in
//!   order and the first whose required columns exist wins.
//! - **Field derivation**: ordinal-prefix strip on standings, jersey split on
//!   athlete names, packed-score parse and winner on games, date parsing,
//!   numeric typing.
//! - **Canonical column lists** per operation, so every league and season
//!   produces the same shape.
//!
//! ## What does **not** live here
//! - Fetching and HTML parsing (`core::net`, `core::html`).
//! - Parameter validation and URL building (`params`, `leagues`, `url`).
//! - Error policy per league (`scrape`).
//!
//! ## Call chain
//! ```text
//! League::<op>() → scrape::run → core::net::fetch_table → RawTable
//!                              → specs::<page>::derive   → ResultTable
//! ```
//!
//! ## Conventions
//! - Header matching is accent/case/space-insensitive (`sanitize::fold_header`).
//! - Absent optional columns become nulls, never errors.
//! - No layout matched → `Error::SchemaMismatch`, never a guessed table.
//! - Specs are pure; test them offline with inline HTML or `RawTable`s.

pub mod classification;
pub mod normalize;
pub mod scores;
pub mod stats;
