// src/scrape.rs
//! Request pipeline shared by every league:
//! validated query → URL → fetch → normalize → derive.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::options::Operation;
use crate::core::net::{fetch_table, Fetch};
use crate::data::ResultTable;
use crate::error::{Error, Result};
use crate::leagues::{FetchPolicy, LeagueConfig};
use crate::params::Query;
use crate::specs::{classification, scores, stats};
use crate::url::build_url;

/// Empty result with the operation's canonical shape.
fn empty_for(query: &Query, advisory: &str) -> ResultTable {
    match query {
        Query::Classification { season } => classification::empty(season, advisory),
        Query::Scores { season, .. } => scores::empty(season, advisory),
        // Stats never degrade; metric columns are unknown without a page.
        Query::Stats(q) => ResultTable::empty(Vec::new(), advisory).with_season(&q.season),
    }
}

fn degrades(config: &LeagueConfig, op: Operation) -> bool {
    config.fetch_policy == FetchPolicy::Degrade && op != Operation::Stats
}

pub fn run<F: Fetch + ?Sized>(
    config: &LeagueConfig,
    fetcher: &F,
    base_url: &str,
    query: &Query,
) -> Result<ResultTable> {
    let op = query.operation();
    let season = query.season();

    if op == Operation::Classification && !config.classification_is_live(season) {
        warn!(league = config.key, season, "standings page unavailable for season");
        return Ok(empty_for(query, config.classification_advisory));
    }

    let url = build_url(base_url, config, query);
    info!(league = config.key, operation = op.key(), %url, "fetching");
    let started = Instant::now();

    let raw = match fetch_table(fetcher, &url) {
        Ok(raw) => raw,
        Err(e @ Error::Fetch { .. }) if degrades(config, op) => {
            warn!(league = config.key, operation = op.key(), error = %e, "fetch failed, returning empty table");
            return Ok(empty_for(query, config.unavailable_advisory));
        }
        Err(e) => return Err(e),
    };

    let table = match query {
        Query::Classification { season } => classification::derive(raw, season)?,
        Query::Scores { season, .. } => {
            scores::derive(&raw, season, config.is_legacy_score_season(season))?
        }
        Query::Stats(q) => stats::derive(&raw, q.subject, &q.season)?,
    };

    debug!(
        league = config.key,
        operation = op.key(),
        rows = table.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "done"
    );
    Ok(table)
}
