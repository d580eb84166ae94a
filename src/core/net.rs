// src/core/net.rs

// One blocking GET per request, no retry.

use std::time::Instant;

use reqwest::blocking::Client;
use tracing::debug;

use super::html::first_table;
use crate::config::options::FetchOptions;
use crate::data::RawTable;
use crate::error::{Error, Result};

/// Page source. `HttpFetcher` in production; tests serve static HTML.
pub trait Fetch {
    fn get_html(&self, url: &str) -> Result<String>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get_html(&self, url: &str) -> Result<String> {
        (**self).get_html(url)
    }
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|e| Error::fetch(&opts.base_url, e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get_html(&self, url: &str) -> Result<String> {
        let started = Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::fetch(url, e))?;
        let body = resp.text().map_err(|e| Error::fetch(url, e))?;
        debug!(url, bytes = body.len(), elapsed_ms = started.elapsed().as_millis() as u64, "fetched");
        Ok(body)
    }
}

/// GET `url` and parse its first `<table>`.
pub fn fetch_table<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<RawTable> {
    let html = fetcher.get_html(url)?;
    let table = first_table(&html).ok_or_else(|| Error::fetch(url, "no table in response"))?;
    debug!(url, columns = table.width(), rows = table.len(), "parsed table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static(&'static str);

    impl Fetch for Static {
        fn get_html(&self, _url: &str) -> Result<String> {
            Ok(s!(self.0))
        }
    }

    #[test]
    fn page_without_table_is_a_fetch_error() {
        let err = fetch_table(&Static("<p>manutenção</p>"), "https://x/y").unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
        assert_eq!(err.to_string(), "could not fetch https://x/y: no table in response");
    }

    #[test]
    fn parses_first_table() {
        let t = fetch_table(&Static("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>"), "u").unwrap();
        assert_eq!(t.headers, vec!["A"]);
        assert_eq!(t.len(), 1);
    }
}
