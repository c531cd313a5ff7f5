//! Catalog client for the Maven Central search API.
//!
//! Issues one bounded search request against the Solr endpoint, parses the
//! JSON document list, and derives direct JAR URLs for the most-downloaded
//! artifacts.

mod parse;
mod query;
mod select;

pub use parse::{SearchDoc, SearchResponse, SearchResult};

use anyhow::{Context, Result};
use std::time::Duration;

/// Public search endpoint queried for artifact metadata.
pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";
/// Repository root that direct JAR URLs are built under.
pub const DEFAULT_REPO_BASE: &str = "https://repo1.maven.org/maven2";
/// Default number of URLs to collect.
pub const DEFAULT_LIMIT: usize = 100;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(60);

/// Catalog endpoints. `Default` points at Maven Central; tests point both
/// URLs at a local server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// Search endpoint (Solr select handler).
    pub search_url: String,
    /// Repository root for constructed download URLs.
    pub repo_base: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            repo_base: DEFAULT_REPO_BASE.to_string(),
        }
    }
}

impl CatalogClient {
    /// Fetches the most-downloaded artifacts and returns their JAR URLs.
    ///
    /// Never fails: any network, HTTP-status, or JSON-decoding error is
    /// logged and degraded to an empty list. Use [`try_fetch_top_jars`]
    /// when the caller wants the error.
    ///
    /// [`try_fetch_top_jars`]: CatalogClient::try_fetch_top_jars
    pub fn fetch_top_jars(&self, limit: usize) -> Vec<String> {
        match self.try_fetch_top_jars(limit) {
            Ok(urls) => urls,
            Err(e) => {
                tracing::error!("catalog fetch failed: {e:#}");
                Vec::new()
            }
        }
    }

    /// Like [`fetch_top_jars`], but propagates the failure.
    ///
    /// Requests `2 * limit` rows sorted by descending download count, then
    /// filters and accumulates URLs; the result can hold up to `limit + 1`
    /// entries (the selection stops one past the cap).
    ///
    /// [`fetch_top_jars`]: CatalogClient::fetch_top_jars
    pub fn try_fetch_top_jars(&self, limit: usize) -> Result<Vec<String>> {
        let request_url = format!("{}?{}", self.search_url, query::search_query(limit));
        tracing::debug!(url = %request_url, "querying catalog");

        let body = http_get(&request_url)?;
        let parsed: SearchResponse =
            serde_json::from_slice(&body).context("parse search response JSON")?;
        tracing::debug!(docs = parsed.response.docs.len(), "catalog returned documents");

        Ok(select::select_jar_urls(&parsed.response.docs, limit, &self.repo_base))
    }
}

/// Performs a GET and returns the response body. Fails on non-2xx status.
fn http_get(url: &str) -> Result<Vec<u8>> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TRANSFER_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("search request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(body)
}
