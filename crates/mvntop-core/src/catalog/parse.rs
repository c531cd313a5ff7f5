//! Minimal structures for the Maven Central search (Solr) JSON response.

use serde::Deserialize;

/// Top-level search response wrapper.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub response: SearchResult,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// One artifact document from the search index. Fields may be absent for
/// incomplete index entries.
#[derive(Debug, Deserialize)]
pub struct SearchDoc {
    /// Group id, dot-delimited (e.g. `org.example`).
    #[serde(default)]
    pub g: Option<String>,
    /// Artifact id.
    #[serde(default)]
    pub a: Option<String>,
    /// Latest published version.
    #[serde(default, rename = "latestVersion")]
    pub latest_version: Option<String>,
    /// Index tags (free-form keywords).
    #[serde(default)]
    pub tags: Vec<String>,
}
