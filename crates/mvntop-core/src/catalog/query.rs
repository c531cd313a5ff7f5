//! Search query-string construction.

/// Builds the percent-encoded query string for one catalog search.
///
/// Wildcard query over the GAV core, sorted by descending download count,
/// requesting `2 * limit` rows in JSON format. Twice the limit leaves room
/// for documents the selection step skips.
pub(crate) fn search_query(limit: usize) -> String {
    let rows = limit.saturating_mul(2);
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", "*:*")
        .append_pair("rows", &rows.to_string())
        .append_pair("wt", "json")
        .append_pair("core", "gavl")
        .append_pair("sort", "downloaded desc")
        .finish()
}
