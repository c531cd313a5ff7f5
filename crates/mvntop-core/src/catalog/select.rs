//! Selection of JAR URLs from search documents.

use crate::url_model;

use super::parse::SearchDoc;

/// Keyword excluded by tag or by artifact-id substring (case-sensitive).
/// Hand-picked exclusion of the Scala ecosystem, not a general category
/// filter.
const EXCLUDED_KEYWORD: &str = "scala";

/// Walks `docs` in order and builds direct JAR URLs under `repo_base`.
///
/// Skips excluded documents and documents missing any of group, artifact,
/// or version. Stops only after the accumulated count exceeds `limit`, so
/// callers may get back `limit + 1` URLs.
pub(crate) fn select_jar_urls(docs: &[SearchDoc], limit: usize, repo_base: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for doc in docs {
        let artifact = doc.a.as_deref().unwrap_or("");
        if doc.tags.iter().any(|t| t == EXCLUDED_KEYWORD) || artifact.contains(EXCLUDED_KEYWORD) {
            continue;
        }
        tracing::debug!(artifact, tags = ?doc.tags, "catalog doc passed filter");

        if let (Some(g), Some(a), Some(v)) = (&doc.g, &doc.a, &doc.latest_version) {
            if !g.is_empty() && !a.is_empty() && !v.is_empty() {
                urls.push(url_model::jar_url(repo_base, g, a, v));
            }
        }
        if urls.len() > limit {
            break;
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO: &str = "https://repo1.maven.org/maven2";

    fn doc(g: &str, a: &str, v: &str, tags: &[&str]) -> SearchDoc {
        SearchDoc {
            g: Some(g.to_string()),
            a: Some(a.to_string()),
            latest_version: Some(v.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn builds_urls_in_order() {
        let docs = [
            doc("org.example", "foo", "1.2.3", &["http"]),
            doc("com.acme", "bar", "0.9", &[]),
        ];
        assert_eq!(
            select_jar_urls(&docs, 10, REPO),
            [
                "https://repo1.maven.org/maven2/org/example/foo/1.2.3/foo-1.2.3.jar",
                "https://repo1.maven.org/maven2/com/acme/bar/0.9/bar-0.9.jar",
            ]
        );
    }

    #[test]
    fn skips_scala_tag() {
        let docs = [
            doc("org.example", "foo", "1.0", &["scala", "json"]),
            doc("org.example", "ok", "1.0", &[]),
        ];
        let urls = select_jar_urls(&docs, 10, REPO);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("/ok/"));
    }

    #[test]
    fn skips_scala_artifact_substring() {
        let docs = [
            doc("org.scala-lang", "scala-library", "2.13.12", &[]),
            doc("org.example", "rescala-core", "1.0", &[]),
        ];
        // Substring match, so "rescala-core" is caught as well.
        assert!(select_jar_urls(&docs, 10, REPO).is_empty());
    }

    #[test]
    fn scala_match_is_case_sensitive() {
        let docs = [doc("org.example", "Scalapack", "1.0", &[])];
        assert_eq!(select_jar_urls(&docs, 10, REPO).len(), 1);
    }

    #[test]
    fn skips_docs_missing_fields() {
        let docs = [
            SearchDoc {
                g: None,
                a: Some("foo".to_string()),
                latest_version: Some("1.0".to_string()),
                tags: Vec::new(),
            },
            SearchDoc {
                g: Some("org.example".to_string()),
                a: Some("bar".to_string()),
                latest_version: None,
                tags: Vec::new(),
            },
            doc("org.example", "", "1.0", &[]),
            doc("org.example", "ok", "1.0", &[]),
        ];
        let urls = select_jar_urls(&docs, 10, REPO);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].ends_with("/ok-1.0.jar"));
    }

    #[test]
    fn stops_one_past_the_limit() {
        let docs: Vec<SearchDoc> = (0..10)
            .map(|i| doc("org.example", &format!("a{i}"), "1.0", &[]))
            .collect();
        assert_eq!(select_jar_urls(&docs, 3, REPO).len(), 4);
        assert_eq!(select_jar_urls(&docs, 10, REPO).len(), 10);
    }

    #[test]
    fn empty_docs_yield_empty_list() {
        assert!(select_jar_urls(&[], 10, REPO).is_empty());
    }
}
