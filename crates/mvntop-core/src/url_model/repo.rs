//! Maven repository layout: direct JAR URL from group/artifact/version.

/// Builds the direct JAR URL for an artifact under `repo_base`.
///
/// Follows the standard repository layout: the group id's dots become path
/// separators, and the file is `{artifact}-{version}.jar`. A trailing slash
/// on `repo_base` is tolerated.
pub fn jar_url(repo_base: &str, group: &str, artifact: &str, version: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}-{}.jar",
        repo_base.trim_end_matches('/'),
        group.replace('.', "/"),
        artifact,
        version,
        artifact,
        version
    )
}
