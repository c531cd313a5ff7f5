//! URL manifest: the newline-joined download URL list written once per run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `urls` to `path`, newline-joined with no trailing newline.
///
/// The content is exactly the input sequence in order, independent of how
/// the downloads went. Creates the parent directory if needed; overwrites
/// an existing file.
pub fn write_manifest(urls: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create manifest dir: {}", parent.display()))?;
        }
    }
    fs::write(path, urls.join("\n"))
        .with_context(|| format!("write manifest: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_newline_joined_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top100.txt");
        let urls = vec![
            "https://repo1.maven.org/maven2/a/b/1.0/b-1.0.jar".to_string(),
            "https://repo1.maven.org/maven2/c/d/2.0/d-2.0.jar".to_string(),
        ];
        write_manifest(&urls, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "https://repo1.maven.org/maven2/a/b/1.0/b-1.0.jar\nhttps://repo1.maven.org/maven2/c/d/2.0/d-2.0.jar"
        );
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top100.txt");
        write_manifest(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn overwrites_previous_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top100.txt");
        fs::write(&path, "old contents").unwrap();
        let urls = vec!["https://example.com/x.jar".to_string()];
        write_manifest(&urls, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "https://example.com/x.jar");
    }

    #[test]
    fn creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/top100.txt");
        write_manifest(&["https://example.com/x.jar".to_string()], &path).unwrap();
        assert!(path.exists());
    }
}
