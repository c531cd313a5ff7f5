//! URL modeling: Maven repository-layout URL construction and local
//! filename derivation from a download URL.

mod path;
mod repo;
mod sanitize;

pub use path::filename_from_url_path;
pub use repo::jar_url;
pub use sanitize::sanitize_filename_for_linux;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives a safe local filename from a download URL.
///
/// Uses the last path segment of `url`, sanitized for Linux. Regular jar
/// names (`foo-1.2.3.jar`) pass through unchanged.
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
