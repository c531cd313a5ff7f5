//! Per-artifact download error type.

use thiserror::Error;

/// Error from a single artifact download (curl failure, HTTP error, or
/// filesystem failure). One of these never aborts the batch; the failed
/// URL is reported and the batch moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local file create/write/rename failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
