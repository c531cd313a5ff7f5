//! Sequential batch downloader.
//!
//! Consumes an ordered URL list and an output directory, fetches each URL
//! with a streamed blocking GET, and persists the body under the URL's last
//! path segment. Per-URL failures are collected, never propagated; one bad
//! artifact does not abort the batch.

mod error;
mod fetch;

pub use error::FetchError;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::HttpConfig;
use crate::url_model;

/// HTTP transfer parameters for artifact downloads.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub transfer_timeout: Duration,
    /// Receive buffer size in bytes (None = libcurl default). Bounds the
    /// chunk size handed to the file writer.
    pub buffer_size: Option<usize>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            transfer_timeout: Duration::from_secs(3600),
            buffer_size: None,
        }
    }
}

impl FetchOptions {
    /// Builds options from the optional `[http]` config section.
    pub fn from_config(http: Option<&HttpConfig>) -> Self {
        match http {
            Some(h) => Self {
                connect_timeout: Duration::from_secs(h.connect_timeout_secs),
                transfer_timeout: Duration::from_secs(h.transfer_timeout_secs),
                buffer_size: h.buffer_bytes,
            },
            None => Self::default(),
        }
    }
}

/// Per-URL progress notification for callers that print to the terminal.
#[derive(Debug)]
pub enum DownloadEvent<'a> {
    Started { url: &'a str },
    Saved { url: &'a str, path: &'a Path },
    Failed { url: &'a str, error: &'a FetchError },
}

/// Outcome of a batch: files written and URLs that failed, in batch order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<(String, FetchError)>,
}

/// Downloads every URL in order into `output_dir`.
///
/// Creates `output_dir` (with parents) if absent; that is the only error
/// this function propagates. Each URL is fetched with its own blocking GET
/// and written under its derived filename, overwriting a same-named file
/// from a previous run. Failures land in the summary and the batch
/// continues with the next URL.
///
/// `progress` receives start/saved/failed events as they happen; pass
/// `None` when nothing prints them.
pub fn download_all(
    urls: &[String],
    output_dir: &Path,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn FnMut(DownloadEvent)>,
) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let mut summary = BatchSummary::default();
    for url in urls {
        if let Some(cb) = progress.as_mut() {
            cb(DownloadEvent::Started { url });
        }
        tracing::info!(%url, "downloading artifact");

        match fetch_artifact(url, output_dir, opts) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "saved artifact");
                if let Some(cb) = progress.as_mut() {
                    cb(DownloadEvent::Saved { url, path: &path });
                }
                summary.saved.push(path);
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "artifact download failed");
                if let Some(cb) = progress.as_mut() {
                    cb(DownloadEvent::Failed { url, error: &e });
                }
                summary.failed.push((url.clone(), e));
            }
        }
    }
    Ok(summary)
}

/// Downloads one URL into `output_dir` under its derived filename and
/// returns the written path.
pub fn fetch_artifact(
    url: &str,
    output_dir: &Path,
    opts: &FetchOptions,
) -> Result<PathBuf, FetchError> {
    let filename = url_model::derive_filename(url);
    let dest = output_dir.join(filename);
    fetch::fetch_to_file(url, &dest, opts)?;
    Ok(dest)
}
