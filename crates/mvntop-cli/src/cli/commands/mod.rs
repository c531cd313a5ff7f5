//! CLI command handlers. Each command is in its own file.

mod download;
mod list;
mod run;

pub use download::run_download;
pub use list::run_list;
pub use run::run_pipeline;

use mvntop_core::downloader::DownloadEvent;

/// Prints one per-URL progress line to stdout.
pub(crate) fn print_download_event(event: DownloadEvent<'_>) {
    match event {
        DownloadEvent::Started { url } => println!("Downloading {url}..."),
        DownloadEvent::Saved { path, .. } => println!("Saved to {}", path.display()),
        DownloadEvent::Failed { url, error } => println!("Failed to download {url}: {error}"),
    }
}
