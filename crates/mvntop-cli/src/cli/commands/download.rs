//! `mvntop download <manifest>` – download every URL listed in a file.

use anyhow::{Context, Result};
use mvntop_core::config::MvntopConfig;
use mvntop_core::downloader::{self, FetchOptions};
use std::fs;
use std::path::Path;

use super::print_download_event;

pub fn run_download(cfg: &MvntopConfig, manifest_path: &Path, output_dir: &Path) -> Result<()> {
    let data = fs::read_to_string(manifest_path)
        .with_context(|| format!("read URL list: {}", manifest_path.display()))?;
    let urls: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    let opts = FetchOptions::from_config(cfg.http.as_ref());
    let mut printer = print_download_event;
    let summary = downloader::download_all(&urls, output_dir, &opts, Some(&mut printer))?;

    println!(
        "Downloaded {} of {} file(s) to {}",
        summary.saved.len(),
        urls.len(),
        output_dir.display()
    );
    if !summary.failed.is_empty() {
        println!("{} download(s) failed; see the log for details.", summary.failed.len());
    }
    Ok(())
}
