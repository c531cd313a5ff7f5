//! `mvntop run` – fetch the top catalog, download the JARs, write the manifest.

use anyhow::Result;
use mvntop_core::catalog::CatalogClient;
use mvntop_core::config::MvntopConfig;
use mvntop_core::downloader::{self, FetchOptions};
use mvntop_core::manifest;
use std::path::PathBuf;

use super::print_download_event;

pub fn run_pipeline(
    cfg: &MvntopConfig,
    limit: Option<usize>,
    output_dir: Option<PathBuf>,
    manifest_file: Option<PathBuf>,
) -> Result<()> {
    let limit = limit.unwrap_or(cfg.limit);
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&cfg.download_dir));
    let manifest_path = manifest_file.unwrap_or_else(|| PathBuf::from(&cfg.manifest_file));

    let urls = CatalogClient::default().fetch_top_jars(limit);
    if urls.is_empty() {
        println!("Catalog returned no URLs; see the log for details.");
    }
    for url in &urls {
        println!("{url}");
    }

    let opts = FetchOptions::from_config(cfg.http.as_ref());
    let mut printer = print_download_event;
    let summary = downloader::download_all(&urls, &output_dir, &opts, Some(&mut printer))?;

    manifest::write_manifest(&urls, &manifest_path)?;
    println!("Wrote {} URL(s) to {}", urls.len(), manifest_path.display());
    if !summary.failed.is_empty() {
        println!(
            "{} of {} download(s) failed; see the log for details.",
            summary.failed.len(),
            urls.len()
        );
    }
    Ok(())
}
