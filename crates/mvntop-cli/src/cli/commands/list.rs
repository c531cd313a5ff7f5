//! `mvntop list` – print the top catalog URLs without downloading.

use anyhow::Result;
use mvntop_core::catalog::CatalogClient;
use mvntop_core::config::MvntopConfig;

pub fn run_list(cfg: &MvntopConfig, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(cfg.limit);
    let urls = CatalogClient::default().fetch_top_jars(limit);
    if urls.is_empty() {
        println!("Catalog returned no URLs; see the log for details.");
        return Ok(());
    }
    for url in &urls {
        println!("{url}");
    }
    Ok(())
}
