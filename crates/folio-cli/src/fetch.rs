//! Fetch command implementation: runs the page data loader once.

use crate::config;
use anyhow::{Context, Result};
use folio_core::{load_portfolio_page, ApiClient, PortfolioPage};
use std::path::Path;
use tracing::info;

/// Loads the portfolio page data; with `out` set also writes it as a JSON
/// snapshot.
pub async fn execute_fetch(out: Option<&Path>) -> Result<PortfolioPage> {
    let settings = config::api_settings()?;
    let api = ApiClient::from_settings(&settings).context("Invalid backend URL")?;

    let page = load_portfolio_page(&api)
        .await
        .with_context(|| format!("Failed to load portfolio from {}", api.base_url()))?;

    if let Some(path) = out {
        write_snapshot(&page, path).await?;
    }

    Ok(page)
}

pub async fn write_snapshot(page: &PortfolioPage, path: &Path) -> Result<()> {
    tokio::fs::write(path, page.to_json())
        .await
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
    info!("Wrote page snapshot to {}", path.display());
    Ok(())
}
