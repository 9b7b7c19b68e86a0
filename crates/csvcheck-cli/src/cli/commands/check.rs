//! `csvcheck check <path> [--download]` – upload, validate, and optionally fetch the report.

use anyhow::Result;
use std::sync::Arc;

use super::blocking;
use crate::cli::CliAdapter;

pub async fn run_check(adapter: &Arc<CliAdapter>, download: bool) -> Result<()> {
    blocking(adapter, |a| a.upload()).await?;
    let total = blocking(adapter, |a| a.validate()).await?;

    let has_errors = total.as_f64().map(|n| n > 0.0).unwrap_or(false);
    if !download {
        return Ok(());
    }
    if has_errors {
        blocking(adapter, |a| a.download()).await?;
    } else {
        tracing::info!("no errors found; report not downloaded");
        println!("No errors found; report not downloaded");
    }
    Ok(())
}
