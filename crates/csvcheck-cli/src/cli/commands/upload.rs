//! `csvcheck upload <path>`

use anyhow::Result;
use std::sync::Arc;

use super::blocking;
use crate::cli::CliAdapter;

pub async fn run_upload(adapter: &Arc<CliAdapter>) -> Result<()> {
    let message = blocking(adapter, |a| a.upload()).await?;
    tracing::info!(%message, "upload done");
    Ok(())
}
