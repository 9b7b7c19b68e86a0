//! `csvcheck validate <path>`

use anyhow::Result;
use std::sync::Arc;

use super::blocking;
use crate::cli::CliAdapter;

pub async fn run_validate(adapter: &Arc<CliAdapter>) -> Result<()> {
    let total = blocking(adapter, |a| a.validate()).await?;
    tracing::info!(%total, "validate done");
    Ok(())
}
