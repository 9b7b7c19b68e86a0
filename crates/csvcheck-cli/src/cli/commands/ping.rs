//! `csvcheck ping` – check the service answers.

use anyhow::Result;
use std::sync::Arc;

use super::blocking;
use crate::cli::CliAdapter;

pub async fn run_ping(adapter: &Arc<CliAdapter>) -> Result<()> {
    blocking(adapter, |a| a.ping()).await?;
    Ok(())
}
