//! `csvcheck download` – save the latest error report.

use anyhow::Result;
use std::sync::Arc;

use super::blocking;
use crate::cli::CliAdapter;

pub async fn run_download(adapter: &Arc<CliAdapter>) -> Result<()> {
    blocking(adapter, |a| a.download()).await
}
