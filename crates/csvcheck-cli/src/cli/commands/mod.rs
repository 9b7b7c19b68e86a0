//! CLI command handlers. Adapter calls block on curl, so they run on the blocking pool.

mod check;
mod download;
mod ping;
mod upload;
mod validate;

pub use check::run_check;
pub use download::run_download;
pub use ping::run_ping;
pub use upload::run_upload;
pub use validate::run_validate;

use anyhow::Result;
use csvcheck_core::error::ActionError;
use std::sync::Arc;

use super::CliAdapter;

/// Runs one adapter action off the async runtime.
async fn blocking<R, F>(adapter: &Arc<CliAdapter>, action: F) -> Result<R>
where
    F: FnOnce(&CliAdapter) -> Result<R, ActionError> + Send + 'static,
    R: Send + 'static,
{
    let adapter = Arc::clone(adapter);
    let outcome = tokio::task::spawn_blocking(move || action(&adapter)).await?;
    Ok(outcome?)
}
