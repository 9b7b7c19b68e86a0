//! Navigator that performs the `/download` navigation by saving the report to disk.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::{Navigator, Notifier};
use crate::response;
use crate::storage;
use crate::transport::HttpTransport;
use crate::url_model;

/// GETs the navigated path and writes the body into `dir`, named after the
/// server's `Content-Disposition` (fallback `errors.csv`).
pub struct ReportSaver<T> {
    transport: T,
    dir: PathBuf,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<T: HttpTransport> ReportSaver<T> {
    pub fn new(transport: T, dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            dir: dir.into(),
            notifier: None,
        }
    }

    /// Announce each saved file through `notifier`.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Fetches `path` and saves it, returning where the file landed.
    pub fn save(&self, path: &str) -> Result<PathBuf> {
        let resp = self
            .transport
            .get(path)
            .with_context(|| format!("GET {path}"))?;
        if !resp.is_success() {
            bail!("GET {} returned HTTP {}", path, resp.status);
        }
        // The service reports a missing report as a 200 JSON `{"error": ...}`.
        if resp.is_json() || resp.content_disposition.is_none() {
            if let Some(err) = response::error_text(&resp.body) {
                bail!("{}", err);
            }
        }

        let name = url_model::report_filename(resp.content_disposition.as_deref());
        let target = self.dir.join(&name);
        storage::write_atomic(&target, &resp.body)?;
        tracing::info!(path, target = %target.display(), bytes = resp.body.len(), "saved report");
        Ok(target)
    }
}

impl<T: HttpTransport> Navigator for ReportSaver<T> {
    fn navigate(&self, path: &str) -> Result<()> {
        let target = self.save(path)?;
        if let Some(n) = &self.notifier {
            n.notify(&format!("Saved report to {}", target.display()));
        }
        Ok(())
    }
}
