//! The file action adapter: upload, validate and download wired to the service.
//!
//! Each action reads the selection fresh, makes at most one request through
//! the transport, and reports the outcome through the injected ports.
//! Failures are logged, shown to the user once, and returned.

use serde_json::Number;
use std::sync::Arc;

use crate::endpoint::{self, DOWNLOAD_PATH, FILE_FIELD, PING_PATH, UPLOAD_PATH};
use crate::error::{Action, ActionError};
use crate::file::SelectedFile;
use crate::guard::InFlight;
use crate::ports::{FileSource, Navigator, Notifier, ResultSink};
use crate::response;
use crate::transport::HttpTransport;

/// The environment the adapter acts on.
#[derive(Clone)]
pub struct Ports {
    pub files: Arc<dyn FileSource>,
    pub results: Arc<dyn ResultSink>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

pub struct FileActionAdapter<T> {
    transport: T,
    ports: Ports,
    uploading: InFlight,
    validating: InFlight,
}

impl<T: HttpTransport> FileActionAdapter<T> {
    pub fn new(transport: T, ports: Ports) -> Self {
        Self {
            transport,
            ports,
            uploading: InFlight::default(),
            validating: InFlight::default(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /` and notify the service's greeting.
    pub fn ping(&self) -> Result<String, ActionError> {
        let outcome = self
            .transport
            .get(PING_PATH)
            .map_err(ActionError::from)
            .and_then(|resp| response::message(&resp));
        let message = self.settle(Action::Ping, outcome)?;
        self.ports.notifier.notify(&message);
        Ok(message)
    }

    /// Send the selected file as multipart field `file` to `/upload` and notify the reply's `message`.
    ///
    /// Returns `Busy` without side effects while another upload is running.
    pub fn upload(&self) -> Result<String, ActionError> {
        let _guard = self
            .uploading
            .try_enter()
            .ok_or(ActionError::Busy(Action::Upload))?;

        let outcome = self.selected().and_then(|file| {
            tracing::debug!(file = %file.name, bytes = file.contents.len(), "upload");
            let resp = self
                .transport
                .post_multipart(UPLOAD_PATH, FILE_FIELD, &file)?;
            response::message(&resp)
        });
        let message = self.settle(Action::Upload, outcome)?;
        self.ports.notifier.notify(&message);
        Ok(message)
    }

    /// Ask `/validate` about the selected file (by name only) and show
    /// `Errors found: <n>` in the result display.
    ///
    /// Returns `Busy` without side effects while another validation is running.
    pub fn validate(&self) -> Result<Number, ActionError> {
        let _guard = self
            .validating
            .try_enter()
            .ok_or(ActionError::Busy(Action::Validate))?;

        let outcome = self.selected().and_then(|file| {
            let path = endpoint::validate_path(&file.name);
            tracing::debug!(file = %file.name, path = %path, "validate");
            let resp = self.transport.post_empty(&path)?;
            response::total_errors(&resp)
        });
        let total = self.settle(Action::Validate, outcome)?;
        self.ports
            .results
            .set_result_text(&response::errors_found_text(&total));
        Ok(total)
    }

    /// Navigate to `/download`. The transport is not used.
    pub fn download(&self) -> Result<(), ActionError> {
        tracing::debug!(path = DOWNLOAD_PATH, "download");
        let outcome = self
            .ports
            .navigator
            .navigate(DOWNLOAD_PATH)
            .map_err(ActionError::Navigation);
        self.settle(Action::Download, outcome)
    }

    fn selected(&self) -> Result<SelectedFile, ActionError> {
        self.ports
            .files
            .selected_file()
            .map_err(ActionError::FileSource)?
            .ok_or(ActionError::NoFileSelected)
    }

    /// Logs and notifies a failed outcome once; passes successes through.
    fn settle<V>(&self, action: Action, outcome: Result<V, ActionError>) -> Result<V, ActionError> {
        let err = match outcome {
            Ok(v) => return Ok(v),
            Err(err) => err,
        };
        match &err {
            ActionError::NoFileSelected => {
                tracing::info!(%action, "no file selected");
                self.ports.notifier.notify(&err.to_string());
            }
            ActionError::Busy(_) => {}
            _ => {
                tracing::warn!(%action, "action failed: {}", err);
                self.ports
                    .notifier
                    .notify(&format!("{action} failed: {err}"));
            }
        }
        Err(err)
    }
}
