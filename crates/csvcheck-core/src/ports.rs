//! Capabilities the adapter is handed instead of reaching into a UI.

use anyhow::Result;

use crate::file::SelectedFile;

/// Where the user's current file selection comes from. Read once per action.
pub trait FileSource: Send + Sync {
    fn selected_file(&self) -> Result<Option<SelectedFile>>;
}

/// Display that shows the latest validation result.
pub trait ResultSink: Send + Sync {
    fn set_result_text(&self, text: &str);
}

/// Delivers a message to the user; returns once it has been delivered.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Takes the user to a server path (a page load in a browser, a file save in the CLI).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str) -> Result<()>;
}
