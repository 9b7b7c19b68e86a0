//! Error type returned by adapter actions.

use std::fmt;
use thiserror::Error;

use crate::transport::TransportError;

/// The user-facing actions the adapter offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ping,
    Upload,
    Validate,
    Download,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Ping => "Ping",
            Action::Upload => "Upload",
            Action::Validate => "Validate",
            Action::Download => "Download",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    /// Upload/validate invoked with nothing selected. No request was made.
    #[error("Please select a file")]
    NoFileSelected,
    /// The same action is already running. No request was made.
    #[error("{0} already in progress")]
    Busy(Action),
    #[error("could not read selected file: {0:#}")]
    FileSource(anyhow::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server returned HTTP {status}{}", suffix(.detail))]
    Status { status: u32, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response has no usable `{0}` field")]
    MissingField(&'static str),
    /// The service answered with an `{"error": ...}` body.
    #[error("{0}")]
    Server(String),
    #[error("{0:#}")]
    Navigation(anyhow::Error),
}

fn suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_message_is_the_prompt() {
        assert_eq!(ActionError::NoFileSelected.to_string(), "Please select a file");
    }

    #[test]
    fn status_display_with_and_without_detail() {
        let bare = ActionError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "server returned HTTP 500");
        let detailed = ActionError::Status {
            status: 400,
            detail: Some("Only CSV files allowed".into()),
        };
        assert_eq!(
            detailed.to_string(),
            "server returned HTTP 400: Only CSV files allowed"
        );
    }

    #[test]
    fn busy_names_the_action() {
        assert_eq!(
            ActionError::Busy(Action::Validate).to_string(),
            "Validate already in progress"
        );
    }
}
