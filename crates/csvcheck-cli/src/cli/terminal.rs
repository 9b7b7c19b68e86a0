//! Terminal-backed notifier and result display.

use csvcheck_core::ports::{Notifier, ResultSink};

/// Prints notifications and results to stdout, one line each.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Terminal;

impl Notifier for Terminal {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

impl ResultSink for Terminal {
    fn set_result_text(&self, text: &str) {
        println!("{text}");
    }
}
