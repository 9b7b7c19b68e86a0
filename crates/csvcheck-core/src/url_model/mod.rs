//! Local filename for a downloaded report.
//!
//! The service names the report in `Content-Disposition`; the name is
//! sanitized before it touches the filesystem.

mod content_disposition;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use sanitize::sanitize_filename;

/// Name used when the server gives none (matches what the service calls its report).
pub const DEFAULT_REPORT_FILENAME: &str = "errors.csv";

/// Derives a safe filename for the report from an optional `Content-Disposition` value.
pub fn report_filename(content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(parse_content_disposition_filename)
        .map(|raw| sanitize_filename(&raw))
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| DEFAULT_REPORT_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_supplied_name() {
        assert_eq!(
            report_filename(Some("attachment; filename=\"errors.csv\"")),
            "errors.csv"
        );
        assert_eq!(
            report_filename(Some("attachment; filename=run-42.csv")),
            "run-42.csv"
        );
    }

    #[test]
    fn falls_back_without_header() {
        assert_eq!(report_filename(None), "errors.csv");
        assert_eq!(report_filename(Some("attachment")), "errors.csv");
    }

    #[test]
    fn empty_extended_name_keeps_plain_name() {
        assert_eq!(
            report_filename(Some("attachment; filename=\"run.csv\"; filename*=UTF-8''")),
            "run.csv"
        );
    }

    #[test]
    fn traversal_attempts_are_flattened() {
        assert_eq!(
            report_filename(Some("attachment; filename=\"../../etc/passwd\"")),
            "etc_passwd"
        );
        assert_eq!(report_filename(Some("attachment; filename=\"..\"")), "errors.csv");
    }
}
