//! Pick the interesting headers out of raw response header lines.

/// Headers of the final response (earlier blocks from redirects or
/// `100 Continue` are discarded when a new status line starts).
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct ResponseHeaders {
    pub(super) content_type: Option<String>,
    pub(super) content_disposition: Option<String>,
}

pub(super) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let mut out = ResponseHeaders::default();
    for line in lines.iter().map(|l| l.trim()) {
        if line.starts_with("HTTP/") {
            out = ResponseHeaders::default();
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        match name.trim() {
            n if n.eq_ignore_ascii_case("content-type") => out.content_type = Some(value),
            n if n.eq_ignore_ascii_case("content-disposition") => {
                out.content_disposition = Some(value)
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_content_type_and_disposition() {
        let h = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "content-type: text/csv; charset=utf-8",
            "Content-Disposition: attachment; filename=\"errors.csv\"",
            "",
        ]));
        assert_eq!(h.content_type.as_deref(), Some("text/csv; charset=utf-8"));
        assert_eq!(
            h.content_disposition.as_deref(),
            Some("attachment; filename=\"errors.csv\"")
        );
    }

    #[test]
    fn later_status_line_resets_headers() {
        let h = parse_headers(&lines(&[
            "HTTP/1.1 100 Continue",
            "Content-Type: text/plain",
            "",
            "HTTP/1.1 200 OK",
            "Content-Type: application/json",
        ]));
        assert_eq!(h.content_type.as_deref(), Some("application/json"));
        assert!(h.content_disposition.is_none());
    }
}
