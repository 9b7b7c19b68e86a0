//! HTTP transport seam.
//!
//! The adapter only speaks to the service through [`HttpTransport`]; the
//! production implementation is [`CurlTransport`] (libcurl, blocking).

mod libcurl;
mod parse;

pub use libcurl::CurlTransport;

use thiserror::Error;

use crate::file::SelectedFile;

/// A buffered HTTP response with the headers the client cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    /// `Content-Type` value, if present.
    pub content_type: Option<String>,
    /// `Content-Disposition` value, if present (report filename hint).
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the server labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Connection, timeout, TLS and other libcurl failures.
    #[error("request failed: {0}")]
    Curl(#[from] ::curl::Error),
    #[error("could not build multipart body: {0}")]
    Form(#[from] ::curl::FormError),
}

/// Blocking request primitives. Paths are absolute (`/upload`) and resolved
/// against the transport's base URL; only one request per call.
pub trait HttpTransport: Send + Sync {
    fn get(&self, path: &str) -> Result<HttpResponse, TransportError>;

    /// POST a multipart form with a single file part named `field`.
    fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &SelectedFile,
    ) -> Result<HttpResponse, TransportError>;

    /// POST with an empty body.
    fn post_empty(&self, path_and_query: &str) -> Result<HttpResponse, TransportError>;
}
