//! libcurl-backed transport. Every call builds a fresh `Easy` handle and runs
//! on the current thread; use `spawn_blocking` from async code.

use curl::easy::{Easy, Form};
use std::str;
use std::time::Duration;
use url::Url;

use super::parse::parse_headers;
use super::{HttpResponse, HttpTransport, TransportError};
use crate::config::CsvcheckConfig;
use crate::file::SelectedFile;

#[derive(Debug, Clone)]
pub struct CurlTransport {
    base: Url,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::from_config(&CsvcheckConfig {
            base_url: base_url.to_string(),
            ..CsvcheckConfig::default()
        })
    }

    pub fn from_config(cfg: &CsvcheckConfig) -> Result<Self, TransportError> {
        let base = Url::parse(&cfg.base_url).map_err(|source| TransportError::InvalidUrl {
            url: cfg.base_url.clone(),
            source,
        })?;
        Ok(Self {
            base,
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            user_agent: cfg.user_agent(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` the way a page-relative link would be (`/x` replaces the base path).
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base
            .join(path)
            .map_err(|source| TransportError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }

    fn easy_for(&self, path: &str) -> Result<Easy, TransportError> {
        let url = self.url_for(path)?;
        let mut easy = Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;
        Ok(easy)
    }

    fn perform(easy: &mut Easy) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let headers = parse_headers(&header_lines);
        Ok(HttpResponse {
            status,
            content_type: headers.content_type,
            content_disposition: headers.content_disposition,
            body,
        })
    }
}

impl HttpTransport for CurlTransport {
    fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let mut easy = self.easy_for(path)?;
        easy.get(true)?;
        tracing::debug!(path, "GET");
        Self::perform(&mut easy)
    }

    fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &SelectedFile,
    ) -> Result<HttpResponse, TransportError> {
        let mut easy = self.easy_for(path)?;
        let mut form = Form::new();
        form.part(field)
            .buffer(&file.name, file.contents.clone())
            .content_type(file.content_type())
            .add()?;
        easy.httppost(form)?;
        tracing::debug!(path, field, file = %file.name, bytes = file.contents.len(), "POST multipart");
        Self::perform(&mut easy)
    }

    fn post_empty(&self, path_and_query: &str) -> Result<HttpResponse, TransportError> {
        let mut easy = self.easy_for(path_and_query)?;
        easy.post(true)?;
        easy.post_fields_copy(&[])?;
        tracing::debug!(path = path_and_query, "POST");
        Self::perform(&mut easy)
    }
}
