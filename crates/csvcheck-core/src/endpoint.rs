//! Service paths and request shapes.

use url::form_urlencoded;

pub const PING_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/upload";
pub const VALIDATE_PATH: &str = "/validate";
pub const DOWNLOAD_PATH: &str = "/download";

/// Multipart field the service reads the uploaded file from.
pub const FILE_FIELD: &str = "file";

/// `/validate?filename=<name>`. Alphanumerics and `*-._` are left as-is.
pub fn validate_path(filename: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(filename.as_bytes()).collect();
    format!("{VALIDATE_PATH}?filename={encoded}")
}
