//! The file a user picked for upload/validation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::FileSource;

/// A named binary blob, read fresh for each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Reads `path` and names the blob after its final component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("{} has no file name", path.display()))?;
        let contents = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self { name, contents })
    }

    /// MIME type sent with the multipart part.
    pub fn content_type(&self) -> &'static str {
        match Path::new(&self.name).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => "text/csv",
            Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }
}

/// File source backed by an optional filesystem path (None = nothing selected).
#[derive(Debug, Clone, Default)]
pub struct PathFileSource {
    path: Option<PathBuf>,
}

impl PathFileSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FileSource for PathFileSource {
    fn selected_file(&self) -> Result<Option<SelectedFile>> {
        self.path
            .as_deref()
            .map(SelectedFile::from_path)
            .transpose()
    }
}
