//! Writing downloaded files: `<name>.part` first, then an atomic rename.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `errors.csv` → `errors.csv.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `bytes` to `final_path` so readers never see a half-written file.
/// Creates the parent directory if needed; replaces an existing file.
pub fn write_atomic(final_path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = final_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let part = temp_path(final_path);
    let result = (|| -> Result<()> {
        let mut f = fs::File::create(&part).with_context(|| format!("create {}", part.display()))?;
        f.write_all(bytes)
            .with_context(|| format!("write {}", part.display()))?;
        f.sync_all()
            .with_context(|| format!("sync {}", part.display()))?;
        fs::rename(&part, final_path)
            .with_context(|| format!("rename to {}", final_path.display()))
    })();
    if result.is_err() {
        let _ = fs::remove_file(&part);
    }
    result
}
