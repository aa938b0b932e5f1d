// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::error::{Error, Result};
use crate::model::PoliticianRecord;

/// Serialize `records` as a pretty JSON array and overwrite `path`.
/// The parent directory is created if needed. Nothing is written unless
/// serialization succeeded.
pub fn write_records(path: &Path, records: &[PoliticianRecord]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
        origin: path.display().to_string(),
        source,
    })?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(path, json).map_err(|e| Error::io(path, e))
}

/// Load a previously written dataset.
pub fn read_records(path: &Path) -> Result<Vec<PoliticianRecord>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        origin: path.display().to_string(),
        source,
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
