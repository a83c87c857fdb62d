//! JSON documents on disk
//!
//! Writes go to a sibling `.tmp` file that is synced and renamed over the
//! target, so a crash leaves either the old document or the new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a document; a missing file reads as `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_synced(&temp_path, data)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| storage_error("replace", path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(path: &Path, data: &T) -> Result<(), BudgetError> {
    let file = File::create(path).map_err(|e| storage_error("create", path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| storage_error("serialize", path, e))?;
    writer.flush().map_err(|e| storage_error("write", path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", path, e))
}
