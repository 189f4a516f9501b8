//! File access for the reference tables

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::core::error::{DataError, Result};

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON file whose top level is an object with a single entry
/// (`{"sb": [...]}`, `{"adder": {...}}`) and deserialize that entry.
pub fn read_wrapped<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let value: serde_json::Value = read_json(path)?;
    let inner = unwrap_single(value)
        .ok_or_else(|| DataError::malformed(path.display().to_string(), "top-level entry"))?;
    serde_json::from_value(inner).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The first value of a JSON object
pub fn unwrap_single(value: serde_json::Value) -> Option<serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map.into_iter().next().map(|(_, inner)| inner),
        _ => None,
    }
}

/// All `.json` files below `path`, sorted so runs are reproducible
pub fn json_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_json_files(path, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_json_files(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(path).map_err(io_err)? {
        let entry_path = entry.map_err(io_err)?.path();

        if entry_path.is_dir() {
            collect_json_files(&entry_path, files)?;
        } else if entry_path.extension().map_or(false, |ext| ext == "json") {
            files.push(entry_path);
        } else {
            tracing::warn!(path = %entry_path.display(), "Ignoring non-JSON file");
        }
    }
    Ok(())
}
