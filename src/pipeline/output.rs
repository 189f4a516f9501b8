//! Data file writing

use std::path::Path;

use super::DataFile;
use crate::core::error::{DataError, Result};

/// Write `data` as pretty JSON.
///
/// The file is written next to `path` first and renamed into place, so a
/// failure never leaves a truncated data file behind.
pub fn write_data_file(data: &DataFile, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = Path::new(&staging);

    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(staging, json).map_err(io_err)?;
    if let Err(source) = std::fs::rename(staging, path) {
        let _ = std::fs::remove_file(staging);
        return Err(io_err(source));
    }

    tracing::info!(path = %path.display(), "Wrote data file");
    Ok(())
}
