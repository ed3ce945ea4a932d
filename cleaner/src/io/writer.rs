use polars::prelude::*;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{CleanError, CleanResult};

/// Write `df` as CSV with a header row.
///
/// The data goes to a `.tmp` sibling first and is renamed over `path` once
/// complete, so a failed write never leaves a partial file at `path`. The
/// parent directory must already exist.
pub fn write_training_csv(df: &mut DataFrame, path: &Path) -> CleanResult<()> {
    let staging = staging_path(path);

    if let Err(err) = write_csv(df, &staging) {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        CleanError::io(path, e)
    })?;

    log::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

fn write_csv(df: &mut DataFrame, path: &Path) -> CleanResult<()> {
    let mut file = File::create(path).map_err(|e| CleanError::io(path, e))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)?;

    file.sync_all().map_err(|e| CleanError::io(path, e))
}

/// `training_data.csv` -> `training_data.csv.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
