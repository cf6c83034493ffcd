// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::ExportOptions;
use crate::csv::write_row;
use crate::error::ExportError;
use crate::progress::Progress;
use crate::record::Record;

/// What happened to one save request.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Header plus `rows` data rows written to `path`.
    Saved { path: PathBuf, rows: usize },
    /// Empty input; nothing touched on disk.
    NothingToSave,
    /// Reported, not propagated.
    Failed(ExportError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool { matches!(self, SaveOutcome::Saved { .. }) }
}

/// Persist `records` to `export.out_path()`, reporting the outcome.
pub fn save_records(
    export: &ExportOptions,
    records: &[Record],
    progress: &mut dyn Progress,
) -> SaveOutcome {
    if records.is_empty() {
        progress.log("No records; nothing to save");
        return SaveOutcome::NothingToSave;
    }

    let path = export.out_path();
    match write_records(&path, records, export.delim()) {
        Ok(rows) => {
            progress.log(&format!("Saved {rows} records to {}", path.display()));
            SaveOutcome::Saved { path, rows }
        }
        Err(e) => {
            progress.error(&format!("Could not save records: {e}"));
            SaveOutcome::Failed(e)
        }
    }
}

/// Write header + one row per record to `path` (truncating). Headers come
/// from the first record; every other record must have the same fields in
/// the same order, checked before anything is created.
///
/// Returns the number of data rows written. Empty input writes nothing.
pub fn write_records(path: &Path, records: &[Record], sep: char) -> Result<usize, ExportError> {
    let Some(first) = records.first() else { return Ok(0) };
    check_schema(first, records)?;

    let io_err = |source: io::Error| ExportError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_row(&mut out, &first.field_names(), sep).map_err(io_err)?;
    for rec in records {
        write_row(&mut out, &rec.values(), sep).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    logd!(path = %path.display(), rows = records.len(), "csv written");
    Ok(records.len())
}

fn check_schema(first: &Record, records: &[Record]) -> Result<(), ExportError> {
    match records.iter().position(|r| !r.same_schema(first)) {
        None => Ok(()),
        Some(row) => Err(ExportError::SchemaMismatch {
            row,
            expected: first.field_names(),
            found: records[row].field_names(),
        }),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
