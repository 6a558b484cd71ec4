//! File I/O utilities with atomic writes
//!
//! Provides safe line-oriented file operations that won't corrupt data on
//! failure. Both persisted formats (credentials, per-user ledgers) are flat
//! text, one record per line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::MoneyMateError;

/// Read all lines from a text file
///
/// Returns `Ok(None)` if the file does not exist; absence is never an error
/// (a missing users.txt means "no users yet", a missing ledger file means
/// "no expenses yet").
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, MoneyMateError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| MoneyMateError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(contents.lines().map(str::to_string).collect()))
}

/// Write lines to a text file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures. The file is
/// overwritten wholesale; a trailing newline terminates the last record.
pub fn write_lines_atomic<P>(path: P, lines: &[String]) -> Result<(), MoneyMateError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                MoneyMateError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MoneyMateError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| MoneyMateError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| MoneyMateError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MoneyMateError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        MoneyMateError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
