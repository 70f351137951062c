//! # File I/O
//!
//! Reading requests, engine inputs and alternate capacity tables from JSON
//! files, and writing results atomically.
//!
//! ## Atomic Writes
//!
//! Output is never written in place. [`save_json`] writes to a temporary
//! sibling file, syncs it, then renames it over the target:
//!
//! 1. Write to `<path>.tmp`
//! 2. `sync_all()`
//! 3. Rename to `<path>`
//!
//! An interrupted write leaves the previous file untouched.
//!
//! ## Request Files
//!
//! A malformed request file is a business outcome (`invalid_request_payload`),
//! so [`read_request_json`] only reads the text and leaves parsing to
//! [`LiftRequest::from_json`](crate::lift::LiftRequest::from_json). Engine
//! inputs and capacity tables are caller-controlled data; bad JSON there is a
//! `SerializationError`.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::engine::EngineInput;
use crate::errors::{CalcResult, RiggingError};
use crate::tables::CapacityTables;

/// Read a whole file as UTF-8 text.
pub fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| RiggingError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| RiggingError::file_error("read", path.display().to_string(), e.to_string()))?;

    Ok(contents)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| RiggingError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Read the raw text of a lift request file.
pub fn read_request_json(path: &Path) -> CalcResult<String> {
    debug!(path = %path.display(), "Reading lift request");
    read_to_string(path)
}

/// Load an engine-form input.
pub fn load_engine_input(path: &Path) -> CalcResult<EngineInput> {
    debug!(path = %path.display(), "Loading engine input");
    load_json(path)
}

/// Load an alternate set of capacity tables.
///
/// The tables are validated before they are returned, so an unsorted or
/// non-positive row is rejected here rather than mis-selecting later.
///
/// # Example
///
/// ```rust,no_run
/// use rigging_core::file_io::load_tables;
/// use std::path::Path;
///
/// let tables = load_tables(Path::new("site_tables.json"))?;
/// println!("{} shackle sizes", tables.shackles.len());
/// # Ok::<(), rigging_core::errors::RiggingError>(())
/// ```
pub fn load_tables(path: &Path) -> CalcResult<CapacityTables> {
    let tables: CapacityTables = load_json(path)?;
    tables.validate()?;
    debug!(
        path = %path.display(),
        shackles = tables.shackles.len(),
        "Loaded capacity tables"
    );
    Ok(tables)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Serialize `value` as JSON and write it atomically to `path`.
pub fn save_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> CalcResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| RiggingError::SerializationError { reason: e.to_string() })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        RiggingError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.write_all(b"\n"))
        .map_err(|e| RiggingError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))
        .and_then(|_| {
            tmp_file.sync_all().map_err(|e| {
                RiggingError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
            })
        });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        RiggingError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "Wrote JSON");
    Ok(())
}
