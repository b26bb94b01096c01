//! # Input Store
//!
//! Durable key/value storage for the calculator inputs, so a user can close
//! the tool and come back to the numbers they last entered.
//!
//! - **Lenient reads**: a missing, unreadable or corrupt file reads as an
//!   empty record. Reads never fail.
//! - **No silent loss**: a write starts from an empty record only when the
//!   file is missing or corrupt. If the file exists but cannot be read, the
//!   write fails and the record is left alone.
//! - **Atomic writes**: every `set` rewrites the whole record to a `.tmp`
//!   sibling, syncs it, and renames it over the target, so a concurrent
//!   reader sees either the old or the new record, never half of one.
//! - **Locked read-modify-write**: writers take an exclusive OS lock (fs2) on
//!   a `.lock` sibling so two processes cannot lose each other's updates.
//! - **Reported failures**: unlike reads, write failures are returned to the
//!   caller so "saved" and "discarded" can be told apart.
//!
//! ## File Format
//!
//! A single pretty-printed JSON object mapping key to number:
//!
//! ```json
//! {
//!   "automated_test_execution_time_min": 30.0,
//!   "manual_test_execution_time": 10.0
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use tacalc_core::store::InputStore;
//!
//! let store = InputStore::open("user_inputs.json");
//! store.set("initial_investment", 100.0)?;
//! assert_eq!(store.get("initial_investment", 0.0), 100.0);
//! # Ok::<(), tacalc_core::errors::CalcError>(())
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// File name used when no explicit data file is configured
pub const DEFAULT_FILE_NAME: &str = "user_inputs.json";

/// The full persisted record, sorted by key
pub type InputRecord = BTreeMap<String, f64>;

/// Handle to the on-disk input record.
///
/// The handle holds only the path; every operation goes to disk, so two
/// handles on the same path (or two processes) always agree.
#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
}

impl InputStore {
    /// Create a handle for the record at `path`. Nothing is read or created
    /// until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        InputStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole record.
    ///
    /// Absent file, I/O errors, malformed JSON, a non-object document and
    /// non-numeric values all degrade to "no entry".
    pub fn load(&self) -> InputRecord {
        self.load_for_update().unwrap_or_else(|e| {
            debug!(path = %self.path.display(), error = %e, "input store unreadable, using defaults");
            InputRecord::new()
        })
    }

    /// Read the record that a write will extend.
    ///
    /// Missing and corrupt files yield an empty record. Any other read
    /// failure is an error, so the caller does not overwrite data it never saw.
    fn load_for_update(&self) -> CalcResult<InputRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(InputRecord::new()),
            // Not UTF-8: corrupt content, not an access problem
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!(path = %self.path.display(), error = %e, "input store corrupt, using defaults");
                return Ok(InputRecord::new());
            }
            Err(e) => {
                return Err(CalcError::file_error(
                    "read",
                    self.path.display().to_string(),
                    e.to_string(),
                ));
            }
        };

        Ok(parse_record(&self.path, &contents))
    }

    /// Get a stored value, or `default` if absent or unreadable.
    pub fn get(&self, key: &str, default: f64) -> f64 {
        self.load().get(key).copied().unwrap_or(default)
    }

    /// Store a value and write the record to disk immediately.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The new record is durable
    /// * `Err(CalcError::InvalidInput)` - `value` is NaN or infinite
    /// * `Err(CalcError::FileLocked)` - Another process is writing
    /// * `Err(CalcError::FileError)` - The record could not be written
    pub fn set(&self, key: &str, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                key,
                value.to_string(),
                "Stored values must be finite numbers",
            ));
        }

        let _lock = StoreLock::acquire(&self.path)?;
        let mut record = self.load_for_update()?;
        record.insert(key.to_string(), value);
        write_atomic(&self.path, &record)?;
        debug!(path = %self.path.display(), key, value, "input stored");
        Ok(())
    }

    /// Remove the entire record. Subsequent reads return defaults.
    ///
    /// Clearing a record that does not exist succeeds.
    pub fn clear_all(&self) -> CalcResult<()> {
        let _lock = StoreLock::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CalcError::file_error(
                "remove",
                self.path.display().to_string(),
                e.to_string(),
            )),
        }
    }
}

fn parse_record(path: &Path, contents: &str) -> InputRecord {
    match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(contents) {
        Ok(map) => map
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
            .collect(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "input store corrupt, using defaults");
            InputRecord::new()
        }
    }
}

/// Exclusive OS-level lock on the `.lock` sibling of a record file.
///
/// The lock file is left on disk when released. Unlinking it would let a
/// process already waiting on the old inode lock a file nobody else sees.
struct StoreLock {
    _lock_file: File,
}

impl StoreLock {
    fn acquire(path: &Path) -> CalcResult<Self> {
        ensure_parent_dir(path)?;
        let lock_path = sibling_path(path, "lock");

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(path.display().to_string(), "another process")
        })?;

        Ok(StoreLock {
            _lock_file: lock_file,
        })
    }
}

/// Append `.{suffix}` to the full file name (`inputs.json` -> `inputs.json.lock`)
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

fn ensure_parent_dir(path: &Path) -> CalcResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| {
                CalcError::file_error("create directory", parent.display().to_string(), e.to_string())
            }),
        _ => Ok(()),
    }
}

/// Write the record through a temp file and rename it into place.
fn write_atomic(path: &Path, record: &InputRecord) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = sibling_path(path, "tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}
