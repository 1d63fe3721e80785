//! CSV export to the local filesystem.
//!
//! The exporter owns a target directory and always writes the same file
//! inside it. Writes go to a sibling temp file first, are fsynced, then
//! renamed over the target, so readers only ever see a complete file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use wishlist_core::{WishlistError, WishlistResult};

pub const EXPORT_FILE_NAME: &str = "wishlist.csv";

#[derive(Debug)]
pub struct CsvExporter {
    dir: PathBuf,
    // Serializes writers; they share one temp path.
    write_lock: Mutex<()>,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn target_path(&self) -> PathBuf {
        self.dir.join(EXPORT_FILE_NAME)
    }

    /// Write `contents` to the export file, creating the directory if absent.
    ///
    /// Returns the path written. On failure the previous file (if any) is
    /// left as it was.
    pub fn write(&self, contents: &str) -> WishlistResult<PathBuf> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        fs::create_dir_all(&self.dir)
            .map_err(|e| WishlistError::export_failed(&self.dir, e))?;

        let path = self.target_path();
        write_atomic(&path, contents.as_bytes())
            .map_err(|e| WishlistError::export_failed(&path, e))?;
        Ok(path)
    }
}

/// Atomic write: temp + fsync + rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp_path = path.with_extension("csv.tmp");

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
