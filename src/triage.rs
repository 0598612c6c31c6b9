//! An append-only record of database names that could not be resolved, for
//! someone to add to the tables later.

use crate::resolve::Resolution;
use parking_lot::Mutex;
use std::{
    fs::{File, OpenOptions},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

/// An append-only problem log.
pub struct ProblemLog {
    /// The path of the log, for error messages.
    path: PathBuf,
    /// The open log file.
    file: Mutex<File>,
}

impl ProblemLog {
    /// Opens the problem log at `path`, creating it if necessary.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.into(),
            file: Mutex::new(file),
        })
    }

    /// The path of the log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records `resolution` if it is unresolved. Returns true if something was
    /// written.
    pub fn record(&self, resolution: &Resolution) -> io::Result<bool> {
        if resolution.is_resolved() {
            return Ok(false);
        }

        log::warn!("Unresolved database name: {}", resolution.dbname);
        // A single write per line keeps lines whole when other processes are
        // appending to the same file.
        let line = format!("{}\n", resolution.dbname);
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(true)
    }
}
