use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use casedb_core::{Error, Result};

use crate::Slot;

/// File-backed slot: one file holding the whole JSON payload.
///
/// Writes go through a uniquely named temp file in the same directory and
/// an atomic rename, so an interrupted write leaves the previous contents
/// intact, readers never observe a half-written payload, and neighboring
/// files are never clobbered by the staging step.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot backed by the file at `path`.
    ///
    /// The file is not touched until the first write; a slot over a missing
    /// file reads as never-written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!("read {}: {e}", self.path.display()))),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)
            .map_err(|e| Error::Storage(format!("create {}: {e}", parent.display())))?;
        let mut staging = NamedTempFile::new_in(&parent)
            .map_err(|e| Error::Storage(format!("stage in {}: {e}", parent.display())))?;
        staging
            .write_all(contents.as_bytes())
            .map_err(|e| Error::Storage(format!("stage {}: {e}", staging.path().display())))?;
        staging
            .persist(&self.path)
            .map_err(|e| Error::Storage(format!("replace {}: {e}", self.path.display())))?;
        Ok(())
    }
}
