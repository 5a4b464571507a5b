use crate::deadlines::DeadlineList;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the deadline list from disk
    ///
    /// A missing file starts a fresh list. So does unparseable content:
    /// there is no prior in-memory state to preserve at load time, so a
    /// corrupt file is treated as empty rather than surfaced.
    pub fn load(&self) -> Result<DeadlineList> {
        if !self.file_path.exists() {
            return Ok(DeadlineList::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        match toml::from_str(&content) {
            Ok(data) => Ok(data),
            Err(_) => Ok(DeadlineList::new()),
        }
    }

    /// Write the whole list to disk, replacing the previous contents
    pub fn save(&self, data: &DeadlineList) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
