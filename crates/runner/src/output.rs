//! Output directory handling

use std::fs;
use std::path::{Path, PathBuf};

use watchlist_core::naming::CATEGORY_DIR;

use crate::error::{Result, RunError};

/// Directory receiving the watchlist files of one run
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn category_dir(&self) -> PathBuf {
        self.root.join(CATEGORY_DIR)
    }

    /// Delete the directory with everything in it and recreate it empty
    pub fn reset(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(|e| RunError::io(&self.root, e))?;
        }
        fs::create_dir_all(&self.root).map_err(|e| RunError::io(&self.root, e))?;
        log::debug!("Output directory {} reset", self.root.display());
        Ok(())
    }

    /// Write `contents` to `relative` under the root, replacing any existing file
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RunError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| RunError::io(&path, e))?;
        Ok(path)
    }
}
