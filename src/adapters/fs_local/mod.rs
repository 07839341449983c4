// Local filesystem adapter - File system operations through std::fs

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct LocalFsAdapter {
    /// Parent for working directories, the system temp dir when `None`
    temp_root: Option<PathBuf>,
}

impl LocalFsAdapter {
    /// Create new filesystem adapter
    pub fn new() -> Self {
        Self { temp_root: None }
    }

    /// Create working directories below `root`
    pub fn with_temp_root(root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: Some(root.into()),
        }
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        Ok(file_path.is_file())
    }

    async fn create_work_dir(&self, prefix: &str) -> Result<PathBuf, DomainError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix);
        let dir = match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| DomainError::FsFail(format!("Failed to create temp directory: {}", e)))?;

        // Removal is decided by the caller, debug runs keep it
        Ok(dir.keep())
    }

    async fn write_file(&self, file_path: &Path, contents: &str) -> Result<(), DomainError> {
        fs::write(file_path, contents).map_err(|e| {
            DomainError::FsFail(format!("Failed to write {}: {}", file_path.display(), e))
        })
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        fs::remove_file(file_path).map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", file_path.display(), e))
        })
    }

    async fn delete_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        fs::remove_dir_all(dir_path).map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", dir_path.display(), e))
        })
    }
}
