use std::path::Path;
use std::sync::Arc;

use super::error::PlanError;
use super::types::PlanFile;
use crate::traits::FileSystem;

/// Reads plan files through a [`FileSystem`]
pub struct PlanFileReader {
    fs: Arc<dyn FileSystem>,
}

impl PlanFileReader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read the plan file at `path` as UTF-8 text
    pub fn read(&self, path: &str) -> Result<PlanFile, PlanError> {
        let file_path = Path::new(path);

        let kind = self
            .fs
            .stat(file_path)
            .map_err(|err| PlanError::from_io(err, path))?;

        if !kind.is_file() {
            return Err(PlanError::NotAFile(path.to_string()));
        }

        let content = self
            .fs
            .read_to_string(file_path)
            .map_err(|err| PlanError::from_io(err, path))?;

        Ok(PlanFile::new(path, content))
    }
}
