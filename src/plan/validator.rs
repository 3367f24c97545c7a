use std::path::Path;
use std::sync::Arc;

use super::error::PlanError;
use crate::traits::FileSystem;

/// Pre-flight checks on the plan file path, run before anything is read
pub struct InputValidator {
    fs: Arc<dyn FileSystem>,
}

impl InputValidator {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Ensure `path` is set and names an existing regular file
    pub fn validate_plan_file_path(&self, path: &str) -> Result<(), PlanError> {
        if path.trim().is_empty() {
            return Err(PlanError::InputRequired);
        }

        let kind = self
            .fs
            .stat(Path::new(path))
            .map_err(|err| PlanError::from_io(err, path))?;

        if !kind.is_file() {
            return Err(PlanError::IsADirectory);
        }

        Ok(())
    }
}
