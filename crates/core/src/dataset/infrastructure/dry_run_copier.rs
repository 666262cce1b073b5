use std::path::Path;

use crate::dataset::domain::file_copier::{CopyOutcome, FileCopier};
use crate::shared::organize_error::OrganizeError;

/// Copier for `--dry-run`: reports what would be copied and writes nothing.
pub struct DryRunCopier;

impl DryRunCopier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DryRunCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCopier for DryRunCopier {
    fn copy(&self, src: &Path, dst: &Path) -> Result<CopyOutcome, OrganizeError> {
        log::debug!("Would copy {} -> {}", src.display(), dst.display());
        Ok(CopyOutcome::Simulated)
    }
}
