use std::path::Path;

use crate::shared::organize_error::OrganizeError;

/// What happened to a single image during the copy stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Destination already existed; left untouched.
    SkippedExisting,
    /// Dry run: nothing was written.
    Simulated,
}

/// Places one source image at its destination path.
///
/// Callers handle the skip-if-exists rule; implementations may assume the
/// destination does not exist yet.
pub trait FileCopier {
    fn copy(&self, src: &Path, dst: &Path) -> Result<CopyOutcome, OrganizeError>;
}
