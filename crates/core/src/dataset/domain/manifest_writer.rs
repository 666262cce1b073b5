use std::path::{Path, PathBuf};

use crate::identity::domain::identity_groups::IdentityGroups;
use crate::shared::organize_error::OrganizeError;

/// Persists the per-identity summary of a run into the output root.
pub trait ManifestWriter {
    /// Writes (replacing any previous manifest) and returns the file path.
    fn write(&self, out_dir: &Path, selected: &IdentityGroups) -> Result<PathBuf, OrganizeError>;
}
