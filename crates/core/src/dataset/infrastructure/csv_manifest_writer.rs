use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::domain::manifest_writer::ManifestWriter;
use crate::identity::domain::identity_groups::IdentityGroups;
use crate::shared::constants::{MANIFEST_FILENAME, MANIFEST_HEADER};
use crate::shared::organize_error::OrganizeError;

/// Writes `manifest.csv`: a fixed header then `{identity},{count}` per
/// selected identity, in selection order.
///
/// Identity labels are written verbatim, without CSV quoting.
pub struct CsvManifestWriter;

impl CsvManifestWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvManifestWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestWriter for CsvManifestWriter {
    fn write(&self, out_dir: &Path, selected: &IdentityGroups) -> Result<PathBuf, OrganizeError> {
        let path = out_dir.join(MANIFEST_FILENAME);
        fs::write(&path, render_manifest(selected))
            .map_err(OrganizeError::filesystem("write manifest", &path))?;
        Ok(path)
    }
}

pub fn render_manifest(selected: &IdentityGroups) -> String {
    let mut out = String::with_capacity(MANIFEST_HEADER.len() + 1 + selected.len() * 16);
    out.push_str(MANIFEST_HEADER);
    out.push('\n');
    for group in selected.iter() {
        out.push_str(&format!("{},{}\n", group.identity, group.count()));
    }
    out
}
