use std::fs;
use std::path::{Path, PathBuf};

use crate::identity::domain::identity_mapping::IdentityMapping;
use crate::identity::domain::identity_resolver::{has_image_extension, infer_identity};
use crate::identity::domain::mapping_loader::MappingLoader;
use crate::shared::organize_error::OrganizeError;

/// Builds the mapping by listing the source directory and inferring each
/// image's identity from its filename.
///
/// Entries are visited in sorted name order so repeated runs see the same
/// identity order. Only regular files with an image extension are mapped.
pub struct FilenameInferenceLoader {
    source_dir: PathBuf,
}

impl FilenameInferenceLoader {
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
        }
    }

    fn list_image_names(&self) -> Result<Vec<String>, OrganizeError> {
        let entries = fs::read_dir(&self.source_dir)
            .map_err(OrganizeError::filesystem("list source directory", &self.source_dir))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(OrganizeError::filesystem("list source directory", &self.source_dir))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                log::warn!(
                    "Skipping non UTF-8 filename in {}",
                    self.source_dir.display()
                );
                continue;
            };
            if !has_image_extension(&name) || !entry.path().is_file() {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

impl MappingLoader for FilenameInferenceLoader {
    fn load(&self) -> Result<IdentityMapping, OrganizeError> {
        let names = self.list_image_names()?;
        Ok(names
            .iter()
            .map(|name| (name.as_str(), infer_identity(name)))
            .collect())
    }

    fn describe(&self) -> String {
        format!("filenames in {}", self.source_dir.display())
    }
}
