use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::identity::domain::identity_mapping::IdentityMapping;
use crate::shared::organize_error::OrganizeError;

/// Filenames that share one identity label, in mapping order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityGroup {
    pub identity: String,
    pub files: Vec<String>,
}

impl IdentityGroup {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Identity label → files, iterated in the order each identity was first seen.
///
/// A group only exists once at least one file has been added to it, so no
/// group is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityGroups {
    groups: Vec<IdentityGroup>,
    index: HashMap<String, usize>,
}

impl IdentityGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups every mapped filename that exists as a file under `source_dir`.
    ///
    /// Mapped names with no file on disk (or naming a directory) are dropped
    /// silently. Any other failure to inspect a path, such as a permission
    /// error, is returned.
    pub fn from_mapping(
        mapping: &IdentityMapping,
        source_dir: &Path,
    ) -> Result<Self, OrganizeError> {
        let mut groups = Self::new();
        for (filename, identity) in mapping.iter() {
            let path = source_dir.join(filename);
            let is_file = match fs::metadata(&path) {
                Ok(metadata) => metadata.is_file(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => return Err(OrganizeError::filesystem("inspect source file", &path)(e)),
            };
            if !is_file {
                log::debug!("Skipping {filename}: not found in {}", source_dir.display());
                continue;
            }
            groups.push(identity, filename);
        }
        Ok(groups)
    }

    pub fn push(&mut self, identity: &str, filename: &str) {
        match self.index.get(identity) {
            Some(&pos) => self.groups[pos].files.push(filename.to_string()),
            None => {
                self.index.insert(identity.to_string(), self.groups.len());
                self.groups.push(IdentityGroup {
                    identity: identity.to_string(),
                    files: vec![filename.to_string()],
                });
            }
        }
    }

    /// Keeps the groups with at least `min_per_id` files (inclusive),
    /// preserving order.
    pub fn select(&self, min_per_id: usize) -> IdentityGroups {
        let mut selected = IdentityGroups::new();
        for group in self.groups.iter().filter(|g| g.count() >= min_per_id) {
            selected
                .index
                .insert(group.identity.clone(), selected.groups.len());
            selected.groups.push(group.clone());
        }
        selected
    }

    pub fn get(&self, identity: &str) -> Option<&IdentityGroup> {
        self.index.get(identity).map(|&pos| &self.groups[pos])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_files(&self) -> usize {
        self.groups.iter().map(IdentityGroup::count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentityGroup> {
        self.groups.iter()
    }
}
