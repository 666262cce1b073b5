use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::shared::constants::DEFAULT_MIN_PER_ID;
use crate::shared::organize_error::OrganizeError;

/// Everything a single organize run needs, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeConfig {
    pub img_dir: PathBuf,
    pub id_file: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub min_per_id: usize,
    pub dry_run: bool,
}

impl OrganizeConfig {
    pub fn new(img_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            img_dir: img_dir.into(),
            id_file: None,
            out_dir: out_dir.into(),
            min_per_id: DEFAULT_MIN_PER_ID,
            dry_run: false,
        }
    }

    pub fn with_id_file(mut self, id_file: impl Into<PathBuf>) -> Self {
        self.id_file = Some(id_file.into());
        self
    }

    pub fn with_min_per_id(mut self, min_per_id: usize) -> Self {
        self.min_per_id = min_per_id;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn id_file(&self) -> Option<&Path> {
        self.id_file.as_deref()
    }

    /// Checks the inputs before anything is written.
    pub fn validate(&self) -> Result<(), OrganizeError> {
        if self.img_dir.as_os_str().is_empty() {
            return Err(OrganizeError::Configuration(
                "--img-dir must not be empty".into(),
            ));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(OrganizeError::Configuration(
                "--out-dir must not be empty".into(),
            ));
        }
        let metadata = fs::metadata(&self.img_dir)
            .map_err(OrganizeError::filesystem("access source directory", &self.img_dir))?;
        if !metadata.is_dir() {
            return Err(OrganizeError::filesystem("access source directory", &self.img_dir)(
                io::Error::other("not a directory"),
            ));
        }
        // Metadata succeeds on a mode-000 directory; listing does not.
        fs::read_dir(&self.img_dir)
            .map_err(OrganizeError::filesystem("read source directory", &self.img_dir))?;
        Ok(())
    }
}
