use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use crate::dataset::domain::file_copier::{CopyOutcome, FileCopier};
use crate::shared::organize_error::OrganizeError;

/// Copies file bytes, then carries over the source's access/modification
/// times and permissions.
///
/// The copy is written to a `.part` sibling and renamed into place, so a
/// failed copy never leaves a truncated file at the destination. Permissions
/// are applied last so that a read-only source does not block setting
/// timestamps.
pub struct MetadataPreservingCopier;

impl MetadataPreservingCopier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetadataPreservingCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCopier for MetadataPreservingCopier {
    fn copy(&self, src: &Path, dst: &Path) -> Result<CopyOutcome, OrganizeError> {
        // Filenames from a mapping file may contain subdirectories.
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .map_err(OrganizeError::filesystem("create directory", parent))?;
        }

        let temp_path = part_path(dst);
        let result = write_with_metadata(src, &temp_path).and_then(|()| {
            fs::rename(&temp_path, dst).map_err(OrganizeError::filesystem("move into place", dst))
        });
        if result.is_err() && temp_path.exists() {
            if let Err(e) = fs::remove_file(&temp_path) {
                log::warn!("Failed to remove {}: {e}", temp_path.display());
            }
        }
        result.map(|()| CopyOutcome::Copied)
    }
}

/// `a_1.jpg` -> `a_1.jpg.part`, next to the destination.
fn part_path(dst: &Path) -> PathBuf {
    let mut name = dst.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    dst.with_file_name(name)
}

fn write_with_metadata(src: &Path, dst: &Path) -> Result<(), OrganizeError> {
    let mut reader = File::open(src).map_err(OrganizeError::filesystem("open source file", src))?;
    let source_meta = reader
        .metadata()
        .map_err(OrganizeError::filesystem("read metadata of", src))?;

    let mut writer =
        File::create(dst).map_err(OrganizeError::filesystem("create destination file", dst))?;
    io::copy(&mut reader, &mut writer).map_err(OrganizeError::filesystem("copy", src))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = source_meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = source_meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer
        .set_times(times)
        .map_err(OrganizeError::filesystem("set timestamps on", dst))?;
    drop(writer);

    fs::set_permissions(dst, source_meta.permissions())
        .map_err(OrganizeError::filesystem("set permissions on", dst))
}
