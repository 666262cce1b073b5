use std::path::Path;

use crate::identity::domain::mapping_loader::MappingLoader;
use crate::identity::infrastructure::filename_inference_loader::FilenameInferenceLoader;
use crate::identity::infrastructure::mapping_file_loader::MappingFileLoader;
use crate::shared::organize_error::OrganizeError;

/// Chooses the mapping strategy for a run.
///
/// An `id_file` that exists selects [`MappingFileLoader`]. A missing or
/// absent `id_file` falls back to [`FilenameInferenceLoader`]. If the
/// existence probe itself fails (e.g. permission denied on a parent
/// directory) the error is returned instead of falling back.
pub fn create_mapping_loader(
    img_dir: &Path,
    id_file: Option<&Path>,
) -> Result<Box<dyn MappingLoader>, OrganizeError> {
    if let Some(path) = id_file {
        let exists = path
            .try_exists()
            .map_err(OrganizeError::filesystem("check mapping file", path))?;
        if exists {
            return Ok(Box::new(MappingFileLoader::new(path)));
        }
        log::info!(
            "Mapping file {} not found; inferring identities from filenames",
            path.display()
        );
    }
    Ok(Box::new(FilenameInferenceLoader::new(img_dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_id_file_infers_from_filenames() {
        let tmp = TempDir::new().unwrap();
        let loader = create_mapping_loader(tmp.path(), None).unwrap();
        assert!(loader.describe().starts_with("filenames in"));
    }

    #[test]
    fn test_missing_id_file_falls_back_to_inference() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("ids.txt");
        let loader = create_mapping_loader(tmp.path(), Some(&missing)).unwrap();
        assert!(loader.describe().starts_with("filenames in"));
    }

    #[test]
    fn test_existing_id_file_takes_precedence() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a_1.jpg"), b"img").unwrap();
        let ids = tmp.path().join("ids.txt");
        fs::write(&ids, "a_1.jpg person9\n").unwrap();

        let loader = create_mapping_loader(tmp.path(), Some(&ids)).unwrap();
        let mapping = loader.load().unwrap();

        assert!(loader.describe().starts_with("mapping file"));
        assert_eq!(mapping.get("a_1.jpg"), Some("person9"));
    }

    #[cfg(unix)]
    #[test]
    fn test_uncheckable_id_file_is_error_not_fallback() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        let ids = locked.join("ids.txt");
        fs::write(&ids, "a_1.jpg person9\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let privileged = fs::read_dir(&locked).is_ok();

        let result = create_mapping_loader(tmp.path(), Some(&ids));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Root bypasses permission bits; nothing to check there.
        if privileged {
            return;
        }
        let err = result.err().unwrap();
        assert!(matches!(err, OrganizeError::Filesystem { .. }));
        assert_eq!(err.path(), Some(ids.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_id_file_fails_on_load() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let ids = tmp.path().join("ids.txt");
        fs::write(&ids, "a_1.jpg person9\n").unwrap();
        fs::set_permissions(&ids, fs::Permissions::from_mode(0o000)).unwrap();
        let privileged = fs::read_to_string(&ids).is_ok();

        let loader = create_mapping_loader(tmp.path(), Some(&ids)).unwrap();
        let result = loader.load();
        fs::set_permissions(&ids, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(loader.describe().starts_with("mapping file"));
        if privileged {
            return;
        }
        assert!(matches!(result, Err(OrganizeError::Filesystem { .. })));
    }
}
