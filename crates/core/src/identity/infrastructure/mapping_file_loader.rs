use std::fs;
use std::path::{Path, PathBuf};

use crate::identity::domain::identity_mapping::IdentityMapping;
use crate::identity::domain::mapping_loader::MappingLoader;
use crate::shared::organize_error::OrganizeError;

/// Reads an explicit `<filename> <identity> [extra...]` mapping file.
///
/// Lines with fewer than two whitespace-separated tokens are skipped, extra
/// tokens are ignored, and a repeated filename takes the last identity given.
pub struct MappingFileLoader {
    path: PathBuf,
}

impl MappingFileLoader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl MappingLoader for MappingFileLoader {
    fn load(&self) -> Result<IdentityMapping, OrganizeError> {
        let text = fs::read_to_string(&self.path)
            .map_err(OrganizeError::filesystem("read mapping file", &self.path))?;
        Ok(parse_mapping(&text))
    }

    fn describe(&self) -> String {
        format!("mapping file {}", self.path.display())
    }
}

/// Parses mapping-file text into an ordered mapping.
pub fn parse_mapping(text: &str) -> IdentityMapping {
    let mut mapping = IdentityMapping::new();
    let mut skipped = 0usize;
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(filename), Some(identity)) => mapping.insert(filename, identity),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("Skipped {skipped} blank or malformed mapping lines");
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_two_token_lines() {
        let mapping = parse_mapping("img1.jpg person1\nimg2.jpg person2\n");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("img1.jpg"), Some("person1"));
        assert_eq!(mapping.get("img2.jpg"), Some("person2"));
    }

    #[test]
    fn test_parse_skips_blank_and_short_lines() {
        let mapping = parse_mapping("\nlonely.jpg\n   \nimg1.jpg person1\n");
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("img1.jpg"), Some("person1"));
        assert!(mapping.get("lonely.jpg").is_none());
    }

    #[test]
    fn test_parse_ignores_extra_tokens_and_mixed_whitespace() {
        let mapping = parse_mapping("  img1.jpg\tperson1   0.98 extra\r\n");
        assert_eq!(mapping.get("img1.jpg"), Some("person1"));
    }

    #[test]
    fn test_parse_last_write_wins() {
        let mapping = parse_mapping("a.jpg first\nb.jpg other\na.jpg second\n");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("a.jpg"), Some("second"));
        assert_eq!(mapping.iter().next(), Some(("a.jpg", "second")));
    }

    #[test]
    fn test_load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ids.txt");
        fs::write(&path, "img1.jpg person1\nimg3.jpg person2\n").unwrap();

        let mapping = MappingFileLoader::new(&path).load().unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("img3.jpg"), Some("person2"));
    }

    #[test]
    fn test_load_unreadable_path_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a text file.
        let err = MappingFileLoader::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, OrganizeError::Filesystem { .. }));
        assert_eq!(err.path(), Some(tmp.path()));
    }

    #[test]
    fn test_describe_names_path() {
        let loader = MappingFileLoader::new(Path::new("/data/ids.txt"));
        assert!(loader.describe().contains("/data/ids.txt"));
    }
}
