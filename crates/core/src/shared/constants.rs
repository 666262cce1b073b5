/// File extensions (lowercase, without the dot) considered images in inferred mode.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const MANIFEST_FILENAME: &str = "manifest.csv";
pub const MANIFEST_HEADER: &str = "identity,num_images";

/// Inclusive minimum number of images an identity needs to be selected.
pub const DEFAULT_MIN_PER_ID: usize = 5;

/// Separator between the identity prefix and the rest of an image filename.
pub const IDENTITY_SEPARATOR: char = '_';
