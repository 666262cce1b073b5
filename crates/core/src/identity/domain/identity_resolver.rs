use crate::shared::constants::{IDENTITY_SEPARATOR, IMAGE_EXTENSIONS};

/// Derives an identity label from an image filename.
///
/// The label is everything before the first `_`. A name without an
/// underscore is its own label, extension included (`noUnderscore.png`).
pub fn infer_identity(filename: &str) -> &str {
    filename
        .split_once(IDENTITY_SEPARATOR)
        .map_or(filename, |(prefix, _)| prefix)
}

/// Case-insensitive check for one of the accepted image extensions.
pub fn has_image_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}
