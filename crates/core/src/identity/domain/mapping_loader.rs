use crate::identity::domain::identity_mapping::IdentityMapping;
use crate::shared::organize_error::OrganizeError;

/// Produces the filename → identity mapping for a run.
///
/// Implementations are chosen once at startup; the rest of the pipeline
/// never branches on where the mapping came from.
pub trait MappingLoader {
    fn load(&self) -> Result<IdentityMapping, OrganizeError>;

    /// Short human-readable description of the mapping source.
    fn describe(&self) -> String;
}
