pub mod identity_groups;
pub mod identity_mapping;
pub mod identity_resolver;
pub mod mapping_loader;
