pub mod file_copier;
pub mod manifest_writer;
