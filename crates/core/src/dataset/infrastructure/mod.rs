pub mod csv_manifest_writer;
pub mod dry_run_copier;
pub mod metadata_preserving_copier;
