pub mod filename_inference_loader;
pub mod loader_factory;
pub mod mapping_file_loader;
