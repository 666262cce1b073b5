pub mod organize_config;
pub mod organize_dataset_use_case;
pub mod pipeline_logger;
