pub mod constants;
pub mod organize_error;
