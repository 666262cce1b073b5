pub mod dataset;
pub mod identity;
pub mod pipeline;
pub mod shared;
