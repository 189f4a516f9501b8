pub mod config;
pub mod error;

pub use config::PipelineConfig;
pub use error::{DataError, Result};
