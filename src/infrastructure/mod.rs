pub mod config;
pub mod file_source;
pub mod image_preview;
pub mod logging;
pub mod tabular;
