/// Command-line argument parsing and batch generation
pub mod cli;
/// Defaults and validated generation configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG encoding and saving
pub mod image;
/// Batch progress display
pub mod progress;
