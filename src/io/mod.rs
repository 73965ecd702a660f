//! Input/output operations: CLI, catalog files, exports, and errors

/// Tile catalog file loading and parsing
pub mod catalog;
/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for layout generation operations
pub mod error;
/// PNG export of finished layouts
pub mod image;
/// Generation progress reporting
pub mod progress;
/// GIF capture of the generation sequence
pub mod visualization;
