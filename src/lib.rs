//! Wave function collapse solver for room-based grid layouts
//!
//! The system assigns one room tile to every cell of a rectangular grid so
//! that adjacent tiles' facing edges are mutually compatible. Generation is
//! expressed as a resumable, single-step-at-a-time process a host can pause,
//! step, and visualize between steps.

#![forbid(unsafe_code)]

/// Core solver implementation including candidate tracking, stepping, and execution control
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Spatial grid state and the room tile catalog
pub mod spatial;

pub use io::error::{LayoutError, Result};
