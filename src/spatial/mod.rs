//! Spatial data structures for layout generation
//!
//! This module contains spatial-related functionality including:
//! - Per-cell solver state for the layout grid
//! - Room tile definitions and the edge-compatibility catalog

/// Grid state management
pub mod grid;
/// Room tile definitions and the compatibility catalog
pub mod tiles;

pub use grid::Grid;
