//! Grid cells and their rasterization
//!
//! This module contains spatial-related functionality including:
//! - The filled-cell set addressed by `(column, row)`
//! - Cell geometry and pixel painting

/// Bitset of filled grid cells
pub mod cells;
/// Cell geometry and pixel buffer painting
pub mod raster;

pub use cells::CellSet;
pub use raster::{CellGeometry, rasterize};
