//! Mathematical utilities for color derivation

/// HSL to RGB conversion
pub mod hsl;
