//! Color types and foreground derivation strategies

use image::Rgba;

/// Pluggable foreground color strategies
pub mod strategy;

pub use strategy::{BlendStrategy, ColorStrategy, HslStrategy};

/// Color of a single pixel
pub type Color = Rgba<u8>;

/// Opaque white
pub const WHITE: Color = Rgba([u8::MAX, u8::MAX, u8::MAX, u8::MAX]);
