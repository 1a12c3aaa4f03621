//! Foreground color strategies
//!
//! A strategy maps a fingerprint to one opaque color. The default derives hue,
//! saturation and lightness from the first three fingerprint bytes, keeping
//! colors saturated and mid-bright so patterns stay legible on light
//! backgrounds.

use crate::algorithm::fingerprint::Fingerprint;
use crate::color::Color;
use crate::math::hsl::hsl_to_rgb;
use image::Rgba;

/// Lower bound of derived saturation
pub const MIN_SATURATION: f64 = 0.5;
/// Width of the derived saturation range
pub const SATURATION_RANGE: f64 = 0.5;
/// Lower bound of derived lightness
pub const MIN_LIGHTNESS: f64 = 0.4;
/// Width of the derived lightness range
pub const LIGHTNESS_RANGE: f64 = 0.4;

/// Capability deriving a foreground color from a fingerprint
///
/// Implementations must be total over all fingerprints. Any closure
/// `Fn(&Fingerprint) -> Color` that is `Send + Sync` is a strategy.
pub trait ColorStrategy: Send + Sync {
    /// Derive the foreground color for a fingerprint
    fn derive_color(&self, fingerprint: &Fingerprint) -> Color;
}

impl<F> ColorStrategy for F
where
    F: Fn(&Fingerprint) -> Color + Send + Sync,
{
    fn derive_color(&self, fingerprint: &Fingerprint) -> Color {
        self(fingerprint)
    }
}

/// Default HSL strategy
///
/// Byte 0 sets the hue, byte 1 the saturation in `[0.5, 1.0]` and byte 2 the
/// lightness in `[0.4, 0.8]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HslStrategy;

impl ColorStrategy for HslStrategy {
    #[allow(clippy::suboptimal_flops)]
    fn derive_color(&self, fingerprint: &Fingerprint) -> Color {
        let hue = unit(fingerprint.byte(0));
        let saturation = MIN_SATURATION + unit(fingerprint.byte(1)) * SATURATION_RANGE;
        let lightness = MIN_LIGHTNESS + unit(fingerprint.byte(2)) * LIGHTNESS_RANGE;

        let [r, g, b] = hsl_to_rgb(hue, saturation, lightness);
        Rgba([r, g, b, u8::MAX])
    }
}

/// Blends a fixed base color with the first three fingerprint bytes
///
/// Each RGB channel is the mean of the base channel and the matching
/// fingerprint byte, so every identicon stays close to the base hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlendStrategy {
    base: Color,
}

impl BlendStrategy {
    /// Create a strategy around a base color
    pub const fn new(base: Color) -> Self {
        Self { base }
    }

    /// Base color blended into every result
    pub const fn base(&self) -> Color {
        self.base
    }
}

impl ColorStrategy for BlendStrategy {
    fn derive_color(&self, fingerprint: &Fingerprint) -> Color {
        let Rgba([r, g, b, _]) = self.base;
        Rgba([
            blend(r, fingerprint.byte(0)),
            blend(g, fingerprint.byte(1)),
            blend(b, fingerprint.byte(2)),
            u8::MAX,
        ])
    }
}

fn unit(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

const fn blend(base: u8, byte: u8) -> u8 {
    ((base as u16 + byte as u16) / 2) as u8
}
