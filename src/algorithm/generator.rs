//! Identicon generation pipeline
//!
//! Each call hashes the input, derives the foreground color, lays out the
//! symmetric cell pattern and paints it. Calls share nothing but the
//! read-only configuration, so one generator can serve many threads.

use crate::algorithm::fingerprint::Fingerprint;
use crate::algorithm::layout::layout;
use crate::color::Color;
use crate::io::configuration::{Config, ConfigOption};
use crate::io::error::Result;
use crate::spatial::cells::CellSet;
use crate::spatial::raster::rasterize;
use image::RgbaImage;

/// Everything derived from one input before rasterization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Digest of the input
    pub fingerprint: Fingerprint,
    /// Color used for filled cells
    pub foreground: Color,
    /// Cells painted with the foreground
    pub cells: CellSet,
}

impl Pattern {
    /// Paint this pattern with the geometry and background of `config`
    pub fn render(&self, config: &Config) -> RgbaImage {
        rasterize(
            config.size(),
            config.padding(),
            config.background(),
            &self.cells,
            self.foreground,
        )
    }
}

/// Identicon generator bound to one validated configuration
#[derive(Clone, Debug, Default)]
pub struct Identicon {
    config: Config,
}

impl Identicon {
    /// Create a generator for a configuration
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a generator from the defaults and an ordered list of options
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails validation
    pub fn with_options(options: impl IntoIterator<Item = ConfigOption>) -> Result<Self> {
        Config::from_options(options).map(Self::new)
    }

    /// Configuration used for every generated image
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Derive fingerprint, foreground color and filled cells for an input
    ///
    /// # Errors
    ///
    /// Returns [`crate::IdenticonError::InvalidInput`] if `input` is empty
    pub fn pattern(&self, input: &str) -> Result<Pattern> {
        let fingerprint = Fingerprint::derive(input.as_bytes())?;
        let foreground = self.config.color_strategy().derive_color(&fingerprint);
        let cells = layout(
            &fingerprint,
            self.config.grid_size(),
            self.config.min_points(),
        );

        Ok(Pattern {
            fingerprint,
            foreground,
            cells,
        })
    }

    /// Generate the identicon image for an input
    ///
    /// # Errors
    ///
    /// Returns [`crate::IdenticonError::InvalidInput`] if `input` is empty
    pub fn generate(&self, input: &str) -> Result<RgbaImage> {
        Ok(self.pattern(input)?.render(&self.config))
    }
}
