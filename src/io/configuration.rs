//! Generation defaults and validated configuration
//!
//! A [`Config`] is assembled from the defaults plus an ordered list of
//! [`ConfigOption`]s. Options are applied to a draft one at a time and the
//! first invalid one aborts construction, so an invalid configuration is never
//! observable. Once built, a configuration is immutable and can be shared
//! between threads.

use crate::color::{Color, ColorStrategy, HslStrategy, WHITE};
use crate::io::error::{IdenticonError, Result};
use std::fmt;
use std::sync::Arc;

// Default values for configurable parameters
/// Default image width and height in pixels
pub const DEFAULT_SIZE: u32 = 420;
/// Default number of cells along each side of the grid
pub const DEFAULT_GRID_SIZE: usize = 5;
/// Default inset of each painted cell as a fraction of the cell size
pub const DEFAULT_PADDING: f64 = 0.1;
/// Default minimum number of filled cells
pub const DEFAULT_MIN_POINTS: usize = 4;
/// Default background color
pub const DEFAULT_BACKGROUND: Color = WHITE;

/// Exclusive upper bound of the padding fraction
pub const MAX_PADDING: f64 = 0.5;
/// Largest accepted number of cells per grid side
pub const MAX_GRID_SIZE: usize = 4095;

// Output settings
/// Default output path of the command-line tool
pub const DEFAULT_OUTPUT: &str = "identicon.png";

// Progress bar display settings
/// Threshold for switching to a single batch progress bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// A single named change applied to a configuration draft
///
/// Values arrive unvalidated; each option checks its own constraint when
/// applied.
#[derive(Clone)]
pub enum ConfigOption {
    /// Image width and height in pixels, must be positive
    Size(i64),
    /// Cells per grid side, must be positive, odd and at most [`MAX_GRID_SIZE`]
    GridSize(i64),
    /// Cell inset fraction, must lie in `[0, 0.5)`
    Padding(f64),
    /// Minimum filled cells, must not be negative
    MinPoints(i64),
    /// Background color, must be present
    Background(Option<Color>),
    /// Foreground color strategy, must be present
    ColorStrategy(Option<Arc<dyn ColorStrategy>>),
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(value) => f.debug_tuple("Size").field(value).finish(),
            Self::GridSize(value) => f.debug_tuple("GridSize").field(value).finish(),
            Self::Padding(value) => f.debug_tuple("Padding").field(value).finish(),
            Self::MinPoints(value) => f.debug_tuple("MinPoints").field(value).finish(),
            Self::Background(value) => f.debug_tuple("Background").field(value).finish(),
            Self::ColorStrategy(value) => f
                .debug_tuple("ColorStrategy")
                .field(&value.as_ref().map(|_| "<strategy>"))
                .finish(),
        }
    }
}

impl ConfigOption {
    /// Validate this option and write it into a draft
    ///
    /// # Errors
    ///
    /// Returns the error naming the violated constraint; the draft is left
    /// unchanged in that case
    fn apply(self, draft: &mut Config) -> Result<()> {
        match self {
            Self::Size(value) => {
                draft.size = u32::try_from(value)
                    .ok()
                    .filter(|&size| size > 0)
                    .ok_or(IdenticonError::InvalidSize { value })?;
            }
            Self::GridSize(value) => {
                draft.grid_size = usize::try_from(value)
                    .ok()
                    .filter(|&size| size % 2 == 1 && size <= MAX_GRID_SIZE)
                    .ok_or(IdenticonError::InvalidGridSize { value })?;
            }
            Self::Padding(value) => {
                if !(0.0..MAX_PADDING).contains(&value) {
                    return Err(IdenticonError::InvalidPadding { value });
                }
                draft.padding = value;
            }
            Self::MinPoints(value) => {
                draft.min_points = usize::try_from(value)
                    .ok()
                    .ok_or(IdenticonError::InvalidMinPoints { value })?;
            }
            Self::Background(value) => {
                draft.background = value.ok_or(IdenticonError::InvalidColor)?;
            }
            Self::ColorStrategy(value) => {
                draft.color_strategy = value.ok_or(IdenticonError::InvalidColorStrategy)?;
            }
        }
        Ok(())
    }
}

/// Validated, immutable generation parameters
#[derive(Clone)]
pub struct Config {
    size: u32,
    grid_size: usize,
    padding: f64,
    min_points: usize,
    background: Color,
    color_strategy: Arc<dyn ColorStrategy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            padding: DEFAULT_PADDING,
            min_points: DEFAULT_MIN_POINTS,
            background: DEFAULT_BACKGROUND,
            color_strategy: Arc::new(HslStrategy),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("size", &self.size)
            .field("grid_size", &self.grid_size)
            .field("padding", &self.padding)
            .field("min_points", &self.min_points)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Build a configuration from the defaults and an ordered list of options
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails validation
    pub fn from_options(options: impl IntoIterator<Item = ConfigOption>) -> Result<Self> {
        let mut draft = Self::default();
        for option in options {
            option.apply(&mut draft)?;
        }
        Ok(draft)
    }

    /// Start a chained builder from the defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Image width and height in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Cells per grid side (always odd)
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Cell inset as a fraction of the cell size
    pub const fn padding(&self) -> f64 {
        self.padding
    }

    /// Minimum number of filled cells (best effort)
    pub const fn min_points(&self) -> usize {
        self.min_points
    }

    /// Background color
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Foreground color strategy
    pub fn color_strategy(&self) -> &dyn ColorStrategy {
        self.color_strategy.as_ref()
    }
}

/// Records options and applies them in order on [`ConfigBuilder::build`]
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    options: Vec<ConfigOption>,
}

impl ConfigBuilder {
    /// Append an arbitrary option
    #[must_use]
    pub fn option(mut self, option: ConfigOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the image size in pixels
    #[must_use]
    pub fn size(self, size: i64) -> Self {
        self.option(ConfigOption::Size(size))
    }

    /// Set the number of cells per grid side
    #[must_use]
    pub fn grid_size(self, grid_size: i64) -> Self {
        self.option(ConfigOption::GridSize(grid_size))
    }

    /// Set the cell inset fraction
    #[must_use]
    pub fn padding(self, padding: f64) -> Self {
        self.option(ConfigOption::Padding(padding))
    }

    /// Set the minimum number of filled cells
    #[must_use]
    pub fn min_points(self, min_points: i64) -> Self {
        self.option(ConfigOption::MinPoints(min_points))
    }

    /// Set the background color
    #[must_use]
    pub fn background(self, background: Color) -> Self {
        self.option(ConfigOption::Background(Some(background)))
    }

    /// Set the foreground color strategy
    #[must_use]
    pub fn color_strategy(self, strategy: impl ColorStrategy + 'static) -> Self {
        let strategy: Arc<dyn ColorStrategy> = Arc::new(strategy);
        self.option(ConfigOption::ColorStrategy(Some(strategy)))
    }

    /// Apply the recorded options in order
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails validation
    pub fn build(self) -> Result<Config> {
        Config::from_options(self.options)
    }
}
