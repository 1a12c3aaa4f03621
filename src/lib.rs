//! Deterministic identicon generation
//!
//! An input string is hashed into a 16-byte fingerprint. The fingerprint
//! picks a foreground color and drives a left/right mirror-symmetric pattern
//! of filled cells on a small odd-sized grid, which is then painted into a
//! square RGBA buffer. The same input and configuration always produce the
//! same image.
//!
//! ```no_run
//! use identicon::{Config, Identicon};
//!
//! # fn main() -> identicon::Result<()> {
//! let config = Config::builder().size(240).grid_size(7).build()?;
//! let img = Identicon::new(config).generate("user@example.com")?;
//! identicon::io::image::save_png(&img, std::path::Path::new("avatar.png"))?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Fingerprinting, cell layout and the generation pipeline
pub mod algorithm;
/// Foreground color strategies
pub mod color;
/// Configuration, errors, PNG output and the command-line front end
pub mod io;
/// HSL color math
pub mod math;
/// Cell sets and rasterization
pub mod spatial;

pub use algorithm::fingerprint::Fingerprint;
pub use algorithm::generator::{Identicon, Pattern};
pub use color::{BlendStrategy, Color, ColorStrategy, HslStrategy};
pub use io::configuration::{Config, ConfigBuilder, ConfigOption};
pub use io::error::{IdenticonError, Result};
