//! Command-line interface for generating identicon PNG files

use crate::algorithm::generator::Identicon;
use crate::color::{BlendStrategy, Color};
use crate::io::configuration::{
    Config, DEFAULT_GRID_SIZE, DEFAULT_MIN_POINTS, DEFAULT_OUTPUT, DEFAULT_PADDING, DEFAULT_SIZE,
};
use crate::io::error::{IdenticonError, Result};
use crate::io::image::save_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use image::Rgba;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Generate symmetric identicon avatars from strings"
)]
/// Command-line arguments for the identicon generator
pub struct Cli {
    /// Strings to generate identicons from (e.g. usernames or email addresses)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Output PNG path; numbered `<stem>_<n>` files are written for several inputs
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width and height in pixels
    #[arg(short, long, default_value_t = i64::from(DEFAULT_SIZE), allow_negative_numbers = true)]
    pub size: i64,

    /// Cells per grid side (must be odd)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE as i64, allow_negative_numbers = true)]
    pub grid: i64,

    /// Inset of each cell as a fraction of the cell size (0 to 0.5)
    #[arg(short, long, default_value_t = DEFAULT_PADDING, allow_negative_numbers = true)]
    pub padding: f64,

    /// Minimum number of filled cells
    #[arg(short, long, default_value_t = DEFAULT_MIN_POINTS as i64, allow_negative_numbers = true)]
    pub min_points: i64,

    /// Background color as RRGGBB or RRGGBBAA hex
    #[arg(short, long, value_parser = parse_hex_color)]
    pub background: Option<Color>,

    /// Blend foreground colors with this RRGGBB hex base instead of deriving them
    #[arg(long, value_parser = parse_hex_color)]
    pub base_color: Option<Color>,

    /// Print each cell pattern as text
    #[arg(short = 'P', long)]
    pub preview: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the geometry and color flags into a configuration
    ///
    /// # Errors
    ///
    /// Returns the first configuration error in flag order
    pub fn config(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .size(self.size)
            .grid_size(self.grid)
            .padding(self.padding)
            .min_points(self.min_points);

        if let Some(background) = self.background {
            builder = builder.background(background);
        }
        if let Some(base) = self.base_color {
            builder = builder.color_strategy(BlendStrategy::new(base));
        }

        builder.build()
    }

    /// Output path for the input at `index`
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.inputs.len() <= 1 {
            return self.output.clone();
        }

        let stem = self.output.file_stem().unwrap_or_default();
        let mut numbered = format!("{}_{}", stem.to_string_lossy(), index + 1);
        if let Some(extension) = self.output.extension() {
            numbered.push('.');
            numbered.push_str(&extension.to_string_lossy());
        }

        match self.output.parent() {
            Some(parent) => parent.join(numbered),
            None => PathBuf::from(numbered),
        }
    }
}

/// Parse a hex color in `RRGGBB` or `RRGGBBAA` form, with an optional `#`
///
/// # Errors
///
/// Returns a description of the problem if the string is not a valid hex color
pub fn parse_hex_color(value: &str) -> std::result::Result<Color, String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "'{value}' is not a hex color (expected RRGGBB or RRGGBBAA)"
        ));
    }

    let mut channels = [u8::MAX; 4];
    for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
        let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
        *channel = u8::from_str_radix(pair, 16).map_err(|e| e.to_string())?;
    }

    Ok(Rgba(channels))
}

/// Generates and saves one identicon per input with progress tracking
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested identicon
    ///
    /// Returns the written paths in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, an input is empty or
    /// a file cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let generator = Identicon::new(self.cli.config()?);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.inputs.len());
        }

        let mut written = Vec::with_capacity(self.cli.inputs.len());
        for index in 0..self.cli.inputs.len() {
            let output_path = self.cli.output_path(index);
            if let Err(error) = self.process_input(&generator, index, &output_path) {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_item(index);
                    pm.finish();
                }
                self.report_failure(index, &error);
                return Err(error);
            }
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        self.report(&written);
        Ok(written)
    }

    // Allow print for the requested text preview
    #[allow(clippy::print_stdout)]
    fn process_input(&mut self, generator: &Identicon, index: usize, output: &Path) -> Result<()> {
        let Some(input) = self.cli.inputs.get(index) else {
            return Ok(());
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_item(index, input, output);
        }

        let pattern = generator.pattern(input)?;
        if self.cli.preview {
            println!("{input} ({})\n{}", pattern.fingerprint, pattern.cells);
        }

        save_png(&pattern.render(generator.config()), output)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_item(index);
        }

        Ok(())
    }

    // Allow print for user feedback on the failing input
    #[allow(clippy::print_stderr)]
    fn report_failure(&self, index: usize, error: &IdenticonError) {
        if self.cli.quiet {
            return;
        }
        let input = self.cli.inputs.get(index).map_or("", String::as_str);
        eprintln!(
            "Failed on input {} of {} ({input:?}): {error}",
            index + 1,
            self.cli.inputs.len()
        );
    }

    // Allow print for user feedback on completion
    #[allow(clippy::print_stdout)]
    fn report(&self, written: &[PathBuf]) {
        if self.cli.quiet {
            return;
        }
        for path in written {
            println!("Generated identicon: {}", path.display());
        }
    }
}
