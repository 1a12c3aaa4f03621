//! Tests for the generation pipeline and its reuse across inputs

#[cfg(test)]
mod tests {
    use identicon::algorithm::fingerprint::Fingerprint;
    use identicon::color::{ColorStrategy, HslStrategy, WHITE};
    use identicon::{Config, ConfigOption, Identicon, IdenticonError};
    use image::Rgba;
    use std::sync::Arc;

    // Tests the pattern carries the derived fingerprint and color
    // Verified by deriving the color from a zero fingerprint
    #[test]
    fn test_pattern_components() {
        let generator = Identicon::default();
        let pattern = generator.pattern("identicon").unwrap();
        let fingerprint = Fingerprint::derive(b"identicon").unwrap();

        assert_eq!(pattern.fingerprint, fingerprint);
        assert_eq!(pattern.foreground, HslStrategy.derive_color(&fingerprint));
        assert_eq!(pattern.foreground, Rgba([64, 54, 202, 255]));
        assert_eq!(pattern.cells.count(), 8);
    }

    // Tests empty input fails without poisoning the generator
    // Verified by caching the failed result
    #[test]
    fn test_empty_input_is_per_call() {
        let generator = Identicon::default();
        assert!(matches!(
            generator.generate(""),
            Err(IdenticonError::InvalidInput)
        ));
        assert!(generator.generate("after-error").is_ok());
    }

    // Tests generation uses the configured strategy
    // Verified by hardcoding the default strategy in the pipeline
    #[test]
    fn test_custom_strategy_is_used() {
        let red = Rgba([200, 0, 0, 255]);
        let strategy: Arc<dyn ColorStrategy> = Arc::new(move |_: &Fingerprint| red);
        let generator =
            Identicon::with_options([ConfigOption::ColorStrategy(Some(strategy))]).unwrap();

        assert_eq!(generator.pattern("abc").unwrap().foreground, red);
    }

    // Tests invalid options surface from the generator constructor
    // Verified by ignoring option errors
    #[test]
    fn test_with_options_fails_fast() {
        let result = Identicon::with_options([
            ConfigOption::Size(64),
            ConfigOption::GridSize(6),
            ConfigOption::Padding(2.0),
        ]);
        assert!(matches!(
            result,
            Err(IdenticonError::InvalidGridSize { value: 6 })
        ));
    }

    // Tests the rendered image matches the configured size and background
    // Verified by swapping width and size
    #[test]
    fn test_generate_dimensions() {
        let config = Config::builder().size(99).grid_size(3).build().unwrap();
        let generator = Identicon::new(config);
        let img = generator.generate("abc").unwrap();

        assert_eq!(img.dimensions(), (99, 99));
        assert_eq!(generator.config().size(), 99);
        // Top-left corner lies inside the cell padding
        assert_eq!(*img.get_pixel(0, 0), WHITE);
    }

    // Tests one generator can be shared across threads
    // Verified by storing a non-Sync strategy
    #[test]
    fn test_generator_is_shareable() {
        let generator = Arc::new(Identicon::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || generator.generate(&format!("user{i}")))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
