//! Tests for HSL to RGB conversion

#[cfg(test)]
mod tests {
    use identicon::math::hsl::{hsl_to_rgb, hue_to_rgb};

    // Tests primary and secondary hues at full saturation
    // Verified by swapping the red and blue hue offsets
    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(0.5, 1.0, 0.5), [0, 255, 255]);
    }

    // Tests zero saturation produces grey
    // Verified by removing the achromatic branch
    #[test]
    fn test_hsl_to_rgb_grey() {
        assert_eq!(hsl_to_rgb(0.7, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(0.2, 0.0, 1.0), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(0.2, 0.0, 0.0), [0, 0, 0]);
    }

    // Tests light colors use the upper q formula
    // Verified by always using l * (1 + s)
    #[test]
    fn test_hsl_to_rgb_light() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.75), [255, 128, 128]);
    }

    // Tests each segment of the hue ramp
    // Verified by changing the 2/3 breakpoint
    #[test]
    fn test_hue_to_rgb_segments() {
        let (p, q) = (0.2, 0.8);
        assert!((hue_to_rgb(p, q, 0.0) - p).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 1.0 / 12.0) - 0.5).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 0.3) - q).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 7.0 / 12.0) - 0.5).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 0.9) - p).abs() < 1e-12);
        // Wrapped from below and above
        assert!((hue_to_rgb(p, q, -0.7) - q).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 1.3) - q).abs() < 1e-12);
    }
}
