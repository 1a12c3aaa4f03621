/// Convert an HSL triple to 8-bit RGB channels
///
/// All components are fractions in `[0, 1]`. Each channel is scaled to
/// `0..=255` and rounded to the nearest integer. Zero saturation yields a
/// grey of the given lightness.
///
/// Products and sums round separately and are never fused into `mul_add`.
#[allow(clippy::suboptimal_flops)]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    if saturation <= 0.0 {
        let grey = to_channel(lightness);
        return [grey, grey, grey];
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    [
        to_channel(hue_to_rgb(p, q, hue + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, hue)),
        to_channel(hue_to_rgb(p, q, hue - 1.0 / 3.0)),
    ]
}

/// Piecewise-linear hue ramp shared by the three channels
#[allow(clippy::suboptimal_flops)]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
