//! Math utilities and helpers.

/// Convert an HSL color to RGB components in `[0, 1]`.
///
/// `hue` is in degrees and wraps; `saturation` and `lightness` are in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let chroma = (1.0 - 2.0f32.mul_add(lightness, -1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Move `current` toward `target` by at most `step`, never overshooting.
///
/// Values already at or past the target are returned unchanged, so the
/// result is monotonic in the direction of `step`.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        current
    }
}

/// Sign of `v` with zero mapped to zero.
#[inline]
#[must_use]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
