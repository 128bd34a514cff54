// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! HSV (hue, saturation, value) to and from RGB, with every component a float in `[0, 1]`.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#From_HSV>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#From_RGB>
//!
//! Hue is a fraction of a full turn, not degrees: `0.5` is cyan.

use crate::constants::CHANNEL_MAX;

/// `(hue, saturation, value)`.
pub type Hsv = (f64, f64, f64);

/// Scales a `[0, 1]` float to a byte by truncating toward zero, so `0.5` is `127`, not
/// `128`. The result is not range checked, negative or oversized inputs give numbers
/// outside `[0, 255]`. Saturates at the [`i64`] bounds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn float_to_byte(value: f64) -> i64 { (value * f64::from(CHANNEL_MAX)).trunc() as i64 }

#[must_use]
pub fn byte_to_float(value: u8) -> f64 { f64::from(value) / f64::from(CHANNEL_MAX) }

/// Hue outside `[0, 1]` wraps around. Saturation and value are used as given.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn hsv_to_rgb_floats(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }

    let sector = (hue * 6.0).trunc();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

/// Grays (all channels equal) have hue and saturation `0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_floats_to_hsv(red: f64, green: f64, blue: f64) -> Hsv {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    if max == min {
        return (0.0, 0.0, max);
    }

    let range = max - min;
    let saturation = range / max;
    let red_distance = (max - red) / range;
    let green_distance = (max - green) / range;
    let blue_distance = (max - blue) / range;

    let hue = if red == max {
        blue_distance - green_distance
    } else if green == max {
        2.0 + red_distance - blue_distance
    } else {
        4.0 + green_distance - red_distance
    };

    ((hue / 6.0).rem_euclid(1.0), saturation, max)
}
