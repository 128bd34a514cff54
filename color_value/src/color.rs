// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter, Result},
          str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Channel,
            ColorError,
            ColorResult,
            Hsv,
            Rgb,
            Rgba,
            byte_to_float,
            constants::{BLACK_VALUE, BLUE_SHIFT, CHANNEL_MAX, GREEN_SHIFT, RED_SHIFT,
                        WHITE_VALUE},
            float_to_byte,
            format_hex_string,
            format_hex_value,
            hsv_to_rgb_floats,
            pack_rgb,
            parse_hex_value,
            rgb_floats_to_hsv,
            unpack_channel,
            validate_channel,
            validate_rgb,
            validate_value};

/// An immutable 24-bit RGB color, stored as one packed `0xRRGGBB` integer.
///
/// - The packed value is always in `[0x000000, 0xFFFFFF]`. The field is private, and every
///   constructor validates its input, so there is no way to build an out of range color.
/// - Equality, ordering and hashing all compare the packed value, so `Color` can be used
///   as a map key, and sorts the same way its [`value`](Self::value) does.
/// - It is [Copy], pass it around by value.
///
/// In [serde], a color is its `#RRGGBB` string, so it can be written in config files.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_color_value::Color;
///
/// let color = Color::try_from_hex("#2F14DF").unwrap();
/// assert_eq!(color.to_rgb(), (0x2F, 0x14, 0xDF));
/// assert_eq!(color.to_hex_value(), "0x2F14DF");
/// assert_eq!(color.paint(Some("hi")), "\x1b[38;2;47;20;223mhi\x1b[0m");
/// assert!(Color::try_from_rgb(256, 0, 0).unwrap_err().is_range());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    value: u32,
}

/// Constructors.
impl Color {
    #[must_use]
    pub const fn black() -> Self { Self { value: BLACK_VALUE } }

    #[must_use]
    pub const fn white() -> Self { Self { value: WHITE_VALUE } }

    /// # Errors
    ///
    /// Returns [`ColorError::ValueOutOfRange`] if `value` is not in `[0, 0xFFFFFF]`.
    pub fn try_from_value(value: i64) -> ColorResult<Self> {
        let value = validate_value(value)?;
        Ok(Self { value })
    }

    /// Channels are checked in order red, green, blue, and nothing is built unless all
    /// three are in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] naming the first channel out of range.
    pub fn try_from_rgb(red: i64, green: i64, blue: i64) -> ColorResult<Self> {
        let (red, green, blue) = validate_rgb(red, green, blue)?;
        Ok(Self::from_rgb_u8(red, green, blue))
    }

    /// Byte channels can't be out of range, so this can't fail.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            value: pack_rgb(red, green, blue),
        }
    }

    /// `Color` has no alpha channel. `alpha` is range checked like the other channels,
    /// and then dropped, so [`to_rgba`](Self::to_rgba) won't give it back.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ChannelOutOfRange`] naming the first channel (red, green,
    /// blue, then alpha) out of range.
    pub fn try_from_rgba(red: i64, green: i64, blue: i64, alpha: i64) -> ColorResult<Self> {
        let color = Self::try_from_rgb(red, green, blue)?;
        validate_channel(Channel::Alpha, alpha)?;
        Ok(color)
    }

    /// Accepts `#RRGGBB` or `0xRRGGBB`, see [`parse_hex_value`](crate::parse_hex_value)
    /// for the exact rules.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidHex`] if the text isn't a prefix followed by hex digits.
    /// - [`ColorError::HexValueOutOfRange`] if the digits don't fit in 24 bits.
    pub fn try_from_hex(text: &str) -> ColorResult<Self> {
        let value = parse_hex_value(text)?;
        Ok(Self { value })
    }

    /// Converts with the standard HSV to RGB formula, then scales each channel to a byte
    /// by truncating, eg: a channel of `0.5` becomes `127`. Components are meant to be in
    /// `[0, 1]`; hue wraps, while saturation or value outside that range usually produce
    /// a channel outside `[0, 255]`, which is then rejected.
    ///
    /// # Errors
    ///
    /// - [`ColorError::HsvComponentNotFinite`] if any input, or any converted channel, is
    ///   NaN or infinite.
    /// - [`ColorError::ChannelOutOfRange`] if a converted channel isn't a byte.
    pub fn try_from_hsv(hue: f64, saturation: f64, value: f64) -> ColorResult<Self> {
        ensure_finite("hue", hue)?;
        ensure_finite("saturation", saturation)?;
        ensure_finite("value", value)?;

        let (red, green, blue) = hsv_to_rgb_floats(hue, saturation, value);
        ensure_finite("red", red)?;
        ensure_finite("green", green)?;
        ensure_finite("blue", blue)?;

        Self::try_from_rgb(float_to_byte(red), float_to_byte(green), float_to_byte(blue))
    }
}

fn ensure_finite(component: &'static str, it: f64) -> ColorResult<()> {
    if it.is_finite() {
        Ok(())
    } else {
        tracing::debug!(component, it, "rejected non finite HSV component");
        Err(ColorError::HsvComponentNotFinite { component })
    }
}

/// Queries.
impl Color {
    /// The packed `0xRRGGBB` value.
    #[must_use]
    pub const fn value(self) -> u32 { self.value }

    #[must_use]
    pub const fn is_black(self) -> bool { self.value == BLACK_VALUE }

    #[must_use]
    pub const fn is_white(self) -> bool { self.value == WHITE_VALUE }

    #[must_use]
    pub const fn red(self) -> u8 { unpack_channel(self.value, RED_SHIFT) }

    #[must_use]
    pub const fn green(self) -> u8 { unpack_channel(self.value, GREEN_SHIFT) }

    #[must_use]
    pub const fn blue(self) -> u8 { unpack_channel(self.value, BLUE_SHIFT) }

    /// Same as [`red`](Self::red).
    #[must_use]
    pub const fn r(self) -> u8 { self.red() }

    /// Same as [`green`](Self::green).
    #[must_use]
    pub const fn g(self) -> u8 { self.green() }

    /// Same as [`blue`](Self::blue).
    #[must_use]
    pub const fn b(self) -> u8 { self.blue() }
}

/// Conversions out.
impl Color {
    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String { format_hex_string(self.value) }

    /// `0xRRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex_value(self) -> String { format_hex_value(self.value) }

    /// Returns `(red, green, blue)`, the same order as [`to_rgba`](Self::to_rgba).
    #[must_use]
    pub const fn to_rgb(self) -> Rgb { (self.red(), self.green(), self.blue()) }

    /// Returns `(red, green, blue, alpha)` with the given `alpha`.
    #[must_use]
    pub const fn to_rgba(self, alpha: u8) -> Rgba {
        (self.red(), self.green(), self.blue(), alpha)
    }

    /// Same as [`to_rgba`](Self::to_rgba) with a fully opaque alpha of `255`.
    #[must_use]
    pub const fn to_rgba_opaque(self) -> Rgba { self.to_rgba(CHANNEL_MAX) }

    /// Returns `(hue, saturation, value)`, each in `[0, 1]`.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let (red, green, blue) = self.to_rgb();
        rgb_floats_to_hsv(byte_to_float(red), byte_to_float(green), byte_to_float(blue))
    }

    /// Wraps `text` in a truecolor foreground escape sequence for this color, followed by
    /// a reset: `ESC[38;2;{r};{g};{b}m{text}ESC[0m`. If `text` is [None], this color's
    /// own [`to_hex`](Self::to_hex) is painted.
    ///
    /// Use [`painted`](Self::painted) to format without allocating a [String].
    #[must_use]
    pub fn ansi_escape(self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.painted(text).to_string(),
            None => self.painted(&self.to_hex()).to_string(),
        }
    }

    /// Same as [`ansi_escape`](Self::ansi_escape).
    #[must_use]
    pub fn paint(self, text: Option<&str>) -> String { self.ansi_escape(text) }
}

mod trait_impls {
    use super::{Color, ColorError, ColorResult, Debug, Display, FromStr, Formatter, Result,
                format_hex_string, format_hex_value};

    /// `#RRGGBB`.
    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", format_hex_string(self.value))
        }
    }

    impl Debug for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "Color({})", format_hex_value(self.value))
        }
    }

    impl FromStr for Color {
        type Err = ColorError;

        fn from_str(text: &str) -> ColorResult<Self> { Self::try_from_hex(text) }
    }

    impl TryFrom<&str> for Color {
        type Error = ColorError;

        fn try_from(text: &str) -> ColorResult<Self> { Self::try_from_hex(text) }
    }

    impl TryFrom<String> for Color {
        type Error = ColorError;

        fn try_from(text: String) -> ColorResult<Self> { Self::try_from_hex(&text) }
    }

    impl TryFrom<i64> for Color {
        type Error = ColorError;

        fn try_from(value: i64) -> ColorResult<Self> { Self::try_from_value(value) }
    }

    impl TryFrom<u32> for Color {
        type Error = ColorError;

        fn try_from(value: u32) -> ColorResult<Self> { Self::try_from_value(i64::from(value)) }
    }

    impl From<(u8, u8, u8)> for Color {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_rgb_u8(red, green, blue) }
    }

    impl From<Color> for u32 {
        fn from(color: Color) -> Self { color.value }
    }

    impl From<Color> for String {
        fn from(color: Color) -> Self { color.to_hex() }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const ESC_BLACK: &str = "\x1b[38;2;0;0;0m";
    const ESC_WHITE: &str = "\x1b[38;2;255;255;255m";
    const ESC_RESET: &str = "\x1b[0m";

    #[test]
    fn test_factories() {
        assert_eq!(Color::black(), Color::try_from_value(0x00_00_00).unwrap());
        assert_eq!(Color::white(), Color::try_from_value(0xFF_FF_FF).unwrap());
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn test_is_black_is_white() {
        assert!(Color::black().is_black());
        assert!(!Color::black().is_white());
        assert!(!Color::white().is_black());
        assert!(Color::white().is_white());
        assert!(!Color::from_rgb_u8(0, 0, 1).is_black());
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(0x2F_14_DF)]
    #[test_case(16_777_215)]
    fn test_try_from_value_ok(value: i64) {
        let color = Color::try_from_value(value).unwrap();
        assert_eq!(i64::from(color.value()), value);
    }

    #[test_case(-1)]
    #[test_case(16_777_216)]
    fn test_try_from_value_err(value: i64) {
        let error = Color::try_from_value(value).unwrap_err();
        assert_eq!(error, ColorError::ValueOutOfRange { value });
        assert!(error.is_range());
    }

    #[test]
    fn test_channels_and_aliases() {
        let color = Color::try_from_rgb(0x12, 0x34, 0x56).unwrap();
        assert_eq!(color.value(), 0x12_34_56);
        assert_eq!((color.red(), color.green(), color.blue()), (0x12, 0x34, 0x56));
        assert_eq!((color.r(), color.g(), color.b()), (0x12, 0x34, 0x56));
    }

    #[test_case(-1, 0, 0, Channel::Red, -1)]
    #[test_case(256, 0, 0, Channel::Red, 256)]
    #[test_case(0, -1, 0, Channel::Green, -1)]
    #[test_case(0, 256, 0, Channel::Green, 256)]
    #[test_case(0, 0, -1, Channel::Blue, -1)]
    #[test_case(0, 0, 256, Channel::Blue, 256)]
    fn test_try_from_rgb_err(red: i64, green: i64, blue: i64, channel: Channel, value: i64) {
        assert_eq!(
            Color::try_from_rgb(red, green, blue),
            Err(ColorError::ChannelOutOfRange { channel, value })
        );
    }

    #[test]
    fn test_try_from_rgba_drops_alpha() {
        assert_eq!(Color::try_from_rgba(0, 0, 0, 255), Ok(Color::black()));
        assert_eq!(Color::try_from_rgba(255, 255, 255, 255), Ok(Color::white()));
        let translucent = Color::try_from_rgba(10, 20, 30, 0).unwrap();
        assert_eq!(translucent, Color::from_rgb_u8(10, 20, 30));
        assert_eq!(translucent.to_rgba_opaque(), (10, 20, 30, 255));
    }

    #[test]
    fn test_try_from_rgba_checks_alpha() {
        assert_eq!(
            Color::try_from_rgba(0, 0, 0, 256),
            Err(ColorError::ChannelOutOfRange {
                channel: Channel::Alpha,
                value: 256
            })
        );
        // Color channels are reported before alpha.
        assert_eq!(
            Color::try_from_rgba(0, -1, 0, -1),
            Err(ColorError::ChannelOutOfRange {
                channel: Channel::Green,
                value: -1
            })
        );
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::try_from_hex("#000000"), Ok(Color::black()));
        assert_eq!(Color::try_from_hex("#FFFFFF"), Ok(Color::white()));
        assert_eq!(Color::try_from_hex("0x000000"), Ok(Color::black()));
        assert_eq!(Color::try_from_hex("0xFFFFFF"), Ok(Color::white()));
        assert_eq!(Color::black().to_hex(), "#000000");
        assert_eq!(Color::white().to_hex(), "#FFFFFF");
        assert_eq!(Color::black().to_hex_value(), "0x000000");
        assert_eq!(Color::white().to_hex_value(), "0xFFFFFF");
    }

    #[test]
    fn test_hex_errors() {
        assert!(Color::try_from_hex("#XYZ").unwrap_err().is_parse());
        assert!(Color::try_from_hex("#1000000").unwrap_err().is_range());
    }

    #[test]
    fn test_rgb_rgba() {
        assert_eq!(Color::try_from_rgb(0, 0, 0), Ok(Color::black()));
        assert_eq!(Color::try_from_rgb(255, 255, 255), Ok(Color::white()));
        assert_eq!(Color::black().to_rgb(), (0, 0, 0));
        assert_eq!(Color::white().to_rgb(), (255, 255, 255));
        assert_eq!(Color::black().to_rgba_opaque(), (0, 0, 0, 255));
        assert_eq!(Color::white().to_rgba_opaque(), (255, 255, 255, 255));
        assert_eq!(Color::white().to_rgba(128), (255, 255, 255, 128));
    }

    #[test]
    fn test_to_rgb_order_matches_to_rgba() {
        let color = Color::from_rgb_u8(1, 2, 3);
        let (red, green, blue) = color.to_rgb();
        let (red_a, green_a, blue_a, _) = color.to_rgba_opaque();
        assert_eq!((red, green, blue), (1, 2, 3));
        assert_eq!((red, green, blue), (red_a, green_a, blue_a));
    }

    #[test]
    fn test_hsv() {
        assert_eq!(Color::try_from_hsv(0.0, 0.0, 0.0), Ok(Color::black()));
        assert_eq!(Color::try_from_hsv(0.0, 0.0, 1.0), Ok(Color::white()));
        assert_eq!(Color::black().to_hsv(), (0.0, 0.0, 0.0));
        assert_eq!(Color::white().to_hsv(), (0.0, 0.0, 1.0));
    }

    #[test_case(0.0, 1.0, 1.0, (255, 0, 0); "red")]
    #[test_case(0.5, 1.0, 1.0, (0, 255, 255); "cyan")]
    #[test_case(0.0, 1.0, 0.5, (127, 0, 0); "half value truncates")]
    #[test_case(0.0, 0.0, 0.5, (127, 127, 127); "gray")]
    fn test_try_from_hsv(hue: f64, saturation: f64, value: f64, rgb: Rgb) {
        let color = Color::try_from_hsv(hue, saturation, value).unwrap();
        assert_eq!(color.to_rgb(), rgb);
    }

    #[test]
    fn test_try_from_hsv_out_of_range() {
        assert_eq!(
            Color::try_from_hsv(0.0, 0.0, 2.0),
            Err(ColorError::ChannelOutOfRange {
                channel: Channel::Red,
                value: 510
            })
        );
        assert!(Color::try_from_hsv(0.0, 0.0, -0.5).unwrap_err().is_range());
    }

    #[test_case(f64::NAN, 0.0, 0.0, "hue")]
    #[test_case(0.0, f64::INFINITY, 0.0, "saturation")]
    #[test_case(0.0, 0.0, f64::NEG_INFINITY, "value")]
    #[test_case(0.5, f64::MAX, f64::MAX, "red")]
    fn test_try_from_hsv_not_finite(
        hue: f64,
        saturation: f64,
        value: f64,
        component: &'static str,
    ) {
        assert_eq!(
            Color::try_from_hsv(hue, saturation, value),
            Err(ColorError::HsvComponentNotFinite { component })
        );
    }

    #[test]
    fn test_ansi_escape_and_paint() {
        let black = Color::black();
        let white = Color::white();
        assert_eq!(
            black.ansi_escape(None),
            format!("{ESC_BLACK}#000000{ESC_RESET}")
        );
        assert_eq!(
            white.ansi_escape(None),
            format!("{ESC_WHITE}#FFFFFF{ESC_RESET}")
        );
        assert_eq!(
            black.paint(Some("string")),
            format!("{ESC_BLACK}string{ESC_RESET}")
        );
        assert_eq!(black.paint(None), black.ansi_escape(None));
        assert_eq!(white.paint(Some("x")), white.ansi_escape(Some("x")));
    }

    #[test]
    fn test_ansi_escape_channel_order() {
        let color = Color::from_rgb_u8(1, 2, 3);
        assert_eq!(color.ansi_escape(Some("")), "\x1b[38;2;1;2;3m\x1b[0m");
    }

    #[test]
    fn test_ordering_follows_value() {
        let low = Color::from_rgb_u8(0, 0, 255);
        let high = Color::from_rgb_u8(0, 1, 0);
        assert!(low < high);
        assert!(Color::black() < low);
        assert!(high < Color::white());

        let sorted: BTreeSet<Color> = [Color::white(), high, Color::black(), low].into();
        let values: Vec<u32> = sorted.into_iter().map(Color::value).collect();
        assert_eq!(values, [0x00_00_00, 0x00_00_FF, 0x00_01_00, 0xFF_FF_FF]);
    }

    #[test]
    fn test_hashable() {
        let set: HashSet<Color> = [
            Color::black(),
            Color::try_from_hex("#000000").unwrap(),
            Color::white(),
        ]
        .into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_debug() {
        let color = Color::from_rgb_u8(0x2F, 0x14, 0xDF);
        assert_eq!(color.to_string(), "#2F14DF");
        assert_eq!(format!("{color:?}"), "Color(0x2F14DF)");
    }

    #[test]
    fn test_conversion_traits() {
        let color: Color = "0x2f14df".parse().unwrap();
        assert_eq!(color, Color::from((0x2F, 0x14, 0xDF)));
        assert_eq!(Color::try_from("#2F14DF"), Ok(color));
        assert_eq!(Color::try_from(String::from("#2F14DF")), Ok(color));
        assert_eq!(Color::try_from(0x2F_14_DF_u32), Ok(color));
        assert_eq!(Color::try_from(0x2F_14_DF_i64), Ok(color));
        assert!(Color::try_from(0x01_00_00_00_u32).is_err());
        assert_eq!(u32::from(color), 0x2F_14_DF);
        assert_eq!(String::from(color), "#2F14DF");
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::from_rgb_u8(0x2F, 0x14, 0xDF);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r##""#2F14DF""##);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result = serde_json::from_str::<Color>(r##""#GG0000""##);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("could not parse"), "{message}");
    }
}
