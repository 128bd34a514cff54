// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while constructing a [`Color`]. See [`ColorError`] for details.
//!
//! [`Color`]: crate::Color

use crate::Channel;

pub type ColorResult<T> = Result<T, ColorError>;

/// The two failure modes of [`Color`] construction.
///
/// [`Color`]: crate::Color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorErrorKind {
    /// A number (the whole packed value, or a single channel) is outside its inclusive
    /// range.
    Range,
    /// Text could not be read as a hex integer.
    Parse,
}

/// Errors from the validated constructors of [`Color`].
///
/// | Variant                   | Kind  | Cause                                               |
/// | :------------------------ | :---- | :-------------------------------------------------- |
/// | [`ValueOutOfRange`]       | Range | Packed value outside `[0x000000, 0xFFFFFF]`         |
/// | [`HexValueOutOfRange`]    | Range | Hex text well formed, but wider than 24 bits        |
/// | [`ChannelOutOfRange`]     | Range | A red, green, blue or alpha outside `[0x00, 0xFF]`  |
/// | [`HsvComponentNotFinite`] | Range | NaN or infinity in (or produced from) an HSV triple |
/// | [`InvalidHex`]            | Parse | Missing `#` / `0x` prefix, or a non hex digit       |
///
/// [`Color`]: crate::Color
/// [`ValueOutOfRange`]: Self::ValueOutOfRange
/// [`HexValueOutOfRange`]: Self::HexValueOutOfRange
/// [`ChannelOutOfRange`]: Self::ChannelOutOfRange
/// [`HsvComponentNotFinite`]: Self::HsvComponentNotFinite
/// [`InvalidHex`]: Self::InvalidHex
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    #[error("expected value in [0x000000, 0xFFFFFF] range, found {value}")]
    #[diagnostic(
        code(r3bl_color_value::value_out_of_range),
        help("A packed color holds 24 bits, so it must be between 0 and 16777215.")
    )]
    ValueOutOfRange { value: i64 },

    #[error("expected value in [0x000000, 0xFFFFFF] range, found {input:?}")]
    #[diagnostic(
        code(r3bl_color_value::hex_value_out_of_range),
        help("Use at most 6 significant hex digits, eg: `#RRGGBB` or `0xRRGGBB`.")
    )]
    HexValueOutOfRange { input: String },

    #[error("expected {channel} channel value in [0x00, 0xFF] range, found {value}")]
    #[diagnostic(
        code(r3bl_color_value::channel_out_of_range),
        help("Each channel is a single byte, so it must be between 0 and 255.")
    )]
    ChannelOutOfRange { channel: Channel, value: i64 },

    #[error("expected a finite HSV {component}")]
    #[diagnostic(code(r3bl_color_value::hsv_component_not_finite))]
    HsvComponentNotFinite { component: &'static str },

    #[error("could not parse {input:?} as a hex color")]
    #[diagnostic(
        code(r3bl_color_value::invalid_hex),
        help("Expected `#` or `0x` followed by hex digits, eg: `#2F14DF` or `0x2F14DF`.")
    )]
    InvalidHex { input: String },
}

impl ColorError {
    #[must_use]
    pub fn kind(&self) -> ColorErrorKind {
        match self {
            ColorError::ValueOutOfRange { .. }
            | ColorError::HexValueOutOfRange { .. }
            | ColorError::ChannelOutOfRange { .. }
            | ColorError::HsvComponentNotFinite { .. } => ColorErrorKind::Range,
            ColorError::InvalidHex { .. } => ColorErrorKind::Parse,
        }
    }

    #[must_use]
    pub fn is_range(&self) -> bool { self.kind() == ColorErrorKind::Range }

    #[must_use]
    pub fn is_parse(&self) -> bool { self.kind() == ColorErrorKind::Parse }
}
