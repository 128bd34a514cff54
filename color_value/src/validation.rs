// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range checks that guard every way of building a [`Color`].
//!
//! Inputs are taken as [`i64`] so that callers holding wider (or signed) integers get a
//! [`ColorError`] back instead of having to cast, and possibly wrap, before calling.
//!
//! [`Color`]: crate::Color

use strum_macros::{Display, EnumCount, EnumIter};
use tracing::debug;

use crate::{ColorError, ColorResult, Rgb, constants::WHITE_VALUE};

/// Names the channel that failed validation in [`ColorError::ChannelOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// # Errors
///
/// Returns [`ColorError::ValueOutOfRange`] if `value` is not in `[0, 0xFFFFFF]`.
pub fn validate_value(value: i64) -> ColorResult<u32> {
    match u32::try_from(value) {
        Ok(it) if it <= WHITE_VALUE => Ok(it),
        _ => {
            debug!(value, "rejected packed color value");
            Err(ColorError::ValueOutOfRange { value })
        }
    }
}

/// # Errors
///
/// Returns [`ColorError::ChannelOutOfRange`] naming `channel` if `value` is not in
/// `[0, 255]`.
pub fn validate_channel(channel: Channel, value: i64) -> ColorResult<u8> {
    u8::try_from(value).map_err(|_| {
        debug!(%channel, value, "rejected channel value");
        ColorError::ChannelOutOfRange { channel, value }
    })
}

/// Checks red, then green, then blue. The first channel out of range is the one reported.
///
/// # Errors
///
/// Returns [`ColorError::ChannelOutOfRange`] for the first invalid channel.
pub fn validate_rgb(red: i64, green: i64, blue: i64) -> ColorResult<Rgb> {
    Ok((
        validate_channel(Channel::Red, red)?,
        validate_channel(Channel::Green, green)?,
        validate_channel(Channel::Blue, blue)?,
    ))
}
