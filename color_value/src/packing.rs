// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::constants::{BLUE_SHIFT, CHANNEL_MAX, GREEN_SHIFT, RED_SHIFT};

/// `(red, green, blue)`.
pub type Rgb = (u8, u8, u8);

/// `(red, green, blue, alpha)`.
pub type Rgba = (u8, u8, u8, u8);

/// Packs three bytes into `0xRRGGBB`. Any three bytes give a valid packed value.
#[must_use]
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << RED_SHIFT) | ((green as u32) << GREEN_SHIFT) | ((blue as u32) << BLUE_SHIFT)
}

/// Extracts the byte at `shift` bits from the right.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn unpack_channel(value: u32, shift: u32) -> u8 {
    ((value >> shift) & CHANNEL_MAX as u32) as u8
}

#[must_use]
pub const fn unpack_rgb(value: u32) -> Rgb {
    (
        unpack_channel(value, RED_SHIFT),
        unpack_channel(value, GREEN_SHIFT),
        unpack_channel(value, BLUE_SHIFT),
    )
}
