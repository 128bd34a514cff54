// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit layout and bounds of a packed `0xRRGGBB` color value.

/// Packed value of black, and the smallest valid packed value.
pub const BLACK_VALUE: u32 = 0x00_00_00;

/// Packed value of white, and the largest valid packed value.
pub const WHITE_VALUE: u32 = 0xFF_FF_FF;

/// Largest value a single channel can hold.
pub const CHANNEL_MAX: u8 = 0xFF;

/// Width of one channel in bits.
pub const CHANNEL_BITS: u32 = 8;

pub const RED_SHIFT: u32 = CHANNEL_BITS * 2;
pub const GREEN_SHIFT: u32 = CHANNEL_BITS;
pub const BLUE_SHIFT: u32 = 0;

/// Number of hex digits needed to spell out [`WHITE_VALUE`].
pub const HEX_DIGIT_COUNT: usize = 6;
