// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hex text forms of a packed color value.
//!
//! Two forms are produced, both with exactly 6 uppercase digits:
//! - `#RRGGBB`, eg: `#2F14DF`.
//! - `0xRRGGBB`, eg: `0x2F14DF`.
//!
//! Both forms are accepted on input, with case-insensitive digits and prefix. Any number
//! of digits is read as one base 16 integer, then range checked, so `#1000000` is a range
//! error rather than being truncated to `#000000`.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, tag_no_case, take_while1},
          combinator::all_consuming};
use tracing::debug;

use crate::{ColorError, ColorResult, constants::HEX_DIGIT_COUNT, validate_value};

pub const HEX_STRING_PREFIX: &str = "#";
pub const HEX_VALUE_PREFIX: &str = "0x";

/// Parse function that matches a `#` or `0x` prefix followed by one or more hex digits.
/// Returns the digits, without the prefix.
pub fn parse_hex_digits(input: &str) -> IResult<&str, &str> {
    let (input, _prefix) =
        alt((tag(HEX_STRING_PREFIX), tag_no_case(HEX_VALUE_PREFIX))).parse(input)?;
    take_while1(helper_fns::match_is_hex_digit).parse(input)
}

/// Reads a whole string as a packed color value.
///
/// # Errors
///
/// - [`ColorError::InvalidHex`] if `input` isn't a prefix followed only by hex digits.
/// - [`ColorError::HexValueOutOfRange`] if the digits spell a number above `0xFFFFFF`.
pub fn parse_hex_value(input: &str) -> ColorResult<u32> {
    let Ok((_, digits)) = all_consuming(parse_hex_digits).parse(input) else {
        debug!(input, "rejected malformed hex color");
        return Err(ColorError::InvalidHex {
            input: input.to_string(),
        });
    };

    // Leading zeros don't count toward the width of the value.
    let significant = digits.trim_start_matches('0');
    if significant.len() > HEX_DIGIT_COUNT {
        debug!(input, "rejected hex color wider than 24 bits");
        return Err(ColorError::HexValueOutOfRange {
            input: input.to_string(),
        });
    }

    let value = helper_fns::parse_str_to_hex_num(significant).map_err(|_| {
        ColorError::InvalidHex {
            input: input.to_string(),
        }
    })?;
    validate_value(i64::from(value))
}

#[must_use]
pub fn format_hex_string(value: u32) -> String { format!("{HEX_STRING_PREFIX}{value:06X}") }

#[must_use]
pub fn format_hex_value(value: u32) -> String { format!("{HEX_VALUE_PREFIX}{value:06X}") }

mod helper_fns {
    use std::num::ParseIntError;

    /// Used by [`take_while1`](nom::bytes::complete::take_while1), as long as this
    /// returns `true` characters are taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// An empty string is zero, since all of its digits were leading zeros.
    pub fn parse_str_to_hex_num(input: &str) -> Result<u32, ParseIntError> {
        if input.is_empty() {
            Ok(0)
        } else {
            u32::from_str_radix(input, 16)
        }
    }
}
