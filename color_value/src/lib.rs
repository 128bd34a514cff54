// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_value
//!
//! A small immutable [`Color`] value that stores a 24-bit RGB color as one packed
//! `0xRRGGBB` integer. Every way of building one is validated, and every conversion goes
//! through the packed integer:
//!
//! | From                                  | To                                       |
//! | :------------------------------------ | :--------------------------------------- |
//! | [`Color::try_from_value`]             | [`Color::value`]                         |
//! | [`Color::try_from_rgb`]               | [`Color::to_rgb`]                        |
//! | [`Color::try_from_rgba`]              | [`Color::to_rgba`]                       |
//! | [`Color::try_from_hex`]               | [`Color::to_hex`], [`Color::to_hex_value`] |
//! | [`Color::try_from_hsv`]               | [`Color::to_hsv`]                        |
//! |                                       | [`Color::ansi_escape`], [`Color::paint`] |
//!
//! Failures are a [`ColorError`], whose [`ColorError::kind`] is either a range error (a
//! number outside its inclusive range) or a parse error (text that isn't hex).
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_color_value::{Color, ColorErrorKind};
//!
//! let black = Color::black();
//! assert_eq!(black.to_hex(), "#000000");
//! assert_eq!(black.paint(Some("string")), "\x1b[38;2;0;0;0mstring\x1b[0m");
//!
//! let cyan = Color::try_from_hsv(0.5, 1.0, 1.0).unwrap();
//! assert_eq!(cyan.to_rgba_opaque(), (0, 255, 255, 255));
//! assert_eq!(Color::try_from_hex("0x00FFFF"), Ok(cyan));
//!
//! let error = Color::try_from_value(0x1_00_00_00).unwrap_err();
//! assert_eq!(error.kind(), ColorErrorKind::Range);
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV>

// Enable clippy lint for unwrap_in_result only in non-test code.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod ansi_escape_codes;
mod color;
mod error;
mod hex_codec;
mod hsv_codec;
mod packing;
mod painted_text;
mod validation;

pub mod constants;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use error::*;
pub use hex_codec::*;
pub use hsv_codec::*;
pub use packing::*;
pub use painted_text::*;
pub use validation::*;
