// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

/// The subset of SGR (select graphic rendition) codes needed to paint text in a 24-bit
/// truecolor foreground.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    ForegroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::{Display, Formatter, Result, SgrCode};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// Channels are written in decimal without leading zeros.
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
