// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result, Write};

use smallstr::SmallString;

use crate::{Color, SgrCode};

/// Text that is displayed in the truecolor foreground of a [`Color`]. It has two fields:
/// - `text` - the text to print.
/// - `color` - the foreground color.
///
/// Displaying it writes `ESC[38;2;{r};{g};{b}m`, then `text`, then `ESC[0m`.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_color_value::{Color, PaintedText};
///
/// let red = Color::from_rgb_u8(255, 0, 0);
/// let painted = PaintedText { text: "red alert", color: red };
/// assert_eq!(painted.to_string(), "\x1b[38;2;255;0;0mred alert\x1b[0m");
/// assert_eq!(painted.to_string(), red.paint(Some("red alert")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedText<'a> {
    pub text: &'a str,
    pub color: Color,
}

pub mod sizing {
    /// Fits the two escape sequences (at most 23 bytes) plus a `#RRGGBB` or short label.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}

mod painted_text_impl {
    use super::{Color, Display, Formatter, PaintedText, Result, SgrCode, SmallString, Write,
                sizing};

    impl PaintedText<'_> {
        pub fn println(&self) {
            println!("{self}");
        }

        /// This is different than the [Display] trait implementation, because it doesn't
        /// allocate a new [String], but instead writes into an inline buffer on the stack.
        /// If this buffer gets larger than [`sizing::DEFAULT_STRING_STORAGE_SIZE`], it
        /// will spill to the heap.
        #[must_use]
        pub fn to_small_str(&self) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            // Writing to a SmallString only fails if Display fails, which ours doesn't.
            _ = write!(acc, "{self}");
            acc
        }
    }

    impl Display for PaintedText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let (red, green, blue) = self.color.to_rgb();
            write!(f, "{}", SgrCode::ForegroundRGB(red, green, blue))?;
            write!(f, "{}", self.text)?;
            write!(f, "{}", SgrCode::Reset)?;
            Ok(())
        }
    }

    impl Color {
        /// Pairs `text` with this color, see [`PaintedText`].
        #[must_use]
        pub fn painted(self, text: &str) -> PaintedText<'_> { PaintedText { text, color: self } }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        let painted = PaintedText {
            text: "Hello",
            color: Color::from_rgb_u8(1, 20, 255),
        };
        assert_eq!(painted.to_string(), "\x1b[38;2;1;20;255mHello\x1b[0m");
    }

    #[test]
    fn test_display_empty_text() {
        let painted = PaintedText {
            text: "",
            color: Color::black(),
        };
        assert_eq!(painted.to_string(), "\x1b[38;2;0;0;0m\x1b[0m");
    }

    #[test]
    fn test_to_small_str_matches_display() {
        let painted = Color::white().painted("#FFFFFF");
        let small = painted.to_small_str();
        assert_eq!(small.as_str(), painted.to_string());
        assert!(!small.spilled());
    }

    #[test]
    fn test_to_small_str_spills_long_text() {
        let text = "x".repeat(100);
        let painted = Color::black().painted(&text);
        let small = painted.to_small_str();
        assert!(small.spilled());
        assert_eq!(small.as_str(), painted.to_string());
    }
}
