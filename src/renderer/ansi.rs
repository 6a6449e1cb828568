//! ANSI escape sequences for terminal control.
//!
//! Only the sequences the player emits:
//! - Cursor positioning (home and absolute)
//! - Screen clearing
//! - TrueColor foreground and background
//! - Style reset
//!
//! These are the wire format to the terminal and must stay bit exact.

use crate::types::Rgb;
use std::io::Write;

// =============================================================================
// Constants
// =============================================================================

/// Cursor home, as a literal for prefix checks.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Full style reset, as a literal for counting.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor to top-left without clearing.
#[inline]
pub fn cursor_home<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "{}", CURSOR_HOME)
}

/// Move cursor to absolute position (1-indexed row and column).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, row: u16, col: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", row, col)
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear entire screen (viewport only).
#[inline]
pub fn erase_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "{}", RESET)
}

/// Set foreground color (TrueColor).
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Rgb) -> std::io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set foreground and background in one sequence (TrueColor).
#[inline]
pub fn fg_bg<W: Write>(w: &mut W, fg: Rgb, bg: Rgb) -> std::io::Result<()> {
    write!(
        w,
        "\x1b[38;2;{};{};{};48;2;{};{};{}m",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
    )
}

// =============================================================================
// Testing Helpers
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor() {
        assert_eq!(to_string(cursor_home), "\x1b[H");
        assert_eq!(to_string(|w| cursor_to(w, 24, 32)), "\x1b[24;32H");
        assert_eq!(to_string(|w| cursor_to(w, 1, 1)), "\x1b[1;1H");
    }

    #[test]
    fn test_screen_control() {
        assert_eq!(to_string(erase_screen), "\x1b[2J");
    }

    #[test]
    fn test_fg_colors() {
        assert_eq!(
            to_string(|w| fg(w, Rgb::new(255, 128, 64))),
            "\x1b[38;2;255;128;64m"
        );
        assert_eq!(to_string(|w| fg(w, Rgb::BLACK)), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn test_overlay_style() {
        assert_eq!(
            to_string(|w| fg_bg(w, Rgb::WHITE, Rgb::BLACK)),
            "\x1b[38;2;255;255;255;48;2;0;0;0m"
        );
    }

    #[test]
    fn test_reset() {
        assert_eq!(to_string(reset), "\x1b[0m");
    }
}
