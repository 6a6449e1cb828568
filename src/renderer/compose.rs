//! Frame compositor.
//!
//! Turns a resampled [`Grid`] plus the uptime overlay into one
//! [`OutputBuffer`] that is written to the terminal in a single call.
//!
//! # Layout
//!
//! 1. Cursor home (no clear, avoids flicker)
//! 2. Every cell as `fg(r, g, b)` + glyph, each row closed by reset + newline
//! 3. Cursor to the last row, centered column
//! 4. Overlay in white on black, then reset

use std::time::Duration;

use super::ansi;
use super::output::OutputBuffer;
use super::resample::Grid;
use crate::config::{BLOCK_GLYPH, PlayerConfig};
use crate::types::{DisplaySurface, Rgb};

// =============================================================================
// Overlay Text
// =============================================================================

/// Format elapsed time as `"{label}: HH:MM:SS"`.
///
/// Rounds to the nearest whole second (halves round up). Hours are not
/// wrapped at 24.
pub fn overlay_text(label: &str, elapsed: Duration) -> String {
    let total = rounded_seconds(elapsed);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}: {:02}:{:02}:{:02}", label, hours, minutes, seconds)
}

#[inline]
fn rounded_seconds(elapsed: Duration) -> u128 {
    (elapsed.as_nanos() + 500_000_000) / 1_000_000_000
}

/// 1-based start column that centers `text_width` cells in `columns`.
///
/// Never less than 1, even when the text is wider than the terminal.
pub fn overlay_column(columns: u16, text_width: usize) -> u16 {
    let col = (columns as i64 - text_width as i64) / 2;
    col.max(1) as u16
}

// =============================================================================
// Compositor
// =============================================================================

/// Assembles complete frames. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    config: PlayerConfig,
}

impl Compositor {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    /// Build the full frame buffer for `grid` with the uptime overlay.
    pub fn compose(&self, grid: &Grid, columns: u16, rows: u16, elapsed: Duration) -> OutputBuffer {
        let text = overlay_text(&self.config.overlay_label, elapsed);
        let capacity = self.config.capacity_for(DisplaySurface::new(columns, rows));
        compose_into(
            OutputBuffer::with_capacity(capacity),
            grid,
            columns,
            rows,
            &text,
            self.config.glyph,
        )
    }
}

/// Build a frame buffer with the default glyph and a caller-supplied overlay.
pub fn compose(grid: &Grid, columns: u16, rows: u16, overlay: &str) -> OutputBuffer {
    compose_into(
        OutputBuffer::new(),
        grid,
        columns,
        rows,
        overlay,
        BLOCK_GLYPH,
    )
}

fn compose_into(
    mut out: OutputBuffer,
    grid: &Grid,
    columns: u16,
    rows: u16,
    overlay: &str,
    glyph: char,
) -> OutputBuffer {
    // Writes into OutputBuffer are infallible; ignore the io::Result.
    ansi::cursor_home(&mut out).ok();

    for y in 0..rows {
        for x in 0..columns {
            let color = grid.get(x, y).unwrap_or_default();
            ansi::fg(&mut out, color).ok();
            out.write_char(glyph);
        }
        ansi::reset(&mut out).ok();
        out.write_char('\n');
    }

    let col = overlay_column(columns, overlay.chars().count());
    ansi::cursor_to(&mut out, rows, col).ok();
    ansi::fg_bg(&mut out, Rgb::WHITE, Rgb::BLACK).ok();
    out.write_str(overlay);
    ansi::reset(&mut out).ok();

    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::resample::resample;
    use crate::types::Frame;

    fn solid_grid(columns: u16, rows: u16, color: Rgb) -> Grid {
        resample(&Frame::filled(4, 4, color), columns, rows)
    }

    /// The part of the buffer before the overlay cursor move.
    fn pixel_section(buffer: &str, rows: u16, col: u16) -> &str {
        let marker = format!("\x1b[{};{}H", rows, col);
        let end = buffer.rfind(&marker).unwrap();
        &buffer[..end]
    }

    #[test]
    fn test_overlay_text_format() {
        assert_eq!(overlay_text("Uptime", Duration::from_secs(3661)), "Uptime: 01:01:01");
        assert_eq!(overlay_text("Uptime", Duration::from_secs(59)), "Uptime: 00:00:59");
        assert_eq!(overlay_text("Uptime", Duration::ZERO), "Uptime: 00:00:00");
    }

    #[test]
    fn test_overlay_text_rounds_to_nearest_second() {
        assert_eq!(overlay_text("Uptime", Duration::from_millis(1499)), "Uptime: 00:00:01");
        assert_eq!(overlay_text("Uptime", Duration::from_millis(1500)), "Uptime: 00:00:02");
        assert_eq!(overlay_text("Uptime", Duration::from_millis(59_600)), "Uptime: 00:01:00");
    }

    #[test]
    fn test_overlay_hours_do_not_wrap() {
        assert_eq!(overlay_text("Uptime", Duration::from_secs(25 * 3600)), "Uptime: 25:00:00");
        assert_eq!(overlay_text("Uptime", Duration::from_secs(100 * 3600 + 5)), "Uptime: 100:00:05");
    }

    #[test]
    fn test_overlay_column() {
        assert_eq!(overlay_column(80, 16), 32);
        assert_eq!(overlay_column(10, 16), 1);
        assert_eq!(overlay_column(16, 16), 1);
        assert_eq!(overlay_column(19, 16), 1);
        assert_eq!(overlay_column(20, 16), 2);
        assert_eq!(overlay_column(0, 16), 1);
    }

    #[test]
    fn test_compose_layout() {
        let grid = solid_grid(2, 1, Rgb::new(1, 2, 3));
        let out = compose(&grid, 2, 1, "Uptime: 00:00:00");

        assert_eq!(
            out.as_str(),
            "\x1b[H\
             \x1b[38;2;1;2;3m█\x1b[38;2;1;2;3m█\x1b[0m\n\
             \x1b[1;1H\x1b[38;2;255;255;255;48;2;0;0;0mUptime: 00:00:00\x1b[0m"
        );
    }

    #[test]
    fn test_compose_line_breaks_and_resets_per_row() {
        let (columns, rows) = (80, 24);
        let grid = solid_grid(columns, rows, Rgb::RED);
        let out = compose(&grid, columns, rows, "Uptime: 00:00:00");
        let text = out.as_str();

        assert!(text.starts_with(ansi::CURSOR_HOME));
        let pixels = pixel_section(&text, rows, 32);
        assert_eq!(pixels.matches('\n').count(), rows as usize);
        assert_eq!(pixels.matches(ansi::RESET).count(), rows as usize);
        assert_eq!(pixels.matches('█').count(), columns as usize * rows as usize);
        assert!(text.ends_with("Uptime: 00:00:00\x1b[0m"));
    }

    #[test]
    fn test_compose_overflowing_overlay_is_not_truncated() {
        let grid = solid_grid(10, 3, Rgb::BLUE);
        let out = compose(&grid, 10, 3, "Uptime: 12:34:56");
        let text = out.as_str();
        assert!(text.contains("\x1b[3;1H"));
        assert!(text.contains("Uptime: 12:34:56"));
    }

    #[test]
    fn test_compose_empty_surface() {
        let grid = solid_grid(0, 0, Rgb::RED);
        let out = compose(&grid, 0, 0, "Uptime: 00:00:00");
        let text = out.as_str();
        assert!(text.starts_with("\x1b[H\x1b[0;1H"));
        assert_eq!(text.matches('█').count(), 0);
    }

    #[test]
    fn test_compositor_uses_config() {
        let config = PlayerConfig {
            glyph: '#',
            overlay_label: "Lit".to_string(),
            ..PlayerConfig::default()
        };
        let compositor = Compositor::new(config);
        let grid = solid_grid(3, 2, Rgb::GREEN);
        let out = compositor.compose(&grid, 3, 2, Duration::from_secs(61));
        let text = out.as_str();

        assert_eq!(text.matches('#').count(), 6);
        assert!(text.contains("Lit: 00:01:01"));
    }
}
