//! Player configuration.
//!
//! There are no flags or config files; the binary runs with
//! [`PlayerConfig::default`]. The struct exists so the pipeline reads its
//! tunables from one place and tests can swap them.

use crate::types::DisplaySurface;

/// Glyph drawn for every pixel cell.
pub const BLOCK_GLYPH: char = '█';

/// Label printed before the elapsed time in the overlay.
pub const UPTIME_LABEL: &str = "Uptime";

/// Tunables read by the sizer, compositor and driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Geometry used when the terminal can't be measured.
    pub fallback_surface: DisplaySurface,
    /// Character drawn for each pixel.
    pub glyph: char,
    /// Overlay label, rendered as `"{label}: HH:MM:SS"`.
    pub overlay_label: String,
    /// Initial output buffer capacity in bytes.
    pub buffer_capacity: usize,
}

impl PlayerConfig {
    /// Bytes needed for one frame at the given surface.
    ///
    /// A truecolor cell is at most 19 bytes of escape code plus the glyph.
    pub fn capacity_for(&self, surface: DisplaySurface) -> usize {
        let per_cell = 19 + self.glyph.len_utf8();
        let per_row = 5;
        let overlay = 64 + self.overlay_label.len();
        (surface.area() * per_cell + surface.rows as usize * per_row + overlay)
            .max(self.buffer_capacity)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fallback_surface: DisplaySurface::FALLBACK,
            glyph: BLOCK_GLYPH,
            overlay_label: UPTIME_LABEL.to_string(),
            buffer_capacity: 16384, // 16KB default
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
