//! Core types for hearth-tui.
//!
//! Everything the pipeline passes around lives here: colors, decoded frames,
//! the cyclic frame set and the per-tick display surface.

use std::time::Duration;

// =============================================================================
// Color
// =============================================================================

/// Opaque RGB color with 8-bit channels (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Standard colors
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
}

// =============================================================================
// Frame
// =============================================================================

/// One decoded still image of the animation.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`.
/// A frame is never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Build a frame from row-major pixels.
    ///
    /// Returns `None` when `pixels.len()` doesn't match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Raw row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

// =============================================================================
// FrameSet
// =============================================================================

/// Ordered, cyclic sequence of frames and how long each stays on screen.
///
/// Always holds at least one frame. A zero duration means the frame is
/// rendered but playback moves on without pausing.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<(Frame, Duration)>,
}

impl FrameSet {
    /// Returns `None` for an empty sequence.
    pub fn new(frames: Vec<(Frame, Duration)>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    /// Number of frames (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true once constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame and duration at `index`, wrapping past the end.
    #[inline]
    pub fn get(&self, index: usize) -> (&Frame, Duration) {
        let (frame, duration) = &self.frames[index % self.frames.len()];
        (frame, *duration)
    }

    /// Iterate over frames in playback order (one pass).
    pub fn iter(&self) -> impl Iterator<Item = (&Frame, Duration)> {
        self.frames.iter().map(|(frame, duration)| (frame, *duration))
    }

    /// Sum of all frame durations: the length of one loop.
    pub fn loop_duration(&self) -> Duration {
        self.frames.iter().map(|(_, duration)| *duration).sum()
    }
}

// =============================================================================
// Display Surface
// =============================================================================

/// Destination grid in character cells. Re-derived every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySurface {
    pub columns: u16,
    pub rows: u16,
}

impl DisplaySurface {
    /// Geometry used whenever the terminal can't be measured.
    pub const FALLBACK: Self = Self::new(80, 24);

    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Number of cells on the surface.
    #[inline]
    pub fn area(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::FALLBACK
    }
}

// =============================================================================
// Tests
// =============================================================================
