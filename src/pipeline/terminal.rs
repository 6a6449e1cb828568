//! Terminal geometry.
//!
//! The player re-measures the terminal before every frame so the animation
//! follows resizes without a restart. Measuring never fails: anything that
//! goes wrong collapses into the fallback surface.
//!
//! A zero-sized result is treated exactly like a failed query. The two can't
//! be told apart from here.
//!
//! Frames go out through [`stdout_sink`], an unbuffered handle on the same
//! descriptor as stdout.

use std::fs::File;
use std::io;

use crate::types::DisplaySurface;

// =============================================================================
// Sizer
// =============================================================================

/// Something that knows how big the display is right now.
pub trait SurfaceSizer {
    fn query(&mut self) -> DisplaySurface;
}

/// Measures the real terminal attached to the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSizer {
    fallback: DisplaySurface,
}

impl TerminalSizer {
    pub fn new(fallback: DisplaySurface) -> Self {
        Self { fallback }
    }
}

impl SurfaceSizer for TerminalSizer {
    /// Uses crossterm to query the terminal dimensions.
    fn query(&mut self) -> DisplaySurface {
        surface_or(crossterm::terminal::size().ok(), self.fallback)
    }
}

/// Always reports the same surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSizer(pub DisplaySurface);

impl SurfaceSizer for FixedSizer {
    fn query(&mut self) -> DisplaySurface {
        self.0
    }
}

impl<S: SurfaceSizer + ?Sized> SurfaceSizer for &mut S {
    fn query(&mut self) -> DisplaySurface {
        (**self).query()
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// Turn a raw `(columns, rows)` query result into a usable surface.
pub fn surface_or_fallback(size: Option<(u16, u16)>) -> DisplaySurface {
    surface_or(size, DisplaySurface::FALLBACK)
}

fn surface_or(size: Option<(u16, u16)>, fallback: DisplaySurface) -> DisplaySurface {
    match size {
        Some((columns, rows)) if columns > 0 && rows > 0 => DisplaySurface::new(columns, rows),
        _ => fallback,
    }
}

// =============================================================================
// Output
// =============================================================================

/// Unbuffered handle on the process's stdout.
///
/// `io::stdout()` is line buffered and splits a write at its last newline,
/// which would put the overlay in a second write. Each `write` on the
/// returned file is handed to the descriptor as is.
#[cfg(unix)]
pub fn stdout_sink() -> io::Result<File> {
    use std::os::fd::AsFd;
    Ok(File::from(io::stdout().as_fd().try_clone_to_owned()?))
}

/// Unbuffered handle on the process's stdout.
#[cfg(windows)]
pub fn stdout_sink() -> io::Result<File> {
    use std::os::windows::io::AsHandle;
    Ok(File::from(io::stdout().as_handle().try_clone_to_owned()?))
}

// =============================================================================
// Tests
// =============================================================================
