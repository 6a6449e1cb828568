//! # hearth-tui
//!
//! Plays a looping GIF as truecolor block art in the terminal, with a live
//! uptime counter along the bottom row.
//!
//! ## Architecture
//!
//! The pipeline is a straight line, run once per frame:
//! ```text
//! FrameSet → query surface → resample → compose (+ overlay) → stdout → sleep
//! ```
//!
//! Decoding happens once at startup and is the only step that can fail.
//! Everything after it is total, apart from writing to the output stream.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgb, Frame, FrameSet, DisplaySurface)
//! - [`source`] - Base64 + GIF decoding into a FrameSet
//! - [`renderer`] - Resampling, ANSI output, frame composition
//! - [`pipeline`] - Terminal geometry and the playback loop
//! - [`config`] - Player tunables
//! - [`error`] - Startup errors

pub mod config;
pub mod error;
pub mod pipeline;
pub mod renderer;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::PlayerConfig;
pub use error::{Error, Result};
pub use source::{load, EMBEDDED_ANIMATION};

pub use renderer::{compose, overlay_column, overlay_text, resample, Compositor, Grid, OutputBuffer};

pub use pipeline::{
    stdout_sink, surface_or_fallback, FixedSizer, FrameCursor, Player, SurfaceSizer, TerminalSizer, Tick,
};
