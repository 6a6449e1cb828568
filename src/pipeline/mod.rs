//! Playback pipeline.
//!
//! - [`terminal`] - per-frame terminal geometry with a fixed fallback, stdout sink
//! - [`driver`] - the endless frame loop

pub mod driver;
pub mod terminal;

pub use driver::{FrameCursor, Player, Tick};
pub use terminal::{stdout_sink, surface_or_fallback, FixedSizer, SurfaceSizer, TerminalSizer};
