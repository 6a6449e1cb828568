//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about pixels and cells. It doesn't decode
//! animations or keep time. It takes a decoded [`Frame`] and produces one
//! escape-coded buffer per tick.
//!
//! # Architecture
//!
//! ```text
//!        ┌─────────┐
//!        │  Frame  │  ← decoded GIF frame, any size
//!        └─────────┘
//!             │  resample (nearest neighbor)
//!             ▼
//!        ┌─────────┐
//!        │  Grid   │  ← columns x rows cells
//!        └─────────┘
//!             │  compose (+ uptime overlay)
//!             ▼
//!     ┌──────────────┐
//!     │ OutputBuffer │  ← one write per frame
//!     └──────────────┘
//!             │
//!             ▼
//!         Terminal
//! ```
//!
//! [`Frame`]: crate::types::Frame

pub mod ansi;
pub mod compose;
pub mod output;
pub mod resample;

// Re-exports for convenience
pub use compose::{compose, overlay_column, overlay_text, Compositor};
pub use output::OutputBuffer;
pub use resample::{resample, Grid};
