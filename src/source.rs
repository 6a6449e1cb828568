//! Animation source: turns the embedded payload into a [`FrameSet`].
//!
//! Decoding runs in two stages, each with its own error variant:
//!
//! 1. **Transport** - standard base64 text to bytes
//! 2. **Animation** - GIF bytes to composited RGB frames with delays
//!
//! GIF delays are stored in hundredths of a second; they come out of the
//! decoder already scaled to milliseconds (delay x 10).

use std::io::Cursor;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

use crate::error::{Error, Result};
use crate::types::{Frame, FrameSet, Rgb};

/// The animation compiled into the binary, as base64 text.
pub const EMBEDDED_ANIMATION: &str = include_str!("../assets/fireplace.txt");

/// Decode the animation compiled into the binary.
pub fn load() -> Result<FrameSet> {
    FrameSet::from_base64(EMBEDDED_ANIMATION)
}

impl FrameSet {
    /// Decode a base64-encoded GIF.
    ///
    /// ASCII whitespace (line wrapping in the asset file) is ignored.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let raw = base64::decode(compact)?;
        Self::from_gif_bytes(&raw)
    }

    /// Decode raw GIF bytes.
    ///
    /// Each frame is composited onto the full logical screen, so every
    /// frame has the canvas dimensions regardless of its sub-rectangle.
    pub fn from_gif_bytes(bytes: &[u8]) -> Result<Self> {
        let decoder = GifDecoder::new(Cursor::new(bytes))?;

        let mut frames = Vec::new();
        for frame_result in decoder.into_frames() {
            let frame = frame_result?;
            let duration = frame_duration(frame.delay());

            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            let pixels = buffer
                .pixels()
                .map(|p| Rgb::new(p[0], p[1], p[2]))
                .collect();

            // into_buffer() always yields width * height pixels
            let frame = Frame::from_pixels(width, height, pixels)
                .unwrap_or_else(|| Frame::filled(width, height, Rgb::BLACK));
            frames.push((frame, duration));
        }

        let set = FrameSet::new(frames).ok_or(Error::EmptyAnimation)?;

        let (first, _) = set.get(0);
        log::debug!(
            "Decoded GIF: {}x{}, {} frames, {}ms per loop",
            first.width(),
            first.height(),
            set.len(),
            set.loop_duration().as_millis()
        );

        Ok(set)
    }
}

/// Convert a decoder delay into a display duration.
///
/// A zero delay stays zero: the frame is shown without pausing.
fn frame_duration(delay: image::Delay) -> Duration {
    let (numer, denom) = delay.numer_denom_ms();
    if denom == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(u64::from(numer / denom))
}

// =============================================================================
// Tests
// =============================================================================
