//! Startup errors.
//!
//! Only decoding the animation can fail. Each variant names the stage that
//! rejected the payload so a broken asset is easy to trace back to the build.

use thiserror::Error;

/// Errors raised while turning the embedded payload into a [`FrameSet`].
///
/// [`FrameSet`]: crate::types::FrameSet
#[derive(Debug, Error)]
pub enum Error {
    /// The payload isn't valid standard base64.
    #[error("base64 decode: {0}")]
    Transport(#[from] base64::DecodeError),

    /// The decoded bytes aren't a readable GIF.
    #[error("gif decode: {0}")]
    Animation(#[from] image::ImageError),

    /// The GIF decoded but held no frames.
    #[error("gif decode: animation contains no frames")]
    EmptyAnimation,
}

/// Result type for animation loading.
pub type Result<T> = std::result::Result<T, Error>;
