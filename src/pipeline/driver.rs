//! Animation driver.
//!
//! One thread, one loop, one suspension point per frame:
//!
//! ```text
//! start: record start instant, clear screen
//! loop:  query surface → resample → compose → write → sleep(duration)
//! ```
//!
//! Frames are never dropped and late frames are not caught up; drift simply
//! accumulates. The loop has no exit of its own and ends only when the
//! output stream stops accepting writes (or the process is killed).

use std::convert::Infallible;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use super::terminal::SurfaceSizer;
use crate::config::PlayerConfig;
use crate::renderer::{ansi, resample, Compositor, OutputBuffer};
use crate::types::{DisplaySurface, FrameSet};

// =============================================================================
// FrameCursor
// =============================================================================

/// Endless playback order over `len` frames: `0, 1, .., len-1, 0, 1, ..`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCursor {
    next: usize,
    len: usize,
}

impl FrameCursor {
    /// `len` of zero is bumped to one.
    pub fn new(len: usize) -> Self {
        Self {
            next: 0,
            len: len.max(1),
        }
    }

    /// Index the next call to `next()` will return.
    pub fn peek(&self) -> usize {
        self.next
    }
}

impl Iterator for FrameCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next;
        self.next = (self.next + 1) % self.len;
        Some(current)
    }
}

// =============================================================================
// Tick
// =============================================================================

/// What a single rendered frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Position of the frame in the set.
    pub index: usize,
    /// How long the frame should stay up.
    pub duration: Duration,
    /// Surface the frame was fitted to.
    pub surface: DisplaySurface,
    /// Bytes handed to the output in one write.
    pub bytes: usize,
}

// =============================================================================
// Player
// =============================================================================

/// Loops a [`FrameSet`] onto an output stream forever.
pub struct Player<W: Write, S: SurfaceSizer> {
    frames: FrameSet,
    output: W,
    sizer: S,
    compositor: Compositor,
    cursor: FrameCursor,
    start: Instant,
}

impl<W: Write, S: SurfaceSizer> Player<W, S> {
    /// Enter the looping state: record the start instant and clear the
    /// screen once.
    pub fn start(frames: FrameSet, mut output: W, sizer: S, config: PlayerConfig) -> io::Result<Self> {
        let start = Instant::now();

        let mut clear = OutputBuffer::with_capacity(8);
        ansi::erase_screen(&mut clear)?;
        clear.write_to(&mut output)?;

        log::info!(
            "Playing {} frames, {}ms per loop",
            frames.len(),
            frames.loop_duration().as_millis()
        );

        Ok(Self {
            cursor: FrameCursor::new(frames.len()),
            frames,
            output,
            sizer,
            compositor: Compositor::new(config),
            start,
        })
    }

    /// Render the next frame and write it out. Does not sleep.
    pub fn tick(&mut self) -> io::Result<Tick> {
        let index = self.cursor.next().unwrap_or(0);
        let (frame, duration) = self.frames.get(index);

        let surface = self.sizer.query();
        let grid = resample(frame, surface.columns, surface.rows);
        let buffer = self.compositor.compose(
            &grid,
            surface.columns,
            surface.rows,
            self.start.elapsed(),
        );
        buffer.write_to(&mut self.output)?;

        Ok(Tick {
            index,
            duration,
            surface,
            bytes: buffer.len(),
        })
    }

    /// Play forever. Returns only if writing to the output fails.
    pub fn run(mut self) -> io::Result<Infallible> {
        loop {
            let tick = self.tick()?;
            if !tick.duration.is_zero() {
                thread::sleep(tick.duration);
            }
        }
    }

    /// Index of the frame the next tick renders.
    pub fn next_index(&self) -> usize {
        self.cursor.peek()
    }

    /// Instant the player entered the loop.
    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// =============================================================================
// Tests
// =============================================================================
