//! End-to-end playback through the public API.

use std::io::{self, Write};
use std::time::Duration;

use hearth_tui::{DisplaySurface, FixedSizer, Frame, FrameSet, Player, PlayerConfig, Rgb};

/// Keeps every write call as its own chunk.
#[derive(Default)]
struct RecordingWriter {
    writes: Vec<Vec<u8>>,
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn two_frame_set() -> FrameSet {
    FrameSet::new(vec![
        (Frame::filled(8, 4, Rgb::new(200, 40, 0)), Duration::ZERO),
        (Frame::filled(8, 4, Rgb::new(20, 20, 180)), Duration::from_millis(50)),
    ])
    .unwrap()
}

#[test]
fn two_ticks_emit_two_complete_frames() {
    let mut player = Player::start(
        two_frame_set(),
        RecordingWriter::default(),
        FixedSizer(DisplaySurface::new(2, 1)),
        PlayerConfig::default(),
    )
    .unwrap();

    let first = player.tick().unwrap();
    let second = player.tick().unwrap();
    assert_eq!((first.index, second.index), (0, 1));
    assert_eq!(first.duration, Duration::ZERO);
    assert_eq!(second.duration, Duration::from_millis(50));

    let writes = player.into_output().writes;
    assert_eq!(writes.len(), 3, "clear + one write per frame");
    assert_eq!(writes[0], b"\x1b[2J");

    let frames: Vec<String> = writes[1..]
        .iter()
        .map(|w| String::from_utf8(w.clone()).unwrap())
        .collect();
    assert_ne!(frames[0], frames[1]);

    for frame in &frames {
        assert!(frame.starts_with("\x1b[H"));
        assert_eq!(frame.matches('█').count(), 2);
        assert_eq!(frame.matches('\n').count(), 1);
        assert!(frame.contains("\x1b[1;1H"));
        assert!(frame.contains("Uptime: 00:00:00"));
    }
    assert!(frames[0].contains("\x1b[38;2;200;40;0m█"));
    assert!(frames[1].contains("\x1b[38;2;20;20;180m█"));
}

#[test]
fn playback_wraps_to_first_frame() {
    let mut player = Player::start(
        two_frame_set(),
        RecordingWriter::default(),
        FixedSizer(DisplaySurface::new(4, 2)),
        PlayerConfig::default(),
    )
    .unwrap();

    let indices: Vec<_> = (0..5).map(|_| player.tick().unwrap().index).collect();
    assert_eq!(indices, vec![0, 1, 0, 1, 0]);
}

#[test]
fn follows_surface_changes_between_ticks() {
    struct Shrinking(Vec<DisplaySurface>);

    impl hearth_tui::SurfaceSizer for Shrinking {
        fn query(&mut self) -> DisplaySurface {
            self.0.pop().unwrap_or(DisplaySurface::FALLBACK)
        }
    }

    let mut player = Player::start(
        two_frame_set(),
        RecordingWriter::default(),
        Shrinking(vec![DisplaySurface::new(1, 1), DisplaySurface::new(6, 3)]),
        PlayerConfig::default(),
    )
    .unwrap();

    assert_eq!(player.tick().unwrap().surface, DisplaySurface::new(6, 3));
    assert_eq!(player.tick().unwrap().surface, DisplaySurface::new(1, 1));

    let writes = player.into_output().writes;
    let big = String::from_utf8(writes[1].clone()).unwrap();
    let small = String::from_utf8(writes[2].clone()).unwrap();
    assert_eq!(big.matches('█').count(), 18);
    assert_eq!(small.matches('█').count(), 1);
}

#[test]
fn embedded_animation_renders() {
    let frames = hearth_tui::load().unwrap();
    let count = frames.len();
    assert!(count >= 1);

    let mut player = Player::start(
        frames,
        RecordingWriter::default(),
        FixedSizer(DisplaySurface::FALLBACK),
        PlayerConfig::default(),
    )
    .unwrap();

    for expected in 0..count {
        assert_eq!(player.tick().unwrap().index, expected);
    }
    let writes = player.into_output().writes;
    let last = String::from_utf8(writes.last().unwrap().clone()).unwrap();
    assert_eq!(last.matches('█').count(), 80 * 24);
    assert!(last.contains("\x1b[24;32H"));
}
