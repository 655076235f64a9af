use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug, Clone, Copy)]
enum FrameClock {
    /// Wall-clock time since the iterator was created
    Realtime { start: Instant, last: Instant },
    /// Every frame advances by exactly `step` seconds
    Fixed { step: f32 },
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames.take(n) { ... }`
pub struct FrameIterator {
    frame_number: u64,
    clock: FrameClock,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            clock: FrameClock::Realtime { start: now, last: now },
        }
    }

    /// Reproducible timeline at `fps` frames per second, independent of wall time
    pub fn fixed(fps: f32) -> Self {
        Self {
            frame_number: 0,
            clock: FrameClock::Fixed {
                step: 1.0 / fps.max(f32::EPSILON),
            },
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let info = match &mut self.clock {
            FrameClock::Realtime { start, last } => {
                let now = Instant::now();
                let delta = now.duration_since(*last).as_secs_f32();
                let time = now.duration_since(*start).as_secs_f32();
                *last = now;
                FrameInfo::new(self.frame_number, time, delta)
            }
            FrameClock::Fixed { step } => {
                let delta = if self.frame_number == 0 { 0.0 } else { *step };
                FrameInfo::new(self.frame_number, self.frame_number as f32 * *step, delta)
            }
        };

        self.frame_number += 1;
        Some(info)
    }
}
