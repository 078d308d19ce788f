//! Wall-clock collaborator: elapsed time since start and the frame throttle.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    started: Instant,
    frame_start: Instant,
    frame: Duration,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            frame_start: now,
            frame,
        }
    }

    /// Real time since the session began.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Mark the beginning of a tick.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Block until the current tick has lasted one full frame.
    /// Returns how long we slept.
    pub fn throttle(&self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        remaining
    }

    fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.frame_start.elapsed())
    }
}
