//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Blocks the loop until one frame interval has passed since the last tick.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        FramePacer {
            interval: Self::interval_for(frame_rate),
            frame_start: Instant::now(),
        }
    }

    /// 40 Hz → 25 ms.
    pub fn interval_for(frame_rate: u32) -> Duration {
        Duration::from_secs(1) / frame_rate.max(1)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time still to wait after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.interval.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep out the rest of the current frame and start the next one.
    /// Returns how long the finished frame took, including the sleep.
    pub fn tick(&mut self) -> Duration {
        if let Some(wait) = self.remaining(self.frame_start.elapsed()) {
            std::thread::sleep(wait);
        }
        let took = self.frame_start.elapsed();
        self.frame_start = Instant::now();
        took
    }
}
