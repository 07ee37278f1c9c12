//! Frame scheduler
//!
//! Measures wall-clock time between frames so hosts can drive widgets with
//! real deltas.

use std::time::{Duration, Instant};

/// Produces frame deltas for a target frame rate
pub struct FrameScheduler {
    last_frame: Instant,
    target_fps: u32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            target_fps: 120,
        }
    }

    pub fn with_target_fps(fps: u32) -> Self {
        let mut scheduler = Self::new();
        scheduler.set_target_fps(fps);
        scheduler
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time budget for one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    /// Milliseconds since the previous call (or since construction)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        dt.as_secs_f32() * 1_000.0
    }

    /// Time left in the current frame's budget
    pub fn remaining(&self) -> Duration {
        self.frame_interval().saturating_sub(self.last_frame.elapsed())
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
