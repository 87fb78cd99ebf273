//! Frame timing for the render loop.
//!
//! Simulation time is independent of wall-clock time: each scene advances by
//! its own fixed `dt` per frame. The clock only tracks frames and FPS for
//! display.

use std::time::{Duration, Instant};

/// Frame counter with a periodically refreshed FPS estimate.
#[derive(Debug)]
pub struct FrameClock {
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a finished frame. Returns `true` when the FPS estimate was refreshed.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
