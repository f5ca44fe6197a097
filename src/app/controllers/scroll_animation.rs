//! Smooth scrolling between two document offsets.
//!
//! The animation is a pure function of elapsed time. The UI drives it from a
//! repeating FLTK timeout and writes each position to the scroll widget.

use std::time::Duration;

/// Frame interval for the driving timeout, roughly 60 Hz.
pub const FRAME_INTERVAL: f64 = 1.0 / 60.0;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    start: i32,
    target: i32,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(start: i32, target: i32, duration: Duration) -> Self {
        Self { start, target, duration }
    }

    /// Scroll offset after `elapsed`. Reaches `target` exactly at the end.
    pub fn position_at(&self, elapsed: Duration) -> i32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let delta = (self.target - self.start) as f64;
        self.start + (delta * ease_in_out_cubic(t)).round() as i32
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Replace the destination mid-flight. The new animation starts from
    /// wherever this one currently is, with the full duration.
    pub fn retarget(&self, elapsed: Duration, target: i32) -> Self {
        Self::new(self.position_at(elapsed), target, self.duration)
    }
}

/// Tracks whether a frame timeout is outstanding, so that restarting an
/// animation never starts a second timeout chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSchedule {
    pending: bool,
}

impl FrameSchedule {
    /// Ask for a frame. Returns `true` when the caller must add a timeout,
    /// `false` when one is already on its way.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// The outstanding timeout has fired.
    pub fn fired(&mut self) {
        self.pending = false;
    }
}
