//! Single-value tweens

use crate::easing::Easing;

/// A value eased from `from` to `to` over a fixed duration.
///
/// Time is supplied by the caller, so a tween can be sampled at any point
/// without being advanced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Linear progress (0.0 to 1.0) after `elapsed_ms`.
    ///
    /// A zero-length tween is complete as soon as it starts.
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Eased value after `elapsed_ms`
    pub fn value_at(&self, elapsed_ms: f32) -> f32 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}
