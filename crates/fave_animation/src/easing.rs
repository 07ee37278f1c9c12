//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Starts slow and speeds up: `t^(2 * factor)`. A factor of 1.0 is a
    /// plain quadratic ease-in.
    Accelerate(f32),
    /// Runs past the target and settles back onto it. Larger tension means
    /// a bigger overshoot.
    Overshoot(f32),
}

impl Easing {
    /// The curve used for the favorite button's rotation stage
    pub const ACCELERATE: Easing = Easing::Accelerate(1.0);

    /// The curve used for the favorite button's bounce stage
    pub const POP: Easing = Easing::Overshoot(4.0);

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Accelerate(factor) => {
                if (*factor - 1.0).abs() < f32::EPSILON {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Overshoot(tension) => {
                let s = t - 1.0;
                s * s * ((tension + 1.0) * s + tension) + 1.0
            }
        }
    }
}
