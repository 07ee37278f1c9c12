//! Favorite button configuration

use fave_core::error::{dimension_dp, duration_ms};
use fave_core::{ConfigError, Result};
use fave_theme::{Density, IconColor, IconKind};
use serde::Deserialize;

pub const DEFAULT_BUTTON_SIZE_DP: u32 = 48;
pub const DEFAULT_PADDING_DP: u32 = 12;
pub const DEFAULT_ROTATION_DURATION_MS: u32 = 400;
pub const DEFAULT_ROTATION_ANGLE_DEG: i32 = 360;
pub const DEFAULT_BOUNCE_DURATION_MS: u32 = 300;

/// Which way a transition goes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Favorite,
    Unfavorite,
}

impl Direction {
    pub fn toward(favorite: bool) -> Self {
        if favorite {
            Direction::Favorite
        } else {
            Direction::Unfavorite
        }
    }

    /// Scale the bounce stage starts from; it always ends at 1.0.
    ///
    /// Favoriting grows the new icon in from small, un-favoriting shrinks it
    /// down from slightly oversized.
    pub fn bounce_from(&self) -> f32 {
        match self {
            Direction::Favorite => 0.2,
            Direction::Unfavorite => 1.3,
        }
    }

    /// Sign of the rotation sweep
    pub fn rotation_sign(&self) -> f32 {
        match self {
            Direction::Favorite => 1.0,
            Direction::Unfavorite => -1.0,
        }
    }
}

/// Timing and sweep of the animated transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    rotation_duration_ms: u32,
    rotation_angle_deg: i32,
    bounce_duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_duration_ms: DEFAULT_ROTATION_DURATION_MS,
            rotation_angle_deg: DEFAULT_ROTATION_ANGLE_DEG,
            bounce_duration_ms: DEFAULT_BOUNCE_DURATION_MS,
        }
    }
}

impl AnimationConfig {
    /// Validate host-supplied values. Durations and the angle must not be
    /// negative.
    pub fn new(
        rotation_duration_ms: i64,
        rotation_angle_deg: i64,
        bounce_duration_ms: i64,
    ) -> Result<Self> {
        Ok(Self {
            rotation_duration_ms: duration_ms("rotation_duration", rotation_duration_ms)?,
            rotation_angle_deg: angle_deg(rotation_angle_deg)?,
            bounce_duration_ms: duration_ms("bounce_duration", bounce_duration_ms)?,
        })
    }

    pub fn with_rotation_duration(self, ms: i64) -> Result<Self> {
        Ok(Self {
            rotation_duration_ms: duration_ms("rotation_duration", ms)?,
            ..self
        })
    }

    pub fn with_rotation_angle(self, degrees: i64) -> Result<Self> {
        Ok(Self {
            rotation_angle_deg: angle_deg(degrees)?,
            ..self
        })
    }

    pub fn with_bounce_duration(self, ms: i64) -> Result<Self> {
        Ok(Self {
            bounce_duration_ms: duration_ms("bounce_duration", ms)?,
            ..self
        })
    }

    pub fn rotation_duration_ms(&self) -> u32 {
        self.rotation_duration_ms
    }

    pub fn rotation_angle_deg(&self) -> i32 {
        self.rotation_angle_deg
    }

    pub fn bounce_duration_ms(&self) -> u32 {
        self.bounce_duration_ms
    }

    /// Rotation start and end for a direction
    pub fn rotation_sweep(&self, direction: Direction) -> (f32, f32) {
        (0.0, direction.rotation_sign() * self.rotation_angle_deg as f32)
    }

    /// Bounce scale start and end for a direction
    pub fn bounce_envelope(&self, direction: Direction) -> (f32, f32) {
        (direction.bounce_from(), 1.0)
    }

    /// Length of both stages back to back
    pub fn total_duration_ms(&self) -> u32 {
        self.rotation_duration_ms.saturating_add(self.bounce_duration_ms)
    }
}

fn angle_deg(value: i64) -> Result<i32> {
    if value < 0 {
        return Err(ConfigError::NegativeAngle(value));
    }
    i32::try_from(value).map_err(|_| ConfigError::OutOfRange {
        field: "rotation_angle",
        value,
    })
}

/// Serializable description of a favorite button.
///
/// Values are kept as the host wrote them and validated when the button is
/// built, so a bad file is reported instead of silently clamped.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FavoriteConfig {
    pub favorite: bool,
    pub animate_favorite: bool,
    pub animate_unfavorite: bool,
    pub rotation_duration_ms: i64,
    pub rotation_angle_deg: i64,
    pub bounce_duration_ms: i64,
    pub color: IconColor,
    pub kind: IconKind,
    /// Overrides the themed favorited icon
    pub favorite_icon: Option<String>,
    /// Overrides the themed unfavorited icon
    pub unfavorite_icon: Option<String>,
    pub size_dp: i64,
    pub padding_dp: i64,
    pub density: Density,
}

impl Default for FavoriteConfig {
    fn default() -> Self {
        Self {
            favorite: false,
            animate_favorite: true,
            animate_unfavorite: false,
            rotation_duration_ms: DEFAULT_ROTATION_DURATION_MS.into(),
            rotation_angle_deg: DEFAULT_ROTATION_ANGLE_DEG.into(),
            bounce_duration_ms: DEFAULT_BOUNCE_DURATION_MS.into(),
            color: IconColor::Black,
            kind: IconKind::Star,
            favorite_icon: None,
            unfavorite_icon: None,
            size_dp: DEFAULT_BUTTON_SIZE_DP.into(),
            padding_dp: DEFAULT_PADDING_DP.into(),
            density: Density::MDPI,
        }
    }
}

impl FavoriteConfig {
    pub fn animation(&self) -> Result<AnimationConfig> {
        AnimationConfig::new(
            self.rotation_duration_ms,
            self.rotation_angle_deg,
            self.bounce_duration_ms,
        )
    }

    /// Size and padding in dp
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        Ok((
            dimension_dp("size", self.size_dp)?,
            dimension_dp("padding", self.padding_dp)?,
        ))
    }
}
