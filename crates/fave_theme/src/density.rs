//! Density-independent pixel conversion

use fave_core::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Screen density as a scale factor from dp to physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Density(f32);

impl Density {
    pub const LDPI: Density = Density(0.75);
    pub const MDPI: Density = Density(1.0);
    pub const HDPI: Density = Density(1.5);
    pub const XHDPI: Density = Density(2.0);
    pub const XXHDPI: Density = Density(3.0);
    pub const XXXHDPI: Density = Density(4.0);

    pub fn new(scale: f32) -> Result<Self> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self(scale))
        } else {
            Err(ConfigError::InvalidDensity(scale))
        }
    }

    pub fn scale(&self) -> f32 {
        self.0
    }

    /// Convert dp to whole physical pixels, rounding half up
    pub fn dp_to_px(&self, dp: u32) -> u32 {
        (dp as f32 * self.0 + 0.5) as u32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::MDPI
    }
}

impl TryFrom<f32> for Density {
    type Error = ConfigError;

    fn try_from(scale: f32) -> Result<Self> {
        Self::new(scale)
    }
}

impl From<Density> for f32 {
    fn from(density: Density) -> f32 {
        density.0
    }
}
