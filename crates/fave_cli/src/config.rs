//! fave.toml handling

use anyhow::{Context, Result};
use fave_widgets::FavoriteConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "fave.toml";

/// Top-level demo configuration (fave.toml)
#[derive(Debug, Default, Deserialize)]
pub struct FaveFile {
    /// The button under test
    #[serde(default)]
    pub button: FavoriteConfig,
    #[serde(default)]
    pub script: Script,
}

/// What happens to the buttons, in order
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Simulated frame length
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f32,
    #[serde(default = "default_steps")]
    pub steps: Vec<Step>,
}

fn default_frame_ms() -> f32 {
    16.0
}

fn default_steps() -> Vec<Step> {
    vec![
        Step::Click,
        Step::Wait { ms: 800 },
        Step::Click,
        Step::Wait { ms: 800 },
    ]
}

impl Default for Script {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            steps: default_steps(),
        }
    }
}

/// One scripted action
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
    /// Click every button
    Click,
    /// Let time pass, rendering frames
    Wait { ms: u32 },
    /// Set the state directly
    Set {
        favorite: bool,
        /// Forces animation on or off instead of using the button's flags
        #[serde(default)]
        animated: Option<bool>,
        /// Skip the change listener
        #[serde(default)]
        silent: bool,
    },
}

impl FaveFile {
    /// Load from a file, or from fave.toml inside a directory
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!("No {} found at {}", CONFIG_FILE, path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load ./fave.toml if present, defaults otherwise
    pub fn load_or_default() -> Result<Self> {
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            Self::load_from(local)
        } else {
            tracing::debug!("no {} in working directory, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
