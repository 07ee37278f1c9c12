//! Favorite toggle widget
//!
//! - [`FavoriteButton`]: owns the favorite state and applies change requests
//! - [`AnimationSequencer`]: plays the rotate-then-bounce transition
//! - [`AnimationConfig`]: timing and sweep of the transition
//! - [`FavoriteButtonBuilder`]: fluent construction with validation

mod builder;
mod button;
mod config;
mod sequencer;

pub use builder::FavoriteButtonBuilder;
pub use button::{AnimationEndListener, ChangeListener, FavoriteButton};
pub use config::{
    AnimationConfig, Direction, FavoriteConfig, DEFAULT_BOUNCE_DURATION_MS,
    DEFAULT_BUTTON_SIZE_DP, DEFAULT_PADDING_DP, DEFAULT_ROTATION_ANGLE_DEG,
    DEFAULT_ROTATION_DURATION_MS,
};
pub use sequencer::{AnimationSequencer, Phase, SequencerEvent};
