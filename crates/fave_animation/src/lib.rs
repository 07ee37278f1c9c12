//! Fave Animation System
//!
//! Easing curves, tweens, and timeline orchestration.
//!
//! # Features
//!
//! - **Easing**: accelerate and overshoot curves alongside the usual cubic set
//! - **Tweens**: a single value eased over a fixed duration
//! - **Timelines**: several tweens placed at offsets and advanced together
//! - **Frame scheduling**: measures real frame deltas for a target frame rate

pub mod easing;
pub mod scheduler;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use scheduler::FrameScheduler;
pub use timeline::{Timeline, TimelineEntryId};
pub use tween::Tween;
