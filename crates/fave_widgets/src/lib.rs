//! Fave Widget Library
//!
//! A toggleable favorite indicator whose state changes are either applied
//! instantly or played as a rotate-then-bounce animation.
//!
//! # Example
//!
//! ```rust
//! use fave_widgets::favorite::FavoriteButton;
//! use fave_widgets::surface::RecordingSurface;
//!
//! let mut button = FavoriteButton::builder()
//!     .rotation_duration(400)
//!     .on_favorite_change(|_, favorite| println!("favorite: {favorite}"))
//!     .build(RecordingSurface::new())
//!     .expect("valid configuration");
//!
//! button.toggle(None);
//! assert!(button.is_favorite());
//!
//! // Drive the animation with frame deltas until it settles
//! while button.is_animating() {
//!     button.update(16.0);
//! }
//! ```

pub mod favorite;
pub mod surface;
pub mod widget;

pub use favorite::{AnimationConfig, FavoriteButton, FavoriteButtonBuilder, FavoriteConfig};
pub use surface::{IconTransform, RecordingSurface, RenderSurface, SurfaceCall};
pub use widget::{Widget, WidgetId};
