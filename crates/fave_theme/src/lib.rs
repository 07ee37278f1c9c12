//! Fave Theme System
//!
//! Maps a `{color, kind}` style to the pair of icons a favorite button shows,
//! and converts density-independent sizes to physical pixels.
//!
//! # Quick Start
//!
//! ```rust
//! use fave_theme::{IconColor, IconKind, MaterialIcons, ThemeResolver};
//!
//! let icons = MaterialIcons.resolve_icons(IconColor::White, IconKind::Heart);
//! assert_eq!(icons.favorited.as_str(), "ic_favorite_white_24dp");
//! assert_eq!(icons.unfavorited.as_str(), "ic_favorite_border_white_24dp");
//! ```

pub mod density;
pub mod icons;

pub use density::Density;
pub use icons::{IconColor, IconId, IconKind, IconSet, MaterialIcons, ThemeResolver};
