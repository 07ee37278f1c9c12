//! Icon identifiers and theme resolution
//!
//! Icons are opaque names; the rendering surface decides what a name draws.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Opaque icon identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(Cow<'static, str>);

impl IconId {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for IconId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Material icon names for the built-in styles
pub mod material {
    use super::IconId;

    pub const STAR_BLACK: IconId = IconId::from_static("ic_star_black_24dp");
    pub const STAR_BORDER_BLACK: IconId = IconId::from_static("ic_star_border_black_24dp");
    pub const STAR_WHITE: IconId = IconId::from_static("ic_star_white_24dp");
    pub const STAR_BORDER_WHITE: IconId = IconId::from_static("ic_star_border_white_24dp");
    pub const HEART_BLACK: IconId = IconId::from_static("ic_favorite_black_24dp");
    pub const HEART_BORDER_BLACK: IconId = IconId::from_static("ic_favorite_border_black_24dp");
    pub const HEART_WHITE: IconId = IconId::from_static("ic_favorite_white_24dp");
    pub const HEART_BORDER_WHITE: IconId = IconId::from_static("ic_favorite_border_white_24dp");
}

/// Icon tint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColor {
    #[default]
    Black,
    White,
}

/// Icon shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    #[default]
    Star,
    Heart,
}

impl FromStr for IconColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            _ => Err(format!("unknown icon color '{s}' (expected black or white)")),
        }
    }
}

impl FromStr for IconKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "star" => Ok(Self::Star),
            "heart" => Ok(Self::Heart),
            _ => Err(format!("unknown icon kind '{s}' (expected star or heart)")),
        }
    }
}

/// The two icons a favorite button alternates between
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub favorited: IconId,
    pub unfavorited: IconId,
}

impl IconSet {
    pub fn new(favorited: impl Into<IconId>, unfavorited: impl Into<IconId>) -> Self {
        Self {
            favorited: favorited.into(),
            unfavorited: unfavorited.into(),
        }
    }

    /// The icon shown for a favorite state
    pub fn for_state(&self, favorite: bool) -> &IconId {
        if favorite {
            &self.favorited
        } else {
            &self.unfavorited
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        MaterialIcons.resolve_icons(IconColor::default(), IconKind::default())
    }
}

/// Maps a style to concrete icons
pub trait ThemeResolver {
    fn resolve_icons(&self, color: IconColor, kind: IconKind) -> IconSet;
}

/// Built-in resolver for the material star and heart icons
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialIcons;

impl ThemeResolver for MaterialIcons {
    fn resolve_icons(&self, color: IconColor, kind: IconKind) -> IconSet {
        use material::*;

        let (favorited, unfavorited) = match (color, kind) {
            (IconColor::Black, IconKind::Star) => (STAR_BLACK, STAR_BORDER_BLACK),
            (IconColor::Black, IconKind::Heart) => (HEART_BLACK, HEART_BORDER_BLACK),
            (IconColor::White, IconKind::Star) => (STAR_WHITE, STAR_BORDER_WHITE),
            (IconColor::White, IconKind::Heart) => (HEART_WHITE, HEART_BORDER_WHITE),
        };
        tracing::trace!(?color, ?kind, %favorited, "resolved material icons");
        IconSet {
            favorited,
            unfavorited,
        }
    }
}

impl<F> ThemeResolver for F
where
    F: Fn(IconColor, IconKind) -> IconSet,
{
    fn resolve_icons(&self, color: IconColor, kind: IconKind) -> IconSet {
        self(color, kind)
    }
}
