//! Fluent construction of favorite buttons

use fave_core::error::dimension_dp;
use fave_core::Result;
use fave_theme::{Density, IconColor, IconId, IconKind, MaterialIcons, ThemeResolver};

use super::button::{AnimationEndListener, ChangeListener, FavoriteButton, Parts};
use super::config::{
    AnimationConfig, FavoriteConfig, DEFAULT_BOUNCE_DURATION_MS, DEFAULT_BUTTON_SIZE_DP,
    DEFAULT_PADDING_DP, DEFAULT_ROTATION_ANGLE_DEG, DEFAULT_ROTATION_DURATION_MS,
};
use crate::surface::RenderSurface;
use crate::widget::WidgetId;

/// Builder for favorite buttons.
///
/// Numeric values are taken as the host supplies them and checked in
/// [`build`](Self::build).
pub struct FavoriteButtonBuilder<S: RenderSurface> {
    id: WidgetId,
    favorite: bool,
    animate_favorite: bool,
    animate_unfavorite: bool,
    rotation_duration_ms: i64,
    rotation_angle_deg: i64,
    bounce_duration_ms: i64,
    color: IconColor,
    kind: IconKind,
    favorite_icon: Option<IconId>,
    unfavorite_icon: Option<IconId>,
    resolver: Box<dyn ThemeResolver>,
    size_dp: i64,
    padding_dp: i64,
    density: Density,
    on_change: Option<ChangeListener<S>>,
    on_animation_end: Option<AnimationEndListener<S>>,
}

impl<S: RenderSurface> Default for FavoriteButtonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RenderSurface> FavoriteButtonBuilder<S> {
    pub fn new() -> Self {
        Self {
            id: WidgetId::default(),
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
            resolver: Box::new(MaterialIcons),
            size_dp: DEFAULT_BUTTON_SIZE_DP.into(),
            padding_dp: DEFAULT_PADDING_DP.into(),
            density: Density::MDPI,
            on_change: None,
            on_animation_end: None,
        }
    }

    /// Start from a deserialized description
    pub fn from_config(config: &FavoriteConfig) -> Self {
        let mut builder = Self::new()
            .favorite(config.favorite)
            .animate_favorite(config.animate_favorite)
            .animate_unfavorite(config.animate_unfavorite)
            .rotation_duration(config.rotation_duration_ms)
            .rotation_angle(config.rotation_angle_deg)
            .bounce_duration(config.bounce_duration_ms)
            .color(config.color)
            .kind(config.kind)
            .size(config.size_dp)
            .padding(config.padding_dp)
            .density(config.density);
        if let Some(icon) = &config.favorite_icon {
            builder = builder.favorite_icon(IconId::new(icon.clone()));
        }
        if let Some(icon) = &config.unfavorite_icon {
            builder = builder.unfavorite_icon(IconId::new(icon.clone()));
        }
        builder
    }

    pub fn id(mut self, id: WidgetId) -> Self {
        self.id = id;
        self
    }

    /// Initial state
    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn animate_favorite(mut self, animate: bool) -> Self {
        self.animate_favorite = animate;
        self
    }

    pub fn animate_unfavorite(mut self, animate: bool) -> Self {
        self.animate_unfavorite = animate;
        self
    }

    pub fn rotation_duration(mut self, ms: i64) -> Self {
        self.rotation_duration_ms = ms;
        self
    }

    pub fn rotation_angle(mut self, degrees: i64) -> Self {
        self.rotation_angle_deg = degrees;
        self
    }

    pub fn bounce_duration(mut self, ms: i64) -> Self {
        self.bounce_duration_ms = ms;
        self
    }

    /// Themed icon tint. Discards explicit icons.
    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self.clear_icon_overrides();
        self
    }

    /// Themed icon shape. Discards explicit icons.
    pub fn kind(mut self, kind: IconKind) -> Self {
        self.kind = kind;
        self.clear_icon_overrides();
        self
    }

    pub fn favorite_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.favorite_icon = Some(icon.into());
        self
    }

    pub fn unfavorite_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.unfavorite_icon = Some(icon.into());
        self
    }

    /// Resolver used for the color and kind, now and on later restyling
    pub fn resolver(mut self, resolver: impl ThemeResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Size in dp
    pub fn size(mut self, size: i64) -> Self {
        self.size_dp = size;
        self
    }

    /// Padding in dp
    pub fn padding(mut self, padding: i64) -> Self {
        self.padding_dp = padding;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn on_favorite_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&mut FavoriteButton<S>, bool) + 'static,
    {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn on_animation_end<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&mut FavoriteButton<S>, bool) + 'static,
    {
        self.on_animation_end = Some(Box::new(listener));
        self
    }

    fn clear_icon_overrides(&mut self) {
        self.favorite_icon = None;
        self.unfavorite_icon = None;
    }

    /// Validate the configuration and render the initial state onto
    /// `surface`. No listener fires during construction.
    pub fn build(self, surface: S) -> Result<FavoriteButton<S>> {
        let animation = AnimationConfig::new(
            self.rotation_duration_ms,
            self.rotation_angle_deg,
            self.bounce_duration_ms,
        )?;
        let size_dp = dimension_dp("size", self.size_dp)?;
        let padding_dp = dimension_dp("padding", self.padding_dp)?;

        let mut icons = self.resolver.resolve_icons(self.color, self.kind);
        if let Some(icon) = self.favorite_icon {
            icons.favorited = icon;
        }
        if let Some(icon) = self.unfavorite_icon {
            icons.unfavorited = icon;
        }

        tracing::debug!(
            id = ?self.id,
            favorite = self.favorite,
            color = ?self.color,
            kind = ?self.kind,
            "building favorite button"
        );

        let parts = Parts {
            id: self.id,
            favorite: self.favorite,
            animate_favorite: self.animate_favorite,
            animate_unfavorite: self.animate_unfavorite,
            animation,
            icons,
            color: self.color,
            kind: self.kind,
            resolver: self.resolver,
            size_dp,
            padding_dp,
            density: self.density,
            on_change: self.on_change,
            on_animation_end: self.on_animation_end,
        };
        Ok(FavoriteButton::from_parts(parts, surface))
    }
}
