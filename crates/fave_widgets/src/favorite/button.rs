//! Favorite button state controller

use std::collections::VecDeque;

use fave_core::error::dimension_dp;
use fave_core::events::Event;
use fave_core::Result;
use fave_theme::{Density, IconColor, IconId, IconKind, IconSet, MaterialIcons, ThemeResolver};

use super::builder::FavoriteButtonBuilder;
use super::config::{AnimationConfig, DEFAULT_BUTTON_SIZE_DP, DEFAULT_PADDING_DP};
use super::sequencer::{AnimationSequencer, Phase, SequencerEvent, SequencerEvents};
use crate::surface::{IconTransform, RenderSurface};
use crate::widget::{Widget, WidgetId};

/// Called synchronously when the favorite state changes, before anything is
/// rendered for the change
pub type ChangeListener<S> = Box<dyn FnMut(&mut FavoriteButton<S>, bool)>;

/// Called once a change is fully applied, after its last frame. Fires for
/// unanimated changes too.
pub type AnimationEndListener<S> = Box<dyn FnMut(&mut FavoriteButton<S>, bool)>;

/// A two-state favorite toggle.
///
/// State changes are applied immediately; the visual transition either
/// happens at once or plays out over the following [`update`](Self::update)
/// calls.
///
/// Listeners receive the button itself and may call back into it. Calls made
/// while the button is still broadcasting a change are ignored.
pub struct FavoriteButton<S: RenderSurface> {
    id: WidgetId,
    favorite: bool,
    /// Set for the duration of a state change request
    broadcasting: bool,
    animate_favorite: bool,
    animate_unfavorite: bool,
    animation: AnimationConfig,
    icons: IconSet,
    color: IconColor,
    kind: IconKind,
    resolver: Box<dyn ThemeResolver>,
    size_dp: u32,
    padding_dp: u32,
    density: Density,
    sequencer: AnimationSequencer,
    surface: S,
    on_change: Option<ChangeListener<S>>,
    on_animation_end: Option<AnimationEndListener<S>>,
    /// Completions waiting for the animation-end listener to return
    pending_ends: VecDeque<bool>,
    delivering_end: bool,
    /// An icon refresh was asked for while a transition was playing
    refresh_pending: bool,
}

/// Everything a button is built from, validated
pub(super) struct Parts<S: RenderSurface> {
    pub id: WidgetId,
    pub favorite: bool,
    pub animate_favorite: bool,
    pub animate_unfavorite: bool,
    pub animation: AnimationConfig,
    pub icons: IconSet,
    pub color: IconColor,
    pub kind: IconKind,
    pub resolver: Box<dyn ThemeResolver>,
    pub size_dp: u32,
    pub padding_dp: u32,
    pub density: Density,
    pub on_change: Option<ChangeListener<S>>,
    pub on_animation_end: Option<AnimationEndListener<S>>,
}

impl<S: RenderSurface> FavoriteButton<S> {
    /// Create an unfavorited black star button with default timings
    pub fn new(surface: S) -> Self {
        Self::from_parts(
            Parts {
                id: WidgetId::default(),
                favorite: false,
                animate_favorite: true,
                animate_unfavorite: false,
                animation: AnimationConfig::default(),
                icons: MaterialIcons.resolve_icons(IconColor::Black, IconKind::Star),
                color: IconColor::Black,
                kind: IconKind::Star,
                resolver: Box::new(MaterialIcons),
                size_dp: DEFAULT_BUTTON_SIZE_DP,
                padding_dp: DEFAULT_PADDING_DP,
                density: Density::MDPI,
                on_change: None,
                on_animation_end: None,
            },
            surface,
        )
    }

    pub fn builder() -> FavoriteButtonBuilder<S> {
        FavoriteButtonBuilder::new()
    }

    /// Assemble a button and render its initial state. No listener fires.
    pub(super) fn from_parts(parts: Parts<S>, surface: S) -> Self {
        let mut button = Self {
            id: parts.id,
            favorite: parts.favorite,
            broadcasting: false,
            animate_favorite: parts.animate_favorite,
            animate_unfavorite: parts.animate_unfavorite,
            animation: parts.animation,
            icons: parts.icons,
            color: parts.color,
            kind: parts.kind,
            resolver: parts.resolver,
            size_dp: parts.size_dp,
            padding_dp: parts.padding_dp,
            density: parts.density,
            sequencer: AnimationSequencer::new(),
            surface,
            on_change: parts.on_change,
            on_animation_end: parts.on_animation_end,
            pending_ends: VecDeque::new(),
            delivering_end: false,
            refresh_pending: false,
        };
        button.push_geometry();
        button.refresh_icon();
        button.surface.set_transform(IconTransform::IDENTITY);
        button
    }

    /// Assign the host's identifier for this widget
    pub fn with_id(mut self, id: WidgetId) -> Self {
        self.id = id;
        self
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Whether a change is currently being broadcast to listeners
    pub fn is_broadcasting(&self) -> bool {
        self.broadcasting
    }

    /// Whether a transition animation is still playing
    pub fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Stage of the transition animation in flight
    pub fn phase(&self) -> Option<Phase> {
        self.sequencer.phase()
    }

    /// Change the state, animating per the direction's animate flag
    pub fn set_favorite(&mut self, favorite: bool) {
        let animated = self.animate_flag_for(favorite);
        self.set_favorite_with(favorite, animated, false);
    }

    /// Change the state with animation regardless of the animate flags
    pub fn set_favorite_animated(&mut self, favorite: bool) {
        self.set_favorite_with(favorite, true, false);
    }

    /// Change the state without calling the change listener
    pub fn set_favorite_suppress_listener(&mut self, favorite: bool) {
        let animated = self.animate_flag_for(favorite);
        self.set_favorite_with(favorite, animated, true);
    }

    /// Flip the state. `animated` overrides the direction's animate flag for
    /// this call only.
    pub fn toggle(&mut self, animated: Option<bool>) {
        let target = !self.favorite;
        let animated = animated.unwrap_or_else(|| self.animate_flag_for(target));
        self.set_favorite_with(target, animated, false);
    }

    /// Apply a state change request.
    ///
    /// Does nothing if `favorite` is already the current state or if a change
    /// is being broadcast. Otherwise commits the state, notifies the change
    /// listener (unless suppressed), and then renders the change, either at
    /// once or by starting the transition animation.
    ///
    /// If a transition is still animating, it is settled first: its last
    /// frame is rendered and its animation-end listener fires before the new
    /// change is committed.
    pub fn set_favorite_with(&mut self, favorite: bool, animated: bool, suppress_listener: bool) {
        if self.favorite == favorite {
            tracing::trace!(id = ?self.id, favorite, "favorite unchanged");
            return;
        }
        if self.broadcasting {
            tracing::trace!(id = ?self.id, favorite, "ignoring request made while broadcasting");
            return;
        }

        self.broadcasting = true;

        let settled = self.sequencer.finish_now();
        self.apply(settled);

        self.favorite = favorite;
        tracing::debug!(id = ?self.id, favorite, animated, suppress_listener, "favorite changed");

        if !suppress_listener {
            self.notify_change(favorite);
        }

        if animated {
            let icon = self.icons.for_state(favorite).clone();
            let events = self.sequencer.run_transition(favorite, icon, self.animation);
            self.apply(events);
        } else {
            self.refresh_pending = false;
            self.surface.set_icon(self.icons.for_state(favorite));
            self.surface.set_transform(IconTransform::IDENTITY);
            self.notify_animation_end(favorite);
        }

        self.broadcasting = false;
    }

    fn animate_flag_for(&self, favorite: bool) -> bool {
        if favorite {
            self.animate_favorite
        } else {
            self.animate_unfavorite
        }
    }

    /// Advance the transition animation by `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: f32) {
        let events = self.sequencer.tick(dt_ms);
        self.apply(events);
    }

    fn apply(&mut self, events: SequencerEvents) {
        for event in events {
            match event {
                SequencerEvent::SwapIcon(icon) => self.surface.set_icon(&icon),
                SequencerEvent::Frame(transform) => self.surface.set_transform(transform),
                SequencerEvent::Completed(favorite) => {
                    if std::mem::take(&mut self.refresh_pending) {
                        self.surface.set_icon(self.icons.for_state(self.favorite));
                    }
                    self.notify_animation_end(favorite);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    pub fn set_on_favorite_change<F>(&mut self, listener: F)
    where
        F: FnMut(&mut FavoriteButton<S>, bool) + 'static,
    {
        self.on_change = Some(Box::new(listener));
    }

    pub fn clear_on_favorite_change(&mut self) {
        self.on_change = None;
    }

    pub fn set_on_animation_end<F>(&mut self, listener: F)
    where
        F: FnMut(&mut FavoriteButton<S>, bool) + 'static,
    {
        self.on_animation_end = Some(Box::new(listener));
    }

    pub fn clear_on_animation_end(&mut self) {
        self.on_animation_end = None;
    }

    fn notify_change(&mut self, favorite: bool) {
        // Taken out while running so the listener can borrow the button
        if let Some(mut listener) = self.on_change.take() {
            listener(self, favorite);
            if self.on_change.is_none() {
                self.on_change = Some(listener);
            }
        }
    }

    /// Deliver a completion. A completion raised while the listener is
    /// running (by a change the listener itself made) is delivered after it
    /// returns.
    fn notify_animation_end(&mut self, favorite: bool) {
        self.pending_ends.push_back(favorite);
        if self.delivering_end {
            return;
        }

        self.delivering_end = true;
        while let Some(favorite) = self.pending_ends.pop_front() {
            if let Some(mut listener) = self.on_animation_end.take() {
                listener(self, favorite);
                if self.on_animation_end.is_none() {
                    self.on_animation_end = Some(listener);
                }
            }
        }
        self.delivering_end = false;
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn animate_favorite(&self) -> bool {
        self.animate_favorite
    }

    pub fn set_animate_favorite(&mut self, animate: bool) {
        self.animate_favorite = animate;
    }

    pub fn animate_unfavorite(&self) -> bool {
        self.animate_unfavorite
    }

    pub fn set_animate_unfavorite(&mut self, animate: bool) {
        self.animate_unfavorite = animate;
    }

    pub fn animation_config(&self) -> AnimationConfig {
        self.animation
    }

    /// Replace the timing used by the next transition
    pub fn set_animation_config(&mut self, config: AnimationConfig) {
        self.animation = config;
    }

    pub fn set_rotation_duration(&mut self, ms: i64) -> Result<()> {
        self.animation = self.animation.with_rotation_duration(ms)?;
        Ok(())
    }

    pub fn set_rotation_angle(&mut self, degrees: i64) -> Result<()> {
        self.animation = self.animation.with_rotation_angle(degrees)?;
        Ok(())
    }

    pub fn set_bounce_duration(&mut self, ms: i64) -> Result<()> {
        self.animation = self.animation.with_bounce_duration(ms)?;
        Ok(())
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Use explicit icons instead of the themed ones
    pub fn set_icons(&mut self, icons: IconSet) {
        self.icons = icons;
    }

    pub fn set_favorite_icon(&mut self, icon: IconId) {
        self.icons.favorited = icon;
    }

    pub fn set_unfavorite_icon(&mut self, icon: IconId) {
        self.icons.unfavorited = icon;
    }

    pub fn color(&self) -> IconColor {
        self.color
    }

    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Re-resolve the icons for a style
    pub fn set_theme(&mut self, color: IconColor, kind: IconKind) {
        self.color = color;
        self.kind = kind;
        self.icons = self.resolver.resolve_icons(color, kind);
    }

    pub fn set_color(&mut self, color: IconColor) {
        self.set_theme(color, self.kind);
    }

    pub fn set_kind(&mut self, kind: IconKind) {
        self.set_theme(self.color, kind);
    }

    /// Show the current state's icon. While a transition is playing the
    /// refresh is held until it completes, so the transition's own icon swap
    /// is not overwritten.
    pub fn refresh_icon(&mut self) {
        if self.sequencer.is_running() {
            tracing::trace!(id = ?self.id, "icon refresh deferred until transition ends");
            self.refresh_pending = true;
            return;
        }
        self.refresh_pending = false;
        self.surface.set_icon(self.icons.for_state(self.favorite));
    }

    pub fn size_px(&self) -> u32 {
        self.density.dp_to_px(self.size_dp)
    }

    pub fn padding_px(&self) -> u32 {
        self.density.dp_to_px(self.padding_dp)
    }

    pub fn set_size_dp(&mut self, size: i64) -> Result<()> {
        self.size_dp = dimension_dp("size", size)?;
        self.push_geometry();
        Ok(())
    }

    pub fn set_padding_dp(&mut self, padding: i64) -> Result<()> {
        self.padding_dp = dimension_dp("padding", padding)?;
        self.push_geometry();
        Ok(())
    }

    pub fn set_density(&mut self, density: Density) {
        self.density = density;
        self.push_geometry();
    }

    fn push_geometry(&mut self) {
        let (size, padding) = (self.size_px(), self.padding_px());
        self.surface.set_geometry(size, padding);
    }

    // ------------------------------------------------------------------
    // Surface
    // ------------------------------------------------------------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: RenderSurface> Widget for FavoriteButton<S> {
    fn id(&self) -> WidgetId {
        self.id
    }

    /// Clicks and activation keys toggle the state
    fn handle_event(&mut self, event: &Event) -> bool {
        if !event.is_activation() {
            return false;
        }
        self.toggle(None);
        true
    }

    fn update(&mut self, dt_ms: f32) {
        FavoriteButton::update(self, dt_ms);
    }

    fn is_animating(&self) -> bool {
        FavoriteButton::is_animating(self)
    }
}
