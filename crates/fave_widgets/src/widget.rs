//! Base widget trait and types

use fave_core::events::Event;

pub use fave_core::WidgetId;

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event. Returns true if the widget consumed it.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Advance animations by `dt_ms` milliseconds (call each frame)
    fn update(&mut self, dt_ms: f32);

    /// Whether the widget still needs frames
    fn is_animating(&self) -> bool;
}
