//! Widget input events
//!
//! The host translates platform input into these events and hands them to
//! the widget that was hit.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a widget instance
    pub struct WidgetId;
}

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Pointer pressed and released over the same widget
    pub const CLICK: EventType = 8;
    pub const KEY_DOWN: EventType = 20;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { x: f32, y: f32, button: u8 },
    Key { key: KeyCode, repeat: bool },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    pub const UNKNOWN: KeyCode = KeyCode(0);

    /// Keys that activate a focused toggle
    pub fn activates(&self) -> bool {
        *self == Self::ENTER || *self == Self::SPACE
    }
}

impl Event {
    /// A primary-button click at the given position
    pub fn click(x: f32, y: f32) -> Self {
        Self {
            event_type: event_types::CLICK,
            data: EventData::Pointer { x, y, button: 0 },
            timestamp: 0,
        }
    }

    /// A key press
    pub fn key_down(key: KeyCode) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            data: EventData::Key { key, repeat: false },
            timestamp: 0,
        }
    }

    /// Attach a host timestamp
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether this event activates a toggle widget.
    ///
    /// Clicks always do; key presses do for Enter and Space unless they are
    /// auto-repeats.
    pub fn is_activation(&self) -> bool {
        match (self.event_type, &self.data) {
            (event_types::CLICK, _) => true,
            (event_types::KEY_DOWN, EventData::Key { key, repeat }) => key.activates() && !repeat,
            _ => false,
        }
    }
}
