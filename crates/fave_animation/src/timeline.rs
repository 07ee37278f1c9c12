//! Timeline orchestration for multiple tweens

use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimelineEntryId;
}

/// An entry in a timeline
struct TimelineEntry {
    /// Offset in milliseconds from timeline start
    offset_ms: u32,
    tween: Tween,
}

impl TimelineEntry {
    fn end_ms(&self) -> u32 {
        self.offset_ms.saturating_add(self.tween.duration_ms())
    }
}

/// A timeline that orchestrates multiple tweens.
///
/// Entries may overlap; an entry placed at the end offset of another runs
/// strictly after it.
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, TimelineEntry>,
    /// Kept in f64 so single frames still register late in very long runs
    current_time: f64,
    duration_ms: u32,
    playing: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            current_time: 0.0,
            duration_ms: 0,
            playing: false,
        }
    }

    /// Add a tween to the timeline at a given offset
    pub fn add(&mut self, offset_ms: u32, tween: Tween) -> TimelineEntryId {
        let entry = TimelineEntry { offset_ms, tween };
        self.duration_ms = self.duration_ms.max(entry.end_ms());
        self.entries.insert(entry)
    }

    pub fn start(&mut self) {
        tracing::trace!(
            duration_ms = self.duration_ms,
            entries = self.entries.len(),
            "timeline start"
        );
        self.current_time = 0.0;
        self.playing = true;
    }

    /// Jump to the end, leaving every entry at its final value
    pub fn finish(&mut self) {
        self.current_time = f64::from(self.duration_ms);
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Milliseconds since `start`, capped at the duration
    pub fn elapsed_ms(&self) -> f64 {
        self.current_time
    }

    /// Total length: the latest end of any entry
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Advance the timeline
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += f64::from(dt_ms.max(0.0));

        let end = f64::from(self.duration_ms);
        if self.current_time >= end {
            self.current_time = end;
            self.playing = false;
        }
    }

    /// Get the current value for an entry
    pub fn value(&self, id: TimelineEntryId) -> Option<f32> {
        let entry = self.entries.get(id)?;
        let local_time = self.current_time - f64::from(entry.offset_ms);
        Some(entry.tween.value_at(local_time as f32))
    }

    /// Whether an entry has reached its final value
    pub fn has_finished(&self, id: TimelineEntryId) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| self.current_time >= f64::from(entry.end_ms()))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn test_sequential_entries() {
        let mut timeline = Timeline::new();
        let first = timeline.add(0, Tween::new(0.0, 100.0, 100, Easing::Linear));
        let second = timeline.add(100, Tween::new(1.0, 2.0, 50, Easing::Linear));
        assert_eq!(timeline.duration_ms(), 150);

        timeline.start();
        timeline.tick(50.0);
        assert_eq!(timeline.value(first), Some(50.0));
        assert_eq!(timeline.value(second), Some(1.0));
        assert!(!timeline.has_finished(first));

        timeline.tick(75.0);
        assert!(timeline.has_finished(first));
        assert!(!timeline.has_finished(second));
        assert_eq!(timeline.value(second), Some(1.5));

        timeline.tick(1_000.0);
        assert!(!timeline.is_playing());
        assert_eq!(timeline.elapsed_ms(), 150.0);
        assert_eq!(timeline.value(second), Some(2.0));
    }

    #[test]
    fn test_tick_ignored_when_stopped() {
        let mut timeline = Timeline::new();
        let id = timeline.add(0, Tween::new(0.0, 1.0, 10, Easing::Linear));
        timeline.tick(5.0);
        assert_eq!(timeline.value(id), Some(0.0));

        timeline.start();
        timeline.tick(15.0);
        assert!(!timeline.is_playing());
        timeline.tick(5.0);
        assert_eq!(timeline.elapsed_ms(), 10.0);
    }

    #[test]
    fn test_finish_jumps_to_end() {
        let mut timeline = Timeline::new();
        let id = timeline.add(20, Tween::new(0.2, 1.0, 30, Easing::POP));
        timeline.start();
        timeline.finish();
        assert!(timeline.has_finished(id));
        assert_eq!(timeline.value(id), Some(1.0));
    }

    #[test]
    fn test_empty_timeline_finishes_on_first_tick() {
        let mut timeline = Timeline::new();
        timeline.start();
        timeline.tick(0.0);
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_short_frames_still_advance_late_in_long_runs() {
        let mut timeline = Timeline::new();
        let id = timeline.add(0, Tween::new(0.0, 1.0, 300_000_000, Easing::Linear));
        timeline.start();

        // Past 2^28 ms a 16 ms step is below f32 resolution
        timeline.tick(268_435_456.0);
        timeline.tick(16.0);
        assert_eq!(timeline.elapsed_ms(), 268_435_472.0);

        timeline.tick(31_564_528.0);
        assert!(timeline.has_finished(id));
        assert!(!timeline.is_playing());
    }
}
