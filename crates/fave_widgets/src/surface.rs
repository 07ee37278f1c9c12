//! Rendering surface
//!
//! The widget never paints. It tells a surface which icon to show and how to
//! transform it; the host decides what that looks like on screen.

use fave_theme::IconId;
use std::sync::{Arc, Mutex, MutexGuard};

/// Geometric transform applied to the icon about its center
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTransform {
    /// Rotation in degrees, positive is clockwise
    pub rotation_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl IconTransform {
    pub const IDENTITY: IconTransform = IconTransform {
        rotation_deg: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub fn rotated(rotation_deg: f32) -> Self {
        Self {
            rotation_deg,
            ..Self::IDENTITY
        }
    }
}

impl Default for IconTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Receives the widget's visual output
pub trait RenderSurface {
    /// Show an icon
    fn set_icon(&mut self, icon: &IconId);

    /// Apply a transform to the current icon
    fn set_transform(&mut self, transform: IconTransform);

    /// Resize the widget. Both values are physical pixels.
    fn set_geometry(&mut self, size_px: u32, padding_px: u32) {
        let _ = (size_px, padding_px);
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn set_icon(&mut self, icon: &IconId) {
        (**self).set_icon(icon);
    }

    fn set_transform(&mut self, transform: IconTransform) {
        (**self).set_transform(transform);
    }

    fn set_geometry(&mut self, size_px: u32, padding_px: u32) {
        (**self).set_geometry(size_px, padding_px);
    }
}

/// A call received by a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Icon(IconId),
    Transform(IconTransform),
    Geometry { size_px: u32, padding_px: u32 },
}

/// Surface that records every call, for headless hosts and tests.
///
/// Clones share the same log, so a host can keep a handle after moving the
/// surface into a widget.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<SurfaceCall>> {
        // A panic while holding the lock leaves the log usable
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all recorded calls
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.log().clone()
    }

    /// Remove and return all recorded calls
    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.log())
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    /// Icons shown so far, in order
    pub fn icons(&self) -> Vec<IconId> {
        self.log()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Icon(icon) => Some(icon.clone()),
                _ => None,
            })
            .collect()
    }

    /// Transforms applied so far, in order
    pub fn transforms(&self) -> Vec<IconTransform> {
        self.log()
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Transform(transform) => Some(*transform),
                _ => None,
            })
            .collect()
    }

    /// The most recently shown icon
    pub fn current_icon(&self) -> Option<IconId> {
        self.icons().pop()
    }

    /// The most recently applied transform
    pub fn current_transform(&self) -> Option<IconTransform> {
        self.transforms().pop()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_icon(&mut self, icon: &IconId) {
        self.log().push(SurfaceCall::Icon(icon.clone()));
    }

    fn set_transform(&mut self, transform: IconTransform) {
        self.log().push(SurfaceCall::Transform(transform));
    }

    fn set_geometry(&mut self, size_px: u32, padding_px: u32) {
        self.log().push(SurfaceCall::Geometry {
            size_px,
            padding_px,
        });
    }
}
