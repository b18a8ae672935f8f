//! Effect mode flags and eye marker state.

use crate::render::{MarkerId, RenderPipeline};
use nalgebra::Point3;

/// The two user-facing mode flags.
///
/// Flat two-flag model: each flag is toggled only by a dedicated user
/// action and has no other trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectState {
    /// Debug overlay drawn on top of the scene
    pub debug_visible: bool,
    /// Laser markers rendered at the tracked eye positions
    pub laser_enabled: bool,
}

impl Default for EffectState {
    /// Session start: debug off, laser on
    fn default() -> Self {
        Self {
            debug_visible: false,
            laser_enabled: true,
        }
    }
}

impl EffectState {
    pub fn toggle_debug(&mut self) -> bool {
        self.debug_visible = !self.debug_visible;
        self.debug_visible
    }

    pub fn toggle_laser(&mut self) -> bool {
        self.laser_enabled = !self.laser_enabled;
        self.laser_enabled
    }
}

/// One positionable, visibility-toggleable eye marker
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub position: Point3<f64>,
    pub visible: bool,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            visible: false,
        }
    }
}

/// The left/right eye marker pair.
///
/// Created once per session and never destroyed; per-frame updates
/// overwrite position and visibility in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerPair {
    pub left: Marker,
    pub right: Marker,
}

impl MarkerPair {
    /// Position both markers and make them visible
    pub fn show_at(&mut self, left: Point3<f64>, right: Point3<f64>) {
        self.left.position = left;
        self.left.visible = true;
        self.right.position = right;
        self.right.visible = true;
    }

    /// Force both markers invisible, keeping their last positions
    pub fn hide(&mut self) {
        self.left.visible = false;
        self.right.visible = false;
    }

    /// Push the pair's current state into a render pipeline
    pub fn apply<P: RenderPipeline + ?Sized>(&self, pipeline: &mut P) {
        pipeline.set_marker_transform(MarkerId::LeftEye, self.left.position);
        pipeline.set_marker_visible(MarkerId::LeftEye, self.left.visible);
        pipeline.set_marker_transform(MarkerId::RightEye, self.right.position);
        pipeline.set_marker_visible(MarkerId::RightEye, self.right.visible);
    }
}
