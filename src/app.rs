//! Per-frame orchestration and the UI bridge.

use crate::config::Config;
use crate::effect::{EffectState, MarkerPair};
use crate::filters::{create_filter, PositionFilter};
use crate::head_pose::HeadPose;
use crate::landmarks::FaceObservation;
use crate::projection::CameraProjection;
use crate::render::RenderPipeline;
use crate::Result;
use log::{debug, info};
use nalgebra::Point3;
use std::path::Path;

/// User-triggered actions, each reachable via a button and a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Toggle the debug overlay
    ToggleDebug,
    /// Toggle the laser effect
    ToggleLaser,
    /// Capture the current frame to an image file
    Capture,
}

impl UiAction {
    /// Map a key press to its action
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'd' => Some(Self::ToggleDebug),
            'l' => Some(Self::ToggleLaser),
            'c' => Some(Self::Capture),
            _ => None,
        }
    }
}

/// The application context: all scene and mode state, owned explicitly
/// for the process lifetime.
///
/// Detection updates ([`Self::on_detection`]) and draws
/// ([`Self::render_frame`]) run at independent cadences on one thread;
/// the pipeline always draws the most recently written marker state.
pub struct LaserEyeApp<P: RenderPipeline> {
    pipeline: P,
    projection: CameraProjection,
    effect: EffectState,
    markers: MarkerPair,
    pose: HeadPose,
    left_filter: Box<dyn PositionFilter>,
    right_filter: Box<dyn PositionFilter>,
}

impl<P: RenderPipeline> LaserEyeApp<P> {
    /// Create the application context from a validated configuration
    pub fn new(config: &Config, pipeline: P) -> Result<Self> {
        config.validate()?;

        let projection = CameraProjection::new(
            config.camera.fov_y_degrees,
            config.camera.aspect,
            config.camera.reference_depth,
        );

        let effect = EffectState {
            debug_visible: config.effect.debug_visible,
            laser_enabled: config.effect.laser_enabled,
        };

        let mut app = Self {
            pipeline,
            projection,
            effect,
            markers: MarkerPair::default(),
            pose: HeadPose::identity(),
            left_filter: create_filter(&config.effect.smoothing, config.effect.smoothing_alpha)?,
            right_filter: create_filter(&config.effect.smoothing, config.effect.smoothing_alpha)?,
        };
        app.pipeline.set_debug_visible(app.effect.debug_visible);
        Ok(app)
    }

    #[must_use]
    pub fn effect_state(&self) -> EffectState {
        self.effect
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerPair {
        &self.markers
    }

    /// Last successfully computed head pose
    #[must_use]
    pub fn head_pose(&self) -> &HeadPose {
        &self.pose
    }

    #[must_use]
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    #[must_use]
    pub fn pipeline_mut(&mut self) -> &mut P {
        &mut self.pipeline
    }

    /// Detection-result callback.
    ///
    /// Fail-soft by design: no face hides the markers, an observation
    /// missing a required landmark leaves marker state untouched, and a
    /// degenerate pose quadruple retains the previous pose. None of these
    /// are errors and tracking self-heals on the next good frame.
    pub fn on_detection(&mut self, observations: &[FaceObservation]) {
        let Some(observation) = observations.first() else {
            debug!("No face detected, hiding markers");
            self.markers.hide();
            self.left_filter.reset();
            self.right_filter.reset();
            self.markers.apply(&mut self.pipeline);
            return;
        };

        if !observation.has_required_landmarks() {
            debug!("Observation missing required landmarks, skipping frame");
            return;
        }

        // Required indices were just checked
        let left_iris = observation.left_iris();
        let right_iris = observation.right_iris();
        let (Some(left_iris), Some(right_iris)) = (left_iris, right_iris) else {
            return;
        };

        let left = self.left_filter.apply(self.projection.to_world(left_iris));
        let right = self
            .right_filter
            .apply(self.projection.to_world(right_iris));

        self.update_pose(observation);

        if self.effect.laser_enabled {
            self.markers.show_at(left, right);
        } else {
            self.markers.hide();
        }
        self.markers.apply(&mut self.pipeline);
    }

    fn update_pose(&mut self, observation: &FaceObservation) {
        let Some(anchors) = observation.anchors() else {
            return;
        };
        let chin = self.projection.to_world(&anchors.chin);
        let forehead = self.projection.to_world(&anchors.forehead);
        let left_temple = self.projection.to_world(&anchors.left_temple);
        let right_temple = self.projection.to_world(&anchors.right_temple);

        if let Some(pose) = HeadPose::from_anchors(&chin, &forehead, &left_temple, &right_temple) {
            self.pose = pose;
        } else {
            debug!("Degenerate pose anchors, retaining previous pose");
        }
    }

    /// Apply a user action.
    ///
    /// Visibility and overlay changes take effect immediately,
    /// independent of any concurrent landmark update.
    pub fn handle_action(&mut self, action: UiAction, capture_path: &Path) -> Result<()> {
        match action {
            UiAction::ToggleDebug => {
                let visible = self.effect.toggle_debug();
                info!("Debug overlay {}", if visible { "on" } else { "off" });
                self.pipeline.set_debug_visible(visible);
            }
            UiAction::ToggleLaser => {
                let enabled = self.effect.toggle_laser();
                info!("Laser effect {}", if enabled { "on" } else { "off" });
                if !enabled {
                    self.markers.hide();
                    self.markers.apply(&mut self.pipeline);
                }
            }
            UiAction::Capture => {
                self.capture(capture_path)?;
            }
        }
        Ok(())
    }

    /// Draw one frame from the most recently written state
    pub fn render_frame(&mut self) -> Result<()> {
        self.pipeline.render()
    }

    /// Capture the current frame to an image file.
    ///
    /// Forces one synchronous render before reading back pixels, so the
    /// capture reflects the latest marker state.
    pub fn capture<Q: AsRef<Path>>(&mut self, path: Q) -> Result<()> {
        self.pipeline.render()?;
        let frame = self.pipeline.read_pixels()?;
        frame.save(path.as_ref())?;
        info!("Captured frame to {}", path.as_ref().display());
        Ok(())
    }

    /// Viewport resize handler
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.pipeline.resize(width, height);
    }

    /// World position helper exposed for diagnostics
    #[must_use]
    pub fn projection(&self) -> &CameraProjection {
        &self.projection
    }

    /// Left and right marker world positions
    #[must_use]
    pub fn marker_positions(&self) -> (Point3<f64>, Point3<f64>) {
        (self.markers.left.position, self.markers.right.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(UiAction::from_key('d'), Some(UiAction::ToggleDebug));
        assert_eq!(UiAction::from_key('L'), Some(UiAction::ToggleLaser));
        assert_eq!(UiAction::from_key('c'), Some(UiAction::Capture));
        assert_eq!(UiAction::from_key('x'), None);
    }
}
