//! Mapping of normalized landmarks into the render camera's world space.

use crate::landmarks::Landmark;
use nalgebra::Point3;

/// Pinhole-style projection parameters for the static render camera.
///
/// Maps a mirrored, top-left-origin normalized input space into a
/// right-handed, center-origin world space at a fixed reference depth.
#[derive(Debug, Clone, Copy)]
pub struct CameraProjection {
    /// Vertical field of view in radians
    fov_y: f64,
    /// Width / height
    aspect: f64,
    /// Fixed depth matching the scene's static camera distance
    reference_depth: f64,
}

impl CameraProjection {
    /// Create a projection from a field of view given in degrees
    #[must_use]
    pub fn new(fov_y_degrees: f64, aspect: f64, reference_depth: f64) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            reference_depth,
        }
    }

    /// Height of the visible frustum slice at the reference depth
    #[must_use]
    pub fn visible_height(&self) -> f64 {
        2.0 * (self.fov_y / 2.0).tan() * self.reference_depth
    }

    /// Width of the visible frustum slice at the reference depth
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        self.visible_height() * self.aspect
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    #[must_use]
    pub fn reference_depth(&self) -> f64 {
        self.reference_depth
    }

    /// Recompute the aspect ratio for a new viewport size
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = f64::from(width) / f64::from(height);
        }
    }

    /// Map a normalized landmark into world space.
    ///
    /// X and Y are negated to account for the mirrored, top-left-origin
    /// input; Z uses the visible width as an approximate uniform scale.
    /// No clamping: out-of-range inputs propagate as out-of-frustum world
    /// points and are clipped visually by the pipeline, by contract.
    #[must_use]
    pub fn to_world(&self, landmark: &Landmark) -> Point3<f64> {
        let vh = self.visible_height();
        let vw = vh * self.aspect;
        Point3::new(
            -(landmark.x - 0.5) * vw,
            -(landmark.y - 0.5) * vh,
            -landmark.z * vw,
        )
    }

    /// Project a world point back to normalized frame coordinates.
    ///
    /// Inverse of [`Self::to_world`] for the x/y components; used by the
    /// headless pipeline to rasterize markers.
    #[must_use]
    pub fn to_normalized(&self, point: &Point3<f64>) -> (f64, f64) {
        let vh = self.visible_height();
        let vw = vh * self.aspect;
        (0.5 - point.x / vw, 0.5 - point.y / vh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_optical_axis() {
        let proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        let world = proj.to_world(&Landmark::new(0.5, 0.5, 0.0));
        assert!(world.x.abs() < 1e-12);
        assert!(world.y.abs() < 1e-12);
        assert!(world.z.abs() < 1e-12);
    }

    #[test]
    fn test_reference_scenario() {
        // fovY = 75 deg, aspect 16:9, d = 5
        let proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        let vh = proj.visible_height();
        let vw = proj.visible_width();
        assert!((vh - 7.673).abs() < 0.01);
        assert!((vw - 13.641).abs() < 0.02);

        let world = proj.to_world(&Landmark::new(0.25, 0.5, 0.0));
        assert!((world.x - 0.25 * vw).abs() < 1e-9);
        assert!(world.y.abs() < 1e-12);
        assert!(world.x > 3.3 && world.x < 3.5);
    }

    #[test]
    fn test_depth_scales_linearly() {
        let near = CameraProjection::new(60.0, 1.5, 2.0);
        let far = CameraProjection::new(60.0, 1.5, 6.0);
        assert!((far.visible_height() - 3.0 * near.visible_height()).abs() < 1e-9);
        assert!((far.visible_width() - 3.0 * near.visible_width()).abs() < 1e-9);

        let lm = Landmark::new(0.1, 0.9, 0.05);
        let a = near.to_world(&lm);
        let b = far.to_world(&lm);
        assert!((b.x - 3.0 * a.x).abs() < 1e-9);
        assert!((b.y - 3.0 * a.y).abs() < 1e-9);
        assert!((b.z - 3.0 * a.z).abs() < 1e-9);
    }

    #[test]
    fn test_mirroring_signs() {
        let proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        // Right half of the frame lands on negative world X
        let right = proj.to_world(&Landmark::new(0.75, 0.5, 0.0));
        assert!(right.x < 0.0);
        // Lower half of the frame lands on negative world Y
        let low = proj.to_world(&Landmark::new(0.5, 0.75, 0.0));
        assert!(low.y < 0.0);
        // Positive relative depth lands behind the reference plane
        let deep = proj.to_world(&Landmark::new(0.5, 0.5, 0.1));
        assert!(deep.z < 0.0);
    }

    #[test]
    fn test_out_of_range_propagates() {
        let proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        let world = proj.to_world(&Landmark::new(1.5, -0.25, 2.0));
        assert!(world.x.is_finite() && world.y.is_finite() && world.z.is_finite());
        assert!(world.x < -proj.visible_width() / 2.0);
        assert!(world.y > proj.visible_height() / 2.0);
    }

    #[test]
    fn test_normalized_round_trip() {
        let proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        let lm = Landmark::new(0.3, 0.8, 0.0);
        let (x, y) = proj.to_normalized(&proj.to_world(&lm));
        assert!((x - 0.3).abs() < 1e-12);
        assert!((y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut proj = CameraProjection::new(75.0, 16.0 / 9.0, 5.0);
        proj.resize(800, 800);
        assert!((proj.aspect() - 1.0).abs() < 1e-12);
        // Zero height is ignored rather than producing a NaN aspect
        proj.resize(800, 0);
        assert!((proj.aspect() - 1.0).abs() < 1e-12);
    }
}
