//! Head orientation estimation from anchor landmarks.

use crate::constants::DEGENERACY_EPSILON;
use nalgebra::{Point3, Unit, Vector3};

/// An orthonormal basis describing head orientation.
///
/// Computed every frame from the chin/forehead/temple anchors. Currently
/// advisory: marker geometry is rotation-invariant, so the basis is not
/// applied to marker transforms. It is kept as an extension point for
/// orientation-sensitive effects.
#[derive(Debug, Clone, Copy)]
pub struct HeadPose {
    pub right: Unit<Vector3<f64>>,
    pub up: Unit<Vector3<f64>>,
    pub forward: Unit<Vector3<f64>>,
}

impl HeadPose {
    /// Default basis aligned with the world axes
    #[must_use]
    pub fn identity() -> Self {
        Self {
            right: Vector3::x_axis(),
            up: Vector3::y_axis(),
            forward: Vector3::z_axis(),
        }
    }

    /// Derive a basis from the four anchor world points.
    ///
    /// The raw up (chin to forehead) and right (temple to temple) vectors
    /// are not orthogonal for noisy landmarks, so the up axis is recomputed
    /// from the forward/right pair after the cross product. Returns `None`
    /// when any intermediate vector is degenerate (coincident anchors or a
    /// collinear quadruple); the caller retains its previous pose.
    #[must_use]
    pub fn from_anchors(
        chin: &Point3<f64>,
        forehead: &Point3<f64>,
        left_temple: &Point3<f64>,
        right_temple: &Point3<f64>,
    ) -> Option<Self> {
        let up_raw = normalize(forehead - chin)?;
        let right_raw = normalize(right_temple - left_temple)?;
        let forward = normalize(right_raw.cross(&up_raw))?;
        let up = normalize(forward.cross(&right_raw))?;

        Some(Self {
            right: Unit::new_unchecked(right_raw),
            up: Unit::new_unchecked(up),
            forward: Unit::new_unchecked(forward),
        })
    }

    /// Maximum deviation from orthonormality across the three axes
    #[must_use]
    pub fn orthonormality_error(&self) -> f64 {
        let r = self.right.into_inner();
        let u = self.up.into_inner();
        let f = self.forward.into_inner();
        [
            r.dot(&u).abs(),
            r.dot(&f).abs(),
            u.dot(&f).abs(),
            (r.norm() - 1.0).abs(),
            (u.norm() - 1.0).abs(),
            (f.norm() - 1.0).abs(),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

fn normalize(v: Vector3<f64>) -> Option<Vector3<f64>> {
    let norm_sq = v.norm_squared();
    if norm_sq < DEGENERACY_EPSILON {
        return None;
    }
    Some(v / norm_sq.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_aligned_anchors() {
        // Re-orthogonalization must be a no-op for orthogonal inputs
        let pose = HeadPose::from_anchors(
            &Point3::new(0.0, -1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(-1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        )
        .unwrap();

        assert!((pose.right.into_inner() - Vector3::x()).norm() < 1e-12);
        assert!((pose.up.into_inner() - Vector3::y()).norm() < 1e-12);
        // forward = right x up under this sign convention
        assert!((pose.forward.into_inner() - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_noisy_anchors_are_orthonormalized() {
        // Tilted head with anchors that are deliberately not orthogonal
        let pose = HeadPose::from_anchors(
            &Point3::new(0.1, -0.9, 0.2),
            &Point3::new(-0.05, 1.1, 0.15),
            &Point3::new(-1.0, 0.12, -0.1),
            &Point3::new(0.95, -0.08, 0.05),
        )
        .unwrap();

        assert!(pose.orthonormality_error() < 1e-9);
    }

    #[test]
    fn test_coincident_anchors_are_degenerate() {
        let p = Point3::new(0.3, 0.3, 0.3);
        assert!(HeadPose::from_anchors(
            &p,
            &p,
            &Point3::new(-1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        )
        .is_none());

        assert!(HeadPose::from_anchors(
            &Point3::new(0.0, -1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &p,
            &p,
        )
        .is_none());
    }

    #[test]
    fn test_parallel_axes_are_degenerate() {
        // up_raw and right_raw parallel -> zero cross product
        assert!(HeadPose::from_anchors(
            &Point3::new(0.0, -1.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(0.0, -0.5, 0.0),
            &Point3::new(0.0, 0.5, 0.0),
        )
        .is_none());
    }

    #[test]
    fn test_identity_is_orthonormal() {
        assert!(HeadPose::identity().orthonormality_error() < 1e-15);
    }
}
