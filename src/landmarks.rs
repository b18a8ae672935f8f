//! Landmark data model for detected faces.
//!
//! Indices into an observation are an implicit contract with the external
//! landmark model's output schema (see [`crate::constants`]); a schema
//! change upstream is a breaking external-interface change.

use crate::constants::{
    CHIN, FOREHEAD_TOP, LEFT_IRIS_CENTER, LEFT_TEMPLE, REQUIRED_LANDMARKS, RIGHT_IRIS_CENTER,
    RIGHT_TEMPLE,
};

/// A single normalized facial landmark.
///
/// `x` and `y` are in [0, 1] relative to the frame; `z` is relative depth
/// on approximately the same scale as `x`. Values outside [0, 1] are legal
/// and map to out-of-frustum world points downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The four anchor landmarks used for head pose estimation
#[derive(Debug, Clone, Copy)]
pub struct AnchorSet {
    pub chin: Landmark,
    pub forehead: Landmark,
    pub left_temple: Landmark,
    pub right_temple: Landmark,
}

/// The complete landmark set for one detected face in one frame.
///
/// Landmarks carry no identity across frames beyond "same semantic facial
/// point"; observations are produced fresh each detection cycle.
#[derive(Debug, Clone)]
pub struct FaceObservation {
    landmarks: Vec<Landmark>,
}

impl FaceObservation {
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Number of landmarks in this observation
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark at a schema index, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Whether every index required for eye placement and pose estimation
    /// is present. Observations failing this check are skipped for the
    /// frame; this is fail-soft, not an error.
    #[must_use]
    pub fn has_required_landmarks(&self) -> bool {
        REQUIRED_LANDMARKS.iter().all(|&i| i < self.landmarks.len())
    }

    /// Left iris center landmark
    #[must_use]
    pub fn left_iris(&self) -> Option<&Landmark> {
        self.get(LEFT_IRIS_CENTER)
    }

    /// Right iris center landmark
    #[must_use]
    pub fn right_iris(&self) -> Option<&Landmark> {
        self.get(RIGHT_IRIS_CENTER)
    }

    /// The four pose anchors, or `None` if any is missing
    #[must_use]
    pub fn anchors(&self) -> Option<AnchorSet> {
        Some(AnchorSet {
            chin: *self.get(CHIN)?,
            forehead: *self.get(FOREHEAD_TOP)?,
            left_temple: *self.get(LEFT_TEMPLE)?,
            right_temple: *self.get(RIGHT_TEMPLE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FACE_LANDMARK_COUNT;

    fn full_observation() -> FaceObservation {
        let landmarks = (0..FACE_LANDMARK_COUNT)
            .map(|i| Landmark::new(i as f64 * 1e-3, 0.5, 0.0))
            .collect();
        FaceObservation::new(landmarks)
    }

    #[test]
    fn test_full_observation_is_valid() {
        let obs = full_observation();
        assert!(obs.has_required_landmarks());
        assert!(obs.left_iris().is_some());
        assert!(obs.right_iris().is_some());
        assert!(obs.anchors().is_some());
    }

    #[test]
    fn test_truncated_observation_is_invalid() {
        // Cut just below the left iris index
        let landmarks = (0..LEFT_IRIS_CENTER)
            .map(|_| Landmark::new(0.5, 0.5, 0.0))
            .collect();
        let obs = FaceObservation::new(landmarks);
        assert!(!obs.has_required_landmarks());
        assert!(obs.left_iris().is_none());
        // Anchors below the cut are still reachable
        assert!(obs.anchors().is_some());
    }

    #[test]
    fn test_empty_observation() {
        let obs = FaceObservation::new(vec![]);
        assert!(obs.is_empty());
        assert!(!obs.has_required_landmarks());
        assert!(obs.anchors().is_none());
    }

    #[test]
    fn test_index_accessors_match_schema() {
        let obs = full_observation();
        assert_eq!(obs.left_iris().unwrap().x, LEFT_IRIS_CENTER as f64 * 1e-3);
        assert_eq!(obs.right_iris().unwrap().x, RIGHT_IRIS_CENTER as f64 * 1e-3);
    }
}
