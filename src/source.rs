//! Landmark source interface and the synthetic test source.

use crate::config::TrackingConfig;
use crate::constants::{
    CHIN, FACE_LANDMARK_COUNT, FOREHEAD_TOP, LEFT_IRIS_CENTER, LEFT_TEMPLE, NOSE_TIP,
    RIGHT_IRIS_CENTER, RIGHT_TEMPLE,
};
use crate::landmarks::{FaceObservation, Landmark};
use crate::Result;

/// Interface to the external face landmark detector.
///
/// Detection runs at its own cadence, not synchronized to the render
/// loop; `poll` returns whatever the detector produced for its latest
/// cycle. Zero observations means no face was found — a normal condition,
/// not an error.
pub trait LandmarkSource {
    /// Begin the capture/detection loop
    fn start(&mut self) -> Result<()>;

    /// Observations from the most recent detection cycle
    fn poll(&mut self) -> Result<Vec<FaceObservation>>;
}

/// Deterministic synthetic face used by the demo binary and tests.
///
/// Emits a full-schema observation whose head center sways over time.
/// `dropout_interval` simulates tracking loss: every Nth cycle returns no
/// observations.
pub struct SyntheticSource {
    tracking: TrackingConfig,
    frame: u64,
    dropout_interval: Option<u64>,
    started: bool,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(tracking: TrackingConfig) -> Self {
        Self {
            tracking,
            frame: 0,
            dropout_interval: None,
            started: false,
        }
    }

    /// Drop every `interval`-th detection cycle
    #[must_use]
    pub fn with_dropout(mut self, interval: u64) -> Self {
        self.dropout_interval = Some(interval.max(1));
        self
    }

    /// Build one full-schema observation for a face centered at (cx, cy)
    #[must_use]
    pub fn observation_at(cx: f64, cy: f64) -> FaceObservation {
        let mut landmarks = vec![Landmark::new(cx, cy, 0.0); FACE_LANDMARK_COUNT];
        landmarks[LEFT_IRIS_CENTER] = Landmark::new(cx - 0.04, cy - 0.02, 0.01);
        landmarks[RIGHT_IRIS_CENTER] = Landmark::new(cx + 0.04, cy - 0.02, 0.01);
        landmarks[NOSE_TIP] = Landmark::new(cx, cy + 0.02, -0.02);
        landmarks[CHIN] = Landmark::new(cx, cy + 0.15, 0.0);
        landmarks[FOREHEAD_TOP] = Landmark::new(cx, cy - 0.15, 0.0);
        landmarks[LEFT_TEMPLE] = Landmark::new(cx - 0.12, cy, 0.03);
        landmarks[RIGHT_TEMPLE] = Landmark::new(cx + 0.12, cy, 0.03);
        FaceObservation::new(landmarks)
    }
}

impl LandmarkSource for SyntheticSource {
    fn start(&mut self) -> Result<()> {
        log::info!(
            "Starting synthetic source (max_faces={}, refine_landmarks={})",
            self.tracking.max_faces,
            self.tracking.refine_landmarks
        );
        self.started = true;
        Ok(())
    }

    fn poll(&mut self) -> Result<Vec<FaceObservation>> {
        if !self.started {
            return Err(crate::Error::SourceError(
                "poll called before start".to_string(),
            ));
        }

        let frame = self.frame;
        self.frame += 1;

        if let Some(interval) = self.dropout_interval {
            if frame % interval == interval - 1 {
                return Ok(vec![]);
            }
        }

        let t = frame as f64;
        let cx = 0.5 + 0.12 * (t * 0.05).sin();
        let cy = 0.5 + 0.06 * (t * 0.031).sin();

        let mut observations = vec![Self::observation_at(cx, cy)];
        observations.truncate(self.tracking.max_faces);
        Ok(observations)
    }
}
