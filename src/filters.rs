//! Position smoothing filters for marker placement.
//!
//! Raw iris landmarks jitter by a pixel or two between detection cycles.
//! Smoothing is optional and off by default; the unfiltered path is the
//! reference behavior.

use crate::{Error, Result};
use nalgebra::Point3;

/// Trait for marker position filters
pub trait PositionFilter: Send + Sync {
    /// Apply the filter to a raw world-space position
    fn apply(&mut self, position: Point3<f64>) -> Point3<f64>;

    /// Reset filter state (call when tracking is lost)
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes positions through unchanged
pub struct NoFilter;

impl PositionFilter for NoFilter {
    fn apply(&mut self, position: Point3<f64>) -> Point3<f64> {
        position
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Exponential smoothing filter
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<Point3<f64>>,
}

impl ExponentialFilter {
    /// Create a new exponential filter
    ///
    /// # Panics
    ///
    /// Panics if alpha is not in the range (0, 1]
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, last: None }
    }
}

impl PositionFilter for ExponentialFilter {
    fn apply(&mut self, position: Point3<f64>) -> Point3<f64> {
        let filtered = match self.last {
            Some(last) => last + (position - last) * self.alpha,
            None => position,
        };
        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}

/// Create a position filter by type name
pub fn create_filter(filter_type: &str, alpha: f64) -> Result<Box<dyn PositionFilter>> {
    match filter_type.to_lowercase().as_str() {
        "none" | "nofilter" => Ok(Box::new(NoFilter)),
        "exponential" => Ok(Box::new(ExponentialFilter::new(alpha))),
        _ => Err(Error::FilterError(format!(
            "Unknown filter type: {filter_type}"
        ))),
    }
}
