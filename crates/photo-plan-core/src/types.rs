use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// User specification of the image dataset to capture.
///
/// Plain record: the planner validates it before computing anything.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Fractional overlap between consecutive images along a row, in `[0, 1)`.
    pub overlap: f64,
    /// Fractional overlap between adjacent rows, in `[0, 1)`.
    pub sidelap: f64,
    /// Flight height above the (flat) surface, in meters.
    pub height: f64,
    /// Survey area extent along x, in meters.
    pub scan_dimension_x: f64,
    /// Survey area extent along y, in meters.
    pub scan_dimension_y: f64,
    /// Shutter open time per capture, in milliseconds.
    pub exposure_time_ms: f64,
}

/// A capture pose: fly to `(x, y, z)` and take a photo while moving at `speed`.
///
/// Coordinates are meters in the survey-local ground frame, `speed` is m/s.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub speed: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, z: f64, speed: f64) -> Self {
        Self { x, y, z, speed }
    }

    #[inline]
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}
