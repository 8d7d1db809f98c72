use serde::{Deserialize, Serialize};

/// Motion blur tolerated during one exposure when no override is given.
pub const DEFAULT_ALLOWED_MOVEMENT_PX: f64 = 1.0;

/// Parameters of the coverage planner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerParams {
    /// Maximum ground displacement during one exposure, in pixels of the
    /// finer GSD axis. Bounds the capture speed.
    pub allowed_movement_px: f64,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            allowed_movement_px: DEFAULT_ALLOWED_MOVEMENT_PX,
        }
    }
}
