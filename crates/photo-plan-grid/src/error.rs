use photo_plan_core::{ErrorKind, GeometryError};

/// Errors returned by the coverage planner.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("{name} must be in [0, 1) (got {value})")]
    InvalidOverlap { name: &'static str, value: f64 },
    #[error("image spacing must be > 0 m (got [{x}, {y}])")]
    NonPositiveSpacing { x: f64, y: f64 },
    #[error("exposure time must be finite and > 0 ms (got {exposure_time_ms})")]
    NonPositiveExposure { exposure_time_ms: f64 },
    #[error("allowed movement must be finite and > 0 px (got {allowed_movement_px})")]
    NonPositiveMovement { allowed_movement_px: f64 },
    #[error("{name} must be finite and >= 0 m (got {value})")]
    InvalidScanDimension { name: &'static str, value: f64 },
    #[error("grid of {num_cols} x {num_rows} images is too large")]
    GridTooLarge { num_cols: f64, num_rows: f64 },
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::Geometry(err) => err.kind(),
            _ => ErrorKind::Domain,
        }
    }
}
