/// Coarse error classification shared by every crate in the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed call-site argument (wrong vector shape, point behind the camera).
    InvalidInput,
    /// Mathematically undefined or physically nonsensical configuration.
    Domain,
}

/// Errors returned by the camera geometry functions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("point must have 3 components, got {len}")]
    PointDimension { len: usize },
    #[error("point is behind the camera or on the image plane (z={z})")]
    PointBehindCamera { z: f64 },
    #[error("image size must be > 0 px (got {width}x{height})")]
    NonPositiveImageSize { width: u32, height: u32 },
    #[error("focal length must be finite and > 0 px (fx={fx}, fy={fy})")]
    NonPositiveFocalLength { fx: f64, fy: f64 },
    #[error("distance from surface must be finite and > 0 m (got {distance})")]
    NonPositiveDistance { distance: f64 },
    #[error("invalid camera parameter `{field}` = {value}")]
    InvalidCamera { field: &'static str, value: f64 },
}

impl GeometryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeometryError::PointDimension { .. } | GeometryError::PointBehindCamera { .. } => {
                ErrorKind::InvalidInput
            }
            GeometryError::NonPositiveImageSize { .. }
            | GeometryError::NonPositiveFocalLength { .. }
            | GeometryError::NonPositiveDistance { .. }
            | GeometryError::InvalidCamera { .. } => ErrorKind::Domain,
        }
    }
}
