//! Ideal pinhole camera and flat-ground coverage math.
//!
//! The camera looks straight down at a planar surface, so the footprint of an
//! image grows linearly with the distance to that surface and every other
//! coverage quantity (GSD, image spacing, blur-limited speed) follows from it.

use nalgebra::{Matrix3, Point2, Point3, Vector2};
use serde::{Deserialize, Serialize};

use crate::GeometryError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Intrinsic parameters of an ideal (distortion-free) pinhole camera.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Focal length along x, in pixels.
    pub fx: f64,
    /// Focal length along y, in pixels.
    pub fy: f64,
    /// Principal point x coordinate, in pixels.
    pub cx: f64,
    /// Principal point y coordinate, in pixels.
    pub cy: f64,
    /// Physical sensor width, in millimeters.
    pub sensor_size_x_mm: f64,
    /// Physical sensor height, in millimeters.
    pub sensor_size_y_mm: f64,
    /// Image width, in pixels.
    pub image_size_x_px: u32,
    /// Image height, in pixels.
    pub image_size_y_px: u32,
}

impl Camera {
    /// Check that every length and pixel count is finite and strictly positive.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let positive = [
            ("fx", self.fx),
            ("fy", self.fy),
            ("sensor_size_x_mm", self.sensor_size_x_mm),
            ("sensor_size_y_mm", self.sensor_size_y_mm),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidCamera { field, value });
            }
        }
        for (field, value) in [("cx", self.cx), ("cy", self.cy)] {
            if !value.is_finite() {
                return Err(GeometryError::InvalidCamera { field, value });
            }
        }
        image_size(self)?;
        Ok(())
    }

    /// The 3x3 intrinsics matrix `K`.
    pub fn intrinsics_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0, self.cx, //
            0.0, self.fy, self.cy, //
            0.0, 0.0, 1.0,
        )
    }

    /// Project a camera-frame point into pixel coordinates.
    ///
    /// Fails when the point lies on or behind the image plane (`z <= 0`).
    #[inline]
    pub fn project(&self, p: &Point3<f64>) -> Result<Point2<f64>, GeometryError> {
        if p.z.is_nan() || p.z <= 0.0 {
            return Err(GeometryError::PointBehindCamera { z: p.z });
        }
        Ok(Point2::new(
            self.fx * p.x / p.z + self.cx,
            self.fy * p.y / p.z + self.cy,
        ))
    }
}

/// Sensor resolution as floats, rejecting zero pixel counts.
fn image_size(camera: &Camera) -> Result<Vector2<f64>, GeometryError> {
    if camera.image_size_x_px == 0 || camera.image_size_y_px == 0 {
        return Err(GeometryError::NonPositiveImageSize {
            width: camera.image_size_x_px,
            height: camera.image_size_y_px,
        });
    }
    Ok(Vector2::new(
        camera.image_size_x_px as f64,
        camera.image_size_y_px as f64,
    ))
}

/// Project a world point `[X, Y, Z]` (camera frame, meters) to pixel `(u, v)`.
///
/// `u = fx * X / Z + cx`, `v = fy * Y / Z + cy`.
///
/// The slice must hold exactly three coordinates. Use [`Camera::project`] when
/// the point is already a typed `Point3`.
pub fn project_world_point_to_image(
    camera: &Camera,
    point: &[f64],
) -> Result<Point2<f64>, GeometryError> {
    let &[x, y, z] = point else {
        return Err(GeometryError::PointDimension { len: point.len() });
    };
    camera.project(&Point3::new(x, y, z))
}

/// Focal length in millimeters, `[f_mm_x, f_mm_y]`.
///
/// Uses the sensor pitch (`sensor_size_mm / image_size_px`) along each axis.
pub fn compute_focal_length_in_mm(camera: &Camera) -> Result<Vector2<f64>, GeometryError> {
    let size = image_size(camera)?;
    Ok(Vector2::new(
        camera.fx * camera.sensor_size_x_mm / size.x,
        camera.fy * camera.sensor_size_y_mm / size.y,
    ))
}

/// Ground footprint `[width, height]` in meters of one image taken at
/// `distance_from_surface` meters above flat ground.
///
/// `footprint = d * sensor_size_mm / f_mm`, which reduces to
/// `d * image_size_px / f_px` on each axis.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(camera)))]
pub fn compute_image_footprint_on_surface(
    camera: &Camera,
    distance_from_surface: f64,
) -> Result<Vector2<f64>, GeometryError> {
    if !distance_from_surface.is_finite() || distance_from_surface <= 0.0 {
        return Err(GeometryError::NonPositiveDistance {
            distance: distance_from_surface,
        });
    }
    let focal_ok = |f: f64| f.is_finite() && f > 0.0;
    if !focal_ok(camera.fx) || !focal_ok(camera.fy) {
        return Err(GeometryError::NonPositiveFocalLength {
            fx: camera.fx,
            fy: camera.fy,
        });
    }
    let size = image_size(camera)?;
    Ok(Vector2::new(
        distance_from_surface * size.x / camera.fx,
        distance_from_surface * size.y / camera.fy,
    ))
}

/// Ground sampling distance in meters per pixel at `distance_from_surface`.
///
/// Returns the smaller (finer) of the two axes.
pub fn compute_ground_sampling_distance(
    camera: &Camera,
    distance_from_surface: f64,
) -> Result<f64, GeometryError> {
    let footprint = compute_image_footprint_on_surface(camera, distance_from_surface)?;
    let size = image_size(camera)?;
    Ok((footprint.x / size.x).min(footprint.y / size.y))
}
