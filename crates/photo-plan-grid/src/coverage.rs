//! Planning quantities derived from the camera footprint and GSD.

use nalgebra::Vector2;
use photo_plan_core::{
    compute_ground_sampling_distance, compute_image_footprint_on_surface, Camera, DatasetSpec,
};

use crate::PlanError;

fn check_fraction(name: &'static str, value: f64) -> Result<f64, PlanError> {
    if !(0.0..1.0).contains(&value) {
        return Err(PlanError::InvalidOverlap { name, value });
    }
    Ok(value)
}

/// Distance between neighbouring image centers, `[along row, across rows]`,
/// in meters at the configured flight height.
///
/// `spacing_x = footprint_x * (1 - overlap)`, `spacing_y = footprint_y * (1 - sidelap)`.
/// Overlap and sidelap must lie in `[0, 1)`: a fraction of one or more would
/// collapse the spacing and make the grid unbounded.
pub fn compute_distance_between_images(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
) -> Result<Vector2<f64>, PlanError> {
    let overlap = check_fraction("overlap", dataset_spec.overlap)?;
    let sidelap = check_fraction("sidelap", dataset_spec.sidelap)?;

    let footprint = compute_image_footprint_on_surface(camera, dataset_spec.height)?;
    let spacing = Vector2::new(footprint.x * (1.0 - overlap), footprint.y * (1.0 - sidelap));

    if !(spacing.x > 0.0 && spacing.y > 0.0 && spacing.x.is_finite() && spacing.y.is_finite()) {
        return Err(PlanError::NonPositiveSpacing {
            x: spacing.x,
            y: spacing.y,
        });
    }
    Ok(spacing)
}

/// Maximum vehicle speed (m/s) during a capture such that the ground moves by
/// at most `allowed_movement_px` pixels while the shutter is open.
///
/// `speed = gsd(height) * allowed_movement_px / exposure_time_s`.
pub fn compute_speed_during_photo_capture(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
    allowed_movement_px: f64,
) -> Result<f64, PlanError> {
    let exposure_time_ms = dataset_spec.exposure_time_ms;
    if !exposure_time_ms.is_finite() || exposure_time_ms <= 0.0 {
        return Err(PlanError::NonPositiveExposure { exposure_time_ms });
    }
    if !allowed_movement_px.is_finite() || allowed_movement_px <= 0.0 {
        return Err(PlanError::NonPositiveMovement {
            allowed_movement_px,
        });
    }

    let gsd = compute_ground_sampling_distance(camera, dataset_spec.height)?;
    let exposure_time_s = exposure_time_ms / 1000.0;
    Ok(gsd * allowed_movement_px / exposure_time_s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use photo_plan_core::{ErrorKind, GeometryError};

    fn camera() -> Camera {
        Camera {
            fx: 1000.0,
            fy: 1000.0,
            cx: 500.0,
            cy: 500.0,
            sensor_size_x_mm: 6.0,
            sensor_size_y_mm: 4.0,
            image_size_x_px: 1000,
            image_size_y_px: 667,
        }
    }

    fn spec(overlap: f64, sidelap: f64) -> DatasetSpec {
        DatasetSpec {
            overlap,
            sidelap,
            height: 10.0,
            scan_dimension_x: 100.0,
            scan_dimension_y: 50.0,
            exposure_time_ms: 2.0,
        }
    }

    #[test]
    fn zero_overlap_spacing_is_full_footprint() {
        let cam = camera();
        let spacing = compute_distance_between_images(&cam, &spec(0.0, 0.0)).expect("spacing");
        let footprint = compute_image_footprint_on_surface(&cam, 10.0).expect("footprint");
        assert_eq!(spacing, footprint);
    }

    #[test]
    fn spacing_shrinks_with_overlap() {
        let cam = camera();
        let spacing = compute_distance_between_images(&cam, &spec(0.75, 0.5)).expect("spacing");
        assert_relative_eq!(spacing.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(spacing.y, 3.335, epsilon = 1e-12);

        let mut previous = f64::INFINITY;
        for overlap in [0.9, 0.99, 0.999, 0.999_999] {
            let s = compute_distance_between_images(&cam, &spec(overlap, overlap)).expect("spacing");
            assert!(s.x > 0.0 && s.x < previous);
            previous = s.x;
        }
        assert!(previous < 1e-4);
    }

    #[test]
    fn overlap_of_one_or_more_is_domain_error() {
        let cam = camera();
        for (o, s, name) in [(1.0, 0.5, "overlap"), (0.5, 1.2, "sidelap"), (-0.1, 0.0, "overlap")] {
            let err = compute_distance_between_images(&cam, &spec(o, s)).unwrap_err();
            assert!(matches!(err, PlanError::InvalidOverlap { name: n, .. } if n == name));
            assert_eq!(err.kind(), ErrorKind::Domain);
        }
        let err = compute_distance_between_images(&cam, &spec(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidOverlap { .. }));
    }

    #[test]
    fn non_positive_height_surfaces_geometry_error() {
        let mut s = spec(0.5, 0.5);
        s.height = 0.0;
        let err = compute_distance_between_images(&camera(), &s).unwrap_err();
        assert_eq!(
            err,
            PlanError::Geometry(GeometryError::NonPositiveDistance { distance: 0.0 })
        );
    }

    #[test]
    fn speed_limits_blur_to_allowed_pixels() {
        let cam = camera();
        // gsd at 10 m is 1 cm/px; 2 ms exposure
        let speed = compute_speed_during_photo_capture(&cam, &spec(0.5, 0.5), 1.0).expect("speed");
        assert_relative_eq!(speed, 5.0, epsilon = 1e-9);

        let speed = compute_speed_during_photo_capture(&cam, &spec(0.5, 0.5), 3.0).expect("speed");
        assert_relative_eq!(speed, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn speed_is_inversely_proportional_to_exposure() {
        let cam = camera();
        let mut s = spec(0.5, 0.5);
        let base = compute_speed_during_photo_capture(&cam, &s, 1.0).expect("speed");
        for factor in [2.0, 4.0, 10.0] {
            s.exposure_time_ms = 2.0 * factor;
            let slower = compute_speed_during_photo_capture(&cam, &s, 1.0).expect("speed");
            assert!(slower > 0.0);
            assert_relative_eq!(slower * factor, base, max_relative = 1e-12);
        }
    }

    #[test]
    fn speed_rejects_bad_exposure_and_movement() {
        let cam = camera();
        let mut s = spec(0.5, 0.5);
        s.exposure_time_ms = 0.0;
        assert_eq!(
            compute_speed_during_photo_capture(&cam, &s, 1.0).unwrap_err(),
            PlanError::NonPositiveExposure {
                exposure_time_ms: 0.0
            }
        );
        assert_eq!(
            compute_speed_during_photo_capture(&cam, &spec(0.5, 0.5), -1.0).unwrap_err(),
            PlanError::NonPositiveMovement {
                allowed_movement_px: -1.0
            }
        );
    }
}
