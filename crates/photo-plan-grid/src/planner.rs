use log::{debug, warn};
use photo_plan_core::{Camera, DatasetSpec, Waypoint};

use crate::coverage::{compute_distance_between_images, compute_speed_during_photo_capture};
use crate::{GridLayout, PlanError, PlannerParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Flight-order indices stay exactly representable as `f64`.
const MAX_GRID_WAYPOINTS: f64 = 9_007_199_254_740_992.0; // 2^53

/// Lawn-mower photo planner.
#[derive(Clone, Debug, Default)]
pub struct PhotoPlanner {
    params: PlannerParams,
}

impl PhotoPlanner {
    pub fn new(params: PlannerParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &PlannerParams {
        &self.params
    }

    /// Validate the inputs and compute the capture grid.
    ///
    /// Every check runs here, so a successful layout always expands into a
    /// complete plan.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, camera, dataset_spec),
            fields(
                height = dataset_spec.height,
                scan_x = dataset_spec.scan_dimension_x,
                scan_y = dataset_spec.scan_dimension_y
            )
        )
    )]
    pub fn layout(
        &self,
        camera: &Camera,
        dataset_spec: &DatasetSpec,
    ) -> Result<GridLayout, PlanError> {
        camera.validate()?;
        let spacing = compute_distance_between_images(camera, dataset_spec)?;
        let speed = compute_speed_during_photo_capture(
            camera,
            dataset_spec,
            self.params.allowed_movement_px,
        )?;

        let cols = line_count("scan_dimension_x", dataset_spec.scan_dimension_x, spacing.x)?;
        let rows = line_count("scan_dimension_y", dataset_spec.scan_dimension_y, spacing.y)?;
        if cols * rows > MAX_GRID_WAYPOINTS {
            return Err(PlanError::GridTooLarge {
                num_cols: cols,
                num_rows: rows,
            });
        }

        let layout = GridLayout {
            num_cols: cols as usize,
            num_rows: rows as usize,
            spacing: [spacing.x, spacing.y],
            height: dataset_spec.height,
            speed,
        };
        debug!(
            "grid {}x{} (spacing {:.3} x {:.3} m, speed {:.3} m/s, {} waypoints)",
            layout.num_cols,
            layout.num_rows,
            spacing.x,
            spacing.y,
            speed,
            layout.len()
        );
        Ok(layout)
    }

    /// Compute the full waypoint sequence.
    ///
    /// A layout too large to hold in memory fails with
    /// [`PlanError::GridTooLarge`]; use [`GridLayout::iter`] to stream it.
    #[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
    pub fn plan(
        &self,
        camera: &Camera,
        dataset_spec: &DatasetSpec,
    ) -> Result<Vec<Waypoint>, PlanError> {
        self.layout(camera, dataset_spec)?.to_vec()
    }
}

/// Number of capture lines needed to cover `dimension` at `spacing`.
///
/// A zero-sized dimension still gets one line.
fn line_count(name: &'static str, dimension: f64, spacing: f64) -> Result<f64, PlanError> {
    if !dimension.is_finite() || dimension < 0.0 {
        return Err(PlanError::InvalidScanDimension {
            name,
            value: dimension,
        });
    }
    if dimension == 0.0 {
        warn!("{name} is 0, planning a single line on that axis");
    }
    Ok((dimension / spacing).ceil().max(1.0))
}

/// Lawn-mower photo plan with the default 1 px blur budget.
///
/// Waypoints are ordered row by row; odd rows are reversed so the vehicle
/// sweeps back and forth.
pub fn generate_photo_plan_on_grid(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
) -> Result<Vec<Waypoint>, PlanError> {
    PhotoPlanner::default().plan(camera, dataset_spec)
}
