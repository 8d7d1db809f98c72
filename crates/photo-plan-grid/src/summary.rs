use photo_plan_core::{
    compute_focal_length_in_mm, compute_ground_sampling_distance,
    compute_image_footprint_on_surface, Camera, DatasetSpec,
};
use serde::{Deserialize, Serialize};

use crate::{GridLayout, PlanError};

/// Derived quantities of a plan, for reports and quick inspection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub focal_length_mm: [f64; 2],
    /// Ground footprint of one image, meters.
    pub footprint: [f64; 2],
    /// Ground sampling distance, meters per pixel.
    pub gsd: f64,
    pub spacing: [f64; 2],
    /// Capture speed, m/s.
    pub speed: f64,
    pub num_cols: usize,
    pub num_rows: usize,
    pub num_waypoints: usize,
    /// Extent spanned by the image centers, meters.
    pub covered_extent: [f64; 2],
    /// Length of the lawn-mower path, meters.
    pub path_length: f64,
    /// Time to fly the path at capture speed, seconds.
    pub capture_duration_s: f64,
}

impl PlanSummary {
    pub fn from_layout(
        camera: &Camera,
        dataset_spec: &DatasetSpec,
        layout: &GridLayout,
    ) -> Result<Self, PlanError> {
        let focal = compute_focal_length_in_mm(camera)?;
        let footprint = compute_image_footprint_on_surface(camera, dataset_spec.height)?;
        let gsd = compute_ground_sampling_distance(camera, dataset_spec.height)?;
        let path_length = layout.path_length();

        Ok(Self {
            focal_length_mm: [focal.x, focal.y],
            footprint: [footprint.x, footprint.y],
            gsd,
            spacing: layout.spacing,
            speed: layout.speed,
            num_cols: layout.num_cols,
            num_rows: layout.num_rows,
            num_waypoints: layout.len(),
            covered_extent: layout.covered_extent(),
            path_length,
            capture_duration_s: path_length / layout.speed,
        })
    }
}
