//! High-level facade crate for the `photo-plan-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the camera geometry and planner crates
//! - config-driven helpers that turn a [`grid::SurveyConfig`] into a
//!   [`grid::PlanReport`] (see [`run`])
//! - (feature `cli`) the `photo-plan` command-line tool
//!
//! ## Quickstart
//!
//! ```
//! use photo_plan::{generate_photo_plan_on_grid, grid::SurveyConfig};
//!
//! let cfg = SurveyConfig::example();
//! let plan = generate_photo_plan_on_grid(&cfg.camera, &cfg.dataset).unwrap();
//! assert!(!plan.is_empty());
//! ```
//!
//! ## API map
//! - `photo_plan::core`: camera record, projection, footprint, GSD, logger.
//! - `photo_plan::grid`: spacing, capture speed, lawn-mower layout, config/report I/O.
//! - `photo_plan::run`: end-to-end helpers used by the CLI.

pub use photo_plan_core as core;
pub use photo_plan_grid as grid;

pub use photo_plan_core::{
    compute_focal_length_in_mm, compute_ground_sampling_distance,
    compute_image_footprint_on_surface, project_world_point_to_image, Camera, DatasetSpec,
    ErrorKind, GeometryError, Waypoint,
};
pub use photo_plan_grid::{
    compute_distance_between_images, compute_speed_during_photo_capture,
    generate_photo_plan_on_grid, GridLayout, PhotoPlanner, PlanError, PlannerParams,
};

pub mod run;
