//! Lawn-mower coverage planner built on top of `photo-plan-core`.
//!
//! ## Quickstart
//!
//! ```
//! use photo_plan_core::{Camera, DatasetSpec};
//! use photo_plan_grid::generate_photo_plan_on_grid;
//!
//! let camera = Camera {
//!     fx: 1000.0,
//!     fy: 1000.0,
//!     cx: 500.0,
//!     cy: 500.0,
//!     sensor_size_x_mm: 6.0,
//!     sensor_size_y_mm: 4.0,
//!     image_size_x_px: 1000,
//!     image_size_y_px: 667,
//! };
//! let spec = DatasetSpec {
//!     overlap: 0.7,
//!     sidelap: 0.6,
//!     height: 10.0,
//!     scan_dimension_x: 30.0,
//!     scan_dimension_y: 20.0,
//!     exposure_time_ms: 2.0,
//! };
//!
//! let plan = generate_photo_plan_on_grid(&camera, &spec).unwrap();
//! println!("{} waypoints", plan.len());
//! ```
//!
//! Algorithm:
//! 1. Footprint at flight height, shrunk by overlap/sidelap, gives the image spacing.
//! 2. GSD at flight height and the exposure time bound the capture speed.
//! 3. `ceil(scan_dimension / spacing)` columns and rows (at least one each).
//! 4. Rows are emitted in order, odd rows reversed (boustrophedon).

mod coverage;
mod error;
mod io;
mod layout;
mod params;
mod planner;
mod summary;

pub use coverage::{compute_distance_between_images, compute_speed_during_photo_capture};
pub use error::PlanError;
pub use io::{PlanIoError, PlanReport, SurveyConfig};
pub use layout::{GridLayout, Waypoints};
pub use params::{PlannerParams, DEFAULT_ALLOWED_MOVEMENT_PX};
pub use planner::{generate_photo_plan_on_grid, PhotoPlanner};
pub use summary::PlanSummary;
