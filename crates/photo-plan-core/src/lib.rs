//! Core types and camera geometry for aerial photo-survey planning.
//!
//! This crate is intentionally small and purely geometric: an ideal pinhole
//! camera looking straight down at flat ground. It knows nothing about grids
//! or flight paths; see `photo-plan-grid` for the coverage planner.
//!
//! ## Quickstart
//!
//! ```
//! use photo_plan_core::{compute_ground_sampling_distance, compute_image_footprint_on_surface, Camera};
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
//!
//! let footprint = compute_image_footprint_on_surface(&camera, 10.0).unwrap();
//! assert!((footprint.x - 10.0).abs() < 1e-12);
//!
//! let gsd = compute_ground_sampling_distance(&camera, 10.0).unwrap();
//! assert!((gsd - 0.01).abs() < 1e-12);
//! ```

mod camera;
mod error;
mod logger;
mod types;

pub use camera::{
    compute_focal_length_in_mm, compute_ground_sampling_distance,
    compute_image_footprint_on_surface, project_world_point_to_image, Camera,
};
pub use error::{ErrorKind, GeometryError};
pub use types::{DatasetSpec, Waypoint};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
