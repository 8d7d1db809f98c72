//! JSON configuration and report helpers for photo planning.

use crate::{GridLayout, PhotoPlanner, PlanError, PlanSummary, PlannerParams};
use photo_plan_core::{Camera, DatasetSpec, Waypoint};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum PlanIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

const DEFAULT_REPORT_PATH: &str = "photo_plan_report.json";

/// Input of a planning run: camera, dataset specification and planner overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    pub camera: Camera,
    pub dataset: DatasetSpec,
    #[serde(default)]
    pub planner: PlannerParams,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl SurveyConfig {
    /// A ready-to-edit configuration: 1/2.3" 12 MP camera, 60 x 40 m area at 30 m.
    pub fn example() -> Self {
        Self {
            camera: Camera {
                fx: 2964.0,
                fy: 2964.0,
                cx: 2000.0,
                cy: 1500.0,
                sensor_size_x_mm: 6.17,
                sensor_size_y_mm: 4.55,
                image_size_x_px: 4000,
                image_size_y_px: 3000,
            },
            dataset: DatasetSpec {
                overlap: 0.7,
                sidelap: 0.7,
                height: 30.0,
                scan_dimension_x: 60.0,
                scan_dimension_y: 40.0,
                exposure_time_ms: 2.0,
            },
            planner: PlannerParams::default(),
            output_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PlanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PlanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
    }

    pub fn build_planner(&self) -> PhotoPlanner {
        PhotoPlanner::new(self.planner.clone())
    }
}

/// Output of a planning run, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub config_path: String,
    pub camera: Camera,
    pub dataset: DatasetSpec,
    pub planner: PlannerParams,
    #[serde(default)]
    pub layout: Option<GridLayout>,
    #[serde(default)]
    pub summary: Option<PlanSummary>,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PlanReport {
    /// Build an empty report for the given config.
    pub fn new(cfg: &SurveyConfig, config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_string_lossy().into_owned(),
            camera: cfg.camera,
            dataset: cfg.dataset,
            planner: cfg.planner.clone(),
            layout: None,
            summary: None,
            waypoints: Vec::new(),
            error: None,
        }
    }

    /// Populate the report from a computed layout.
    ///
    /// Leaves the report untouched when the waypoints cannot be materialized.
    pub fn set_plan(
        &mut self,
        layout: GridLayout,
        summary: PlanSummary,
    ) -> Result<(), PlanError> {
        self.waypoints = layout.to_vec()?;
        self.layout = Some(layout);
        self.summary = Some(summary);
        self.error = None;
        Ok(())
    }

    /// Record a planning error; any previous plan is dropped.
    pub fn set_error(&mut self, err: &PlanError) {
        self.layout = None;
        self.summary = None;
        self.waypoints.clear();
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PlanIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PlanIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
