use std::path::Path;

use log::{info, warn};

use crate::grid::{GridLayout, PlanError, PlanIoError, PlanReport, PlanSummary, SurveyConfig};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the end-to-end helpers.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] PlanIoError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Geometry(#[from] crate::GeometryError),

    #[error("refusing to overwrite existing file {0}")]
    AlreadyExists(String),
}

/// Compute the layout and its summary for a config.
pub fn plan_with_summary(cfg: &SurveyConfig) -> Result<(GridLayout, PlanSummary), PlanError> {
    let planner = cfg.build_planner();
    let layout = planner.layout(&cfg.camera, &cfg.dataset)?;
    let summary = PlanSummary::from_layout(&cfg.camera, &cfg.dataset, &layout)?;
    Ok((layout, summary))
}

/// Plan a config and fold the outcome into a report.
///
/// Planning errors are recorded in `report.error` rather than returned.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip(cfg)))]
pub fn plan_from_config(cfg: &SurveyConfig, config_path: &Path) -> PlanReport {
    let mut report = PlanReport::new(cfg, config_path);
    let outcome =
        plan_with_summary(cfg).and_then(|(layout, summary)| report.set_plan(layout, summary));
    if let Err(err) = outcome {
        warn!("planning failed: {err}");
        report.set_error(&err);
    } else if let Some(summary) = &report.summary {
        info!(
            "planned {} waypoints ({}x{}), path {:.1} m at {:.2} m/s",
            summary.num_waypoints,
            summary.num_cols,
            summary.num_rows,
            summary.path_length,
            summary.speed
        );
    }
    report
}

/// Write the example config to `path`, unless a file is already there.
pub fn write_example_config(path: &Path, overwrite: bool) -> Result<(), RunError> {
    if path.exists() && !overwrite {
        return Err(RunError::AlreadyExists(path.display().to_string()));
    }
    SurveyConfig::example().write_json(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_plan_is_recorded_in_report() {
        let mut cfg = SurveyConfig::example();
        cfg.dataset.sidelap = 1.0;
        let report = plan_from_config(&cfg, Path::new("bad.json"));
        assert!(report.waypoints.is_empty());
        assert_eq!(
            report.error.as_deref(),
            Some("sidelap must be in [0, 1) (got 1)")
        );
    }

    #[test]
    fn example_plan_fills_report() {
        let cfg = SurveyConfig::example();
        let report = plan_from_config(&cfg, Path::new("survey.json"));
        let summary = report.summary.expect("summary");
        assert!(report.error.is_none());
        assert_eq!(report.waypoints.len(), summary.num_waypoints);
        assert_eq!(report.config_path, "survey.json");
    }

    #[test]
    fn oversized_survey_is_recorded_instead_of_aborting() {
        let mut cfg = SurveyConfig::example();
        cfg.dataset.height = 1.0;
        cfg.dataset.overlap = 0.5;
        cfg.dataset.sidelap = 0.5;
        cfg.dataset.scan_dimension_x = 1e7;
        cfg.dataset.scan_dimension_y = 1e7;

        let report = plan_from_config(&cfg, Path::new("huge.json"));
        assert!(report.waypoints.is_empty());
        assert!(report.summary.is_none());
        let msg = report.error.expect("error recorded");
        assert!(msg.contains("too large"), "{msg}");
    }

    #[test]
    fn example_config_is_not_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("survey.json");
        write_example_config(&path, false).expect("first write");
        let err = write_example_config(&path, false).unwrap_err();
        assert!(matches!(err, RunError::AlreadyExists(_)));
        write_example_config(&path, true).expect("forced write");
    }
}
