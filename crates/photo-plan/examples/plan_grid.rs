use log::LevelFilter;
use photo_plan::grid::{PhotoPlanner, PlanSummary, SurveyConfig};

#[cfg(feature = "tracing")]
use photo_plan::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(LevelFilter::Debug, false);
    #[cfg(not(feature = "tracing"))]
    photo_plan::core::init_with_level(LevelFilter::Debug)?;

    let cfg = match std::env::args().nth(1) {
        Some(path) => SurveyConfig::load_json(path)?,
        None => SurveyConfig::example(),
    };

    let planner = PhotoPlanner::new(cfg.planner.clone());
    let layout = planner.layout(&cfg.camera, &cfg.dataset)?;
    let summary = PlanSummary::from_layout(&cfg.camera, &cfg.dataset, &layout)?;

    println!(
        "footprint {:.2} x {:.2} m, gsd {:.2} cm/px, speed {:.2} m/s",
        summary.footprint[0],
        summary.footprint[1],
        summary.gsd * 100.0,
        summary.speed
    );
    for (i, wp) in layout.iter().enumerate() {
        println!("{i:4}: x={:8.2} y={:8.2} z={:6.2}", wp.x, wp.y, wp.z);
    }

    Ok(())
}
