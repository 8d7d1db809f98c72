use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use photo_plan::grid::SurveyConfig;
use photo_plan::project_world_point_to_image;
use photo_plan::run::{plan_from_config, plan_with_summary, write_example_config, RunError};

#[derive(Parser, Debug)]
#[command(name = "photo-plan", version, about = "Aerial photo-survey planner")]
struct Cli {
    /// Log verbosity written to stderr. With the `tracing` feature, `RUST_LOG` overrides it.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a survey and write the JSON report.
    Plan {
        /// Survey config (JSON).
        config: PathBuf,
        /// Report path; overrides `output_path` from the config.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print footprint, GSD, spacing, speed and grid size as JSON.
    Summary { config: PathBuf },
    /// Project a camera-frame point `X Y Z` (meters) to pixel coordinates.
    Project {
        config: PathBuf,
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        coords: Vec<f64>,
    },
    /// Write an example survey config.
    Init {
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LogLevel) {
    #[cfg(feature = "tracing")]
    {
        photo_plan::core::init_tracing(level.into(), false);
        // No-op when the subscriber already bridged `log` records.
        let _ = tracing_log::LogTracer::init();
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = photo_plan::core::init_with_level(level.into());
    }
}

fn run(command: Command) -> Result<ExitCode, RunError> {
    match command {
        Command::Plan { config, output } => {
            let cfg = SurveyConfig::load_json(&config)?;
            let report = plan_from_config(&cfg, &config);
            let out = output.unwrap_or_else(|| cfg.output_path());
            report.write_json(&out)?;

            if let Some(err) = &report.error {
                eprintln!("error: {err}");
                eprintln!("report written to {}", out.display());
                return Ok(ExitCode::FAILURE);
            }
            let n = report.waypoints.len();
            println!("planned {n} waypoints, report written to {}", out.display());
        }
        Command::Summary { config } => {
            let cfg = SurveyConfig::load_json(&config)?;
            let (_, summary) = plan_with_summary(&cfg)?;
            let json = serde_json::to_string_pretty(&summary)
                .map_err(photo_plan::grid::PlanIoError::from)?;
            println!("{json}");
        }
        Command::Project { config, coords } => {
            let cfg = SurveyConfig::load_json(&config)?;
            let uv = project_world_point_to_image(&cfg.camera, &coords)?;
            println!("{:.6} {:.6}", uv.x, uv.y);
        }
        Command::Init { path, force } => {
            write_example_config(&path, force)?;
            println!("wrote example config to {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
