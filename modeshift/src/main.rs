use clap::{Parser, Subcommand};
use modeshift::app::{self, AppError};
use modeshift::model::mode::Mode;
use modeshift::model::policy::{MultiplierGrid, PolicyColumn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    #[command(
        name = "estimate",
        about = "fit the commute mode choice model and report coefficients"
    )]
    Estimate {
        /// survey CSV with one row per respondent
        survey_filename: String,
        /// alternative whose constant is fixed at zero
        #[arg(long, default_value_t = Mode::Car)]
        reference: Mode,
        /// optional path to write the fitted model as JSON
        #[arg(long)]
        model_output: Option<String>,
    },
    #[command(
        name = "elasticity",
        about = "per-respondent own- and cross-price cost elasticities"
    )]
    Elasticity {
        /// survey CSV with one row per respondent
        survey_filename: String,
        /// alternative whose constant is fixed at zero
        #[arg(long, default_value_t = Mode::Car)]
        reference: Mode,
        /// alternative whose cost is perturbed
        #[arg(long, default_value_t = Mode::Car)]
        target: Mode,
        /// grid resolution of the density curve
        #[arg(long, default_value_t = 128)]
        grid_points: usize,
        /// optional path to write the own-elasticity density curve as CSV
        #[arg(long)]
        density_output: Option<String>,
    },
    #[command(
        name = "simulate",
        about = "sweep a multiplier grid over one input column and write the response curve"
    )]
    Simulate {
        /// survey CSV with one row per respondent
        survey_filename: String,
        /// column to scale: 'income', 'cost:<mode>', or 'time:<mode>'
        column: PolicyColumn,
        /// file to write the per-scenario expected mode counts
        output_filename: String,
        /// alternative whose constant is fixed at zero
        #[arg(long, default_value_t = Mode::Car)]
        reference: Mode,
        /// first grid multiplier
        #[arg(long, default_value_t = 0.5)]
        start: f64,
        /// last grid multiplier
        #[arg(long, default_value_t = 1.5)]
        stop: f64,
        /// number of grid points, endpoints included
        #[arg(long, default_value_t = 11)]
        steps: usize,
        /// optional TOML file defining the grid; overrides start/stop/steps
        #[arg(long)]
        config: Option<String>,
    },
    #[command(
        name = "welfare",
        about = "log-sum consumer surplus change of one scenario against the baseline"
    )]
    Welfare {
        /// survey CSV with one row per respondent
        survey_filename: String,
        /// column to scale: 'income', 'cost:<mode>', or 'time:<mode>'
        column: PolicyColumn,
        /// multiplier applied to the column
        multiplier: f64,
        /// alternative whose constant is fixed at zero
        #[arg(long, default_value_t = Mode::Car)]
        reference: Mode,
    },
}

impl App {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Self::Estimate {
                survey_filename,
                reference,
                model_output,
            } => app::estimate::run(survey_filename, *reference, model_output.as_ref()),
            Self::Elasticity {
                survey_filename,
                reference,
                target,
                grid_points,
                density_output,
            } => app::elasticity::run(
                survey_filename,
                *reference,
                *target,
                *grid_points,
                density_output.as_ref(),
            ),
            Self::Simulate {
                survey_filename,
                column,
                output_filename,
                reference,
                start,
                stop,
                steps,
                config,
            } => {
                let grid = match config {
                    Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
                    None => MultiplierGrid {
                        start: *start,
                        stop: *stop,
                        steps: *steps,
                    },
                };
                app::simulate::run(survey_filename, *reference, *column, grid, output_filename)
            }
            Self::Welfare {
                survey_filename,
                column,
                multiplier,
                reference,
            } => app::welfare::run(survey_filename, *reference, *column, *multiplier),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("starting modeshift at {}", chrono::Local::now().to_rfc3339());
    let args = CliArgs::parse();
    if let Err(e) = args.app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
