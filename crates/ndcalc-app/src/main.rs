//! ndcalc — ND filter calculator for video shooters.
//!
//! Owns the form state, feeds it from command-line flags or a JSON session on
//! stdin, and prints the recomputed card after every change.

mod config;
mod ipc;
mod session;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ndcalc_core::{ExposureInputs, ExposureMode, Field};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "ndcalc")]
#[command(version, about = "ND filter calculator for the 180-degree shutter rule", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one set of camera settings and print the card
    Calc(CalcArgs),

    /// Serve a line-delimited JSON session on stdin/stdout
    Session,
}

#[derive(Args, Debug, Default)]
struct CalcArgs {
    /// Target frame rate
    #[arg(long, value_name = "FPS", allow_hyphen_values = true)]
    fps: Option<String>,

    /// Current ISO
    #[arg(long, value_name = "ISO", allow_hyphen_values = true)]
    iso: Option<String>,

    /// Current aperture (f-number)
    #[arg(long, value_name = "F", allow_hyphen_values = true)]
    aperture: Option<String>,

    /// Current shutter speed, e.g. 1/100 or 0.01
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    shutter: Option<String>,

    /// Set desired ISO and aperture independently
    #[arg(long)]
    advanced: bool,

    /// Desired ISO (advanced mode)
    #[arg(long, value_name = "ISO", requires = "advanced", allow_hyphen_values = true)]
    desired_iso: Option<String>,

    /// Desired aperture (advanced mode)
    #[arg(long, value_name = "F", requires = "advanced", allow_hyphen_values = true)]
    desired_aperture: Option<String>,

    /// Print the evaluation as JSON instead of the card
    #[arg(long)]
    json: bool,
}

impl CalcArgs {
    /// Layer the flags over the configured defaults.
    fn apply(&self, inputs: &mut ExposureInputs) {
        let edits = [
            (Field::Fps, &self.fps),
            (Field::CurrentIso, &self.iso),
            (Field::CurrentAperture, &self.aperture),
            (Field::CurrentShutter, &self.shutter),
        ];
        for (field, value) in edits {
            if let Some(value) = value {
                inputs.set(field, value.as_str());
            }
        }

        if self.advanced {
            inputs.set_mode(ExposureMode::Advanced);
            // Unset desired values follow the current ones.
            let iso = self.desired_iso.as_ref().unwrap_or(&inputs.current_iso).clone();
            let aperture = self
                .desired_aperture
                .as_ref()
                .unwrap_or(&inputs.current_aperture)
                .clone();
            inputs.set(Field::DesiredIso, iso);
            inputs.set(Field::DesiredAperture, aperture);
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ndcalc=info,ndcalc_core=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::default();

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<ExitCode> {
    match cli.command {
        Commands::Calc(args) => calc(&args, config),
        Commands::Session => {
            tracing::info!("starting JSON session on stdin/stdout");
            let mut session = Session::new(config.defaults.clone());
            session.run(io::stdin().lock(), io::stdout().lock())?;
            tracing::debug!("final inputs: {:?}", session.inputs());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn calc(args: &CalcArgs, config: &AppConfig) -> Result<ExitCode> {
    let mut inputs = config.defaults.clone();
    args.apply(&mut inputs);
    let eval = inputs.evaluate();

    if args.json {
        let report = eval.report();
        let json = if config.pretty_json {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .context("failed to encode evaluation")?;
        println!("{json}");
    } else {
        print!("{}", ui::render_form(&eval));
    }

    if let Some(e) = eval.error() {
        tracing::warn!("settings are invalid: {e}");
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
