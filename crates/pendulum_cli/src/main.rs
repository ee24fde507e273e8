#![forbid(unsafe_code)]

//! `pendulum` - drive the pendulum simulation from the command line.
//!
//! ## Usage
//!
//! ```bash
//! pendulum run --angle 60 --mode pause-at-top
//! pendulum period --sweep
//! pendulum config
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::{Context, ensure};
use pendulum::Simulation;
use pendulum_cli::cli::{PeriodArgs, RunArgs};
use pendulum_cli::driver::{self, FrameClock, RunOptions, SyntheticClock, WallClock};
use pendulum_cli::output;
use pendulum_cli::{Cli, Command, Config, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // RUST_LOG wins over -v; logs go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_cli(&cli)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Run(args) => run(&config, args, &mut out)?,
        Command::Period(args) => period(&config, args, &mut out)?,
        Command::Config(_) => writeln!(out, "{}", config.to_diagnostic_string())?,
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn run<W: Write>(config: &Config, args: &RunArgs, out: &mut W) -> anyhow::Result<()> {
    ensure!(
        args.duration.is_finite() && args.duration >= 0.0,
        "duration must be a non-negative number of seconds, got {}",
        args.duration
    );

    let mut sim = Simulation::with_config(config.params, config.simulation_config()?);
    let options = RunOptions {
        mode: args.mode,
        fps: args.fps,
        duration: args.duration,
        every: args.every,
    };

    let mut clock: Box<dyn FrameClock> = if args.realtime {
        Box::new(WallClock::new(args.fps))
    } else {
        Box::new(SyntheticClock::new(args.fps))
    };

    match args.format {
        OutputFormat::Table => {
            output::write_run_header(out)?;
            let summary = driver::run(&mut sim, clock.as_mut(), &options, |record| {
                output::write_run_row(out, record)?;
                if args.realtime {
                    out.flush()?;
                }
                Ok::<_, io::Error>(())
            })?;
            output::write_summary(out, &summary)?;
        }
        OutputFormat::Json => {
            driver::run(&mut sim, clock.as_mut(), &options, |record| {
                output::write_json_line(out, record)?;
                if args.realtime {
                    out.flush()?;
                }
                Ok::<_, io::Error>(())
            })?;
        }
    }

    Ok(())
}

fn period<W: Write>(config: &Config, args: &PeriodArgs, out: &mut W) -> anyhow::Result<()> {
    ensure!(
        !args.sweep || (args.sweep_step.is_finite() && args.sweep_step >= output::MIN_SWEEP_STEP),
        "sweep step must be at least {} degrees, got {}",
        output::MIN_SWEEP_STEP,
        args.sweep_step
    );

    let step = args.sweep.then_some(args.sweep_step);
    let records = output::period_sweep(&config.params, step);

    match args.format {
        OutputFormat::Table => output::write_period_table(out, &records)?,
        OutputFormat::Json => {
            for record in &records {
                output::write_json_line(out, record)?;
            }
        }
    }

    Ok(())
}
