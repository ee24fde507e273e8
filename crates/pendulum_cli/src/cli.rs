//! Command-line interface for the `pendulum` binary.
//!
//! # Examples
//!
//! ```bash
//! # Five seconds of readouts at 60 frames per second
//! pendulum run --angle 45
//!
//! # Stop when the bob first passes the bottom, as JSON lines
//! pendulum run --mode pause-at-bottom --format json
//!
//! # Exact period against the small-angle estimate
//! pendulum period --length 2 --sweep
//!
//! # Show the resolved configuration
//! pendulum --config lab.toml config
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pendulum::SimulationMode;

/// Simple pendulum simulation with exact large-amplitude period.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pendulum",
    author,
    version,
    about = "Simulate a simple pendulum and print its kinematics and dynamics",
    long_about = "Drives a fixed-timestep RK4 pendulum simulation with synthetic or \
                  wall-clock frames and prints speed, accelerations, tension, gravity \
                  components, energy and the exact period."
)]
pub struct Cli {
    /// Path to a TOML file with physical parameters and loop tuning
    ///
    /// Values given on the command line override the file.
    #[arg(long, short = 'c', global = true, env = "PENDULUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the simulation and print readouts
    Run(RunArgs),

    /// Print the exact and small-angle periods
    Period(PeriodArgs),

    /// Print the resolved configuration
    Config(ParamArgs),
}

/// Physical parameters and loop tuning shared by every subcommand.
///
/// Each value is optional so that unset flags fall through to the config
/// file and then to the built-in defaults.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ParamArgs {
    /// Bob mass in kilograms
    #[arg(long, short = 'm', env = "PENDULUM_MASS")]
    pub mass: Option<f64>,

    /// String length in metres
    #[arg(long, short = 'l', env = "PENDULUM_LENGTH")]
    pub length: Option<f64>,

    /// Gravitational acceleration in m/s²
    #[arg(long, short = 'g', env = "PENDULUM_GRAVITY")]
    pub gravity: Option<f64>,

    /// Release amplitude in degrees, positive to the right
    #[arg(long, short = 'a', env = "PENDULUM_ANGLE", allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Fixed integration step in seconds
    #[arg(long, env = "PENDULUM_TIME_STEP")]
    pub time_step: Option<f64>,

    /// Ceiling on a single frame's wall-clock delta in seconds
    #[arg(long, env = "PENDULUM_MAX_FRAME_DELTA")]
    pub max_frame_delta: Option<f64>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Stepping mode: running, paused, pause-at-bottom, pause-at-top
    #[arg(long, default_value = "running")]
    pub mode: SimulationMode,

    /// Host frame rate used to generate frame timestamps
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Wall-clock seconds to drive the simulation for
    #[arg(long, short = 'd', default_value = "5.0")]
    pub duration: f64,

    /// Print one readout every N frames
    #[arg(long, default_value = "6", value_parser = clap::value_parser!(u32).range(1..))]
    pub every: u32,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,

    /// Pace frames against the wall clock instead of generating them
    #[arg(long)]
    pub realtime: bool,
}

/// Arguments for the `period` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Tabulate the period over amplitudes from 0° up to the configured angle
    #[arg(long)]
    pub sweep: bool,

    /// Amplitude increment for --sweep, in degrees
    #[arg(long, default_value = "10.0", requires = "sweep")]
    pub sweep_step: f64,

    /// Output format
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text columns
    #[default]
    Table,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// The parameter flags of whichever subcommand was given.
    #[must_use]
    pub fn param_args(&self) -> &ParamArgs {
        match &self.command {
            Command::Run(args) => &args.params,
            Command::Period(args) => &args.params,
            Command::Config(params) => params,
        }
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages, including stop events and mode changes
    Debug,
    /// Show all messages including per-frame tracing
    Trace,
}

impl LogLevel {
    /// The default `tracing-subscriber` filter directive for this level.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
