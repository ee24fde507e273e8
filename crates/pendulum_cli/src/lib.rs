#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! # Pendulum CLI
//!
//! Headless host for the [`pendulum`] simulation. The binary feeds the core
//! frame timestamps, prints readouts as a table or JSON lines, and tabulates
//! the exact period against the small-angle estimate.
//!
//! ## Public Modules
//!
//! - [`cli`] - Command-line arguments
//! - [`config`] - Layered runtime configuration
//! - [`driver`] - Frame clocks and the run loop
//! - [`output`] - Table and JSON rendering

pub mod cli;
pub mod config;
pub mod driver;
pub mod output;

pub use cli::{Cli, Command, LogLevel, OutputFormat};
pub use config::{Config, ConfigError, FileConfig};
pub use driver::{FrameClock, FrameRecord, RunOptions, RunSummary, SyntheticClock, WallClock};
