//! Text and JSON rendering for the binary's output.

use std::io::{self, Write};

use pendulum::{PhysicsParameters, exact_period, small_angle_period};
use serde::Serialize;

use crate::driver::{FrameRecord, RunSummary};

/// Smallest amplitude increment a period sweep accepts, in degrees.
pub const MIN_SWEEP_STEP: f64 = 0.01;

const RUN_HEADER: [&str; 9] = [
    "frame", "t (s)", "θ (°)", "ω (rad/s)", "v (m/s)", "a_t", "a_c", "T (N)", "E (J)",
];

/// Writes the column header for run output.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_run_header<W: Write>(out: &mut W) -> io::Result<()> {
    let [frame, time, theta, omega, speed, a_t, a_c, tension, energy] = RUN_HEADER;
    writeln!(
        out,
        "{frame:>6} {time:>8} {theta:>9} {omega:>10} {speed:>8} {a_t:>8} {a_c:>8} {tension:>8} {energy:>9}"
    )
}

/// Writes one record as an aligned table row.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_run_row<W: Write>(out: &mut W, record: &FrameRecord) -> io::Result<()> {
    write!(
        out,
        "{:>6} {:>8.3} {:>9.3} {:>10.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>9.5}",
        record.frame,
        record.time,
        record.theta_deg,
        record.omega,
        record.speed,
        record.tangential_acceleration,
        record.radial_acceleration,
        record.tension,
        record.energy,
    )?;
    match record.event {
        Some(event) => writeln!(out, "  <- {event}"),
        None => writeln!(out),
    }
}

/// Writes a value as a single JSON line.
///
/// # Errors
///
/// Returns any error from serialisation or the writer.
pub fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Writes the closing summary of a table run.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let stop = summary
        .event
        .map_or_else(|| "none".to_string(), |event| event.to_string());
    writeln!(
        out,
        "\n{} frames, {} steps, {:.4} s simulated, stop event: {stop}",
        summary.frames, summary.steps, summary.readout.state.time
    )?;
    writeln!(
        out,
        "period: {:.6} s exact, {:.6} s small-angle",
        summary.readout.exact_period, summary.readout.small_angle_period
    )
}

/// Period at one amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodRecord {
    /// Amplitude, degrees.
    pub amplitude_deg: f64,
    /// Exact period, s.
    pub exact_period: f64,
    /// Small-angle period, s.
    pub small_angle_period: f64,
    /// `exact_period / small_angle_period`.
    pub ratio: f64,
}

impl PeriodRecord {
    /// Computes both periods at `amplitude_deg` for the given pendulum.
    #[must_use]
    pub fn new(amplitude_deg: f64, params: &PhysicsParameters) -> Self {
        let exact = exact_period(amplitude_deg.to_radians(), params.length, params.gravity);
        let small = small_angle_period(params.length, params.gravity);
        Self {
            amplitude_deg,
            exact_period: exact,
            small_angle_period: small,
            ratio: exact / small,
        }
    }
}

/// Periods from 0° up to the configured amplitude in `step` increments.
///
/// The configured amplitude is always the last entry. Without a usable step
/// only that entry is produced. Steps finer than [`MIN_SWEEP_STEP`] are
/// raised to it, which bounds the sweep to at most 18 000 rows.
#[must_use]
pub fn period_sweep(params: &PhysicsParameters, step: Option<f64>) -> Vec<PeriodRecord> {
    let limit = params.initial_angle.abs();
    let mut records = Vec::new();

    if let Some(step) = step.filter(|s| s.is_finite() && *s > 0.0) {
        let step = step.max(MIN_SWEEP_STEP);
        let mut index = 0u32;
        loop {
            let amplitude = f64::from(index) * step;
            if amplitude >= limit - 1e-9 {
                break;
            }
            records.push(PeriodRecord::new(amplitude, params));
            index += 1;
        }
    }

    records.push(PeriodRecord::new(limit, params));
    records
}

/// Writes period records as a table.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_period_table<W: Write>(out: &mut W, records: &[PeriodRecord]) -> io::Result<()> {
    writeln!(
        out,
        "{:>9} {:>12} {:>12} {:>9}",
        "θ₀ (°)", "T exact (s)", "T₀ (s)", "T/T₀"
    )?;
    for record in records {
        writeln!(
            out,
            "{:>9.2} {:>12.6} {:>12.6} {:>9.6}",
            record.amplitude_deg, record.exact_period, record.small_angle_period, record.ratio
        )?;
    }
    Ok(())
}
