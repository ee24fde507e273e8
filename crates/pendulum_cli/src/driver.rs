//! Frame driver for the `run` subcommand.
//!
//! The core simulation is host-agnostic: it only sees a timestamp per
//! rendered frame. This module plays the host. A [`FrameClock`] produces the
//! timestamps, either synthetically at an exact frame rate (deterministic,
//! no sleeping) or paced against the wall clock.

use std::thread;
use std::time::{Duration, Instant};

use pendulum::{Readout, Simulation, SimulationMode, StopEvent};
use serde::Serialize;

/// Source of frame timestamps in seconds.
pub trait FrameClock {
    /// Blocks until the next frame is due and returns its timestamp.
    fn next_frame(&mut self) -> f64;
}

/// Exact `1/fps` spacing with no waiting.
#[derive(Debug, Clone)]
pub struct SyntheticClock {
    interval: f64,
    frame: u64,
}

impl SyntheticClock {
    /// Clock ticking at `fps` frames per second, starting at zero.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            interval: pendulum::fps(fps.max(1)),
            frame: 0,
        }
    }
}

impl FrameClock for SyntheticClock {
    fn next_frame(&mut self) -> f64 {
        // Multiplying keeps timestamps free of accumulated rounding.
        let timestamp = self.frame as f64 * self.interval;
        self.frame += 1;
        timestamp
    }
}

/// Sleeps until each frame deadline and reports real elapsed time.
#[derive(Debug, Clone)]
pub struct WallClock {
    start: Instant,
    interval: Duration,
    deadline: Instant,
}

impl WallClock {
    /// Clock pacing frames at `fps` per second from now.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        let start = Instant::now();
        Self {
            start,
            interval: Duration::from_secs_f64(pendulum::fps(fps.max(1))),
            deadline: start,
        }
    }
}

impl FrameClock for WallClock {
    fn next_frame(&mut self) -> f64 {
        let now = Instant::now();
        if let Some(wait) = self.deadline.checked_duration_since(now) {
            thread::sleep(wait);
        }
        self.deadline += self.interval;
        self.start.elapsed().as_secs_f64()
    }
}

/// Settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    /// Mode the simulation starts in.
    pub mode: SimulationMode,
    /// Host frame rate.
    pub fps: u32,
    /// Seconds of frames to drive.
    pub duration: f64,
    /// Emit a record every this many frames.
    pub every: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: SimulationMode::Running,
            fps: 60,
            duration: 5.0,
            every: 6,
        }
    }
}

impl RunOptions {
    /// Number of frames after the initial timestamp-only frame.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 0;
        }
        (self.duration * f64::from(self.fps)).round() as u64
    }
}

/// One emitted line of output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Frame index, starting at zero for the initial frame.
    pub frame: u64,
    /// Simulated time, s.
    pub time: f64,
    /// Angle from vertical, degrees.
    pub theta_deg: f64,
    /// Angular velocity, rad/s.
    pub omega: f64,
    /// Angular acceleration, rad/s².
    pub alpha: f64,
    /// Linear speed, m/s.
    pub speed: f64,
    /// Tangential acceleration magnitude, m/s².
    pub tangential_acceleration: f64,
    /// Centripetal acceleration, m/s².
    pub radial_acceleration: f64,
    /// Total acceleration magnitude, m/s².
    pub total_acceleration: f64,
    /// String tension, N.
    pub tension: f64,
    /// Total mechanical energy, J.
    pub energy: f64,
    /// Stop event fired on this frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<StopEvent>,
}

impl FrameRecord {
    /// Flattens a readout into an output record.
    #[must_use]
    pub fn new(frame: u64, readout: &Readout, event: Option<StopEvent>) -> Self {
        Self {
            frame,
            time: readout.state.time,
            theta_deg: readout.state.theta_degrees(),
            omega: readout.state.omega,
            alpha: readout.state.alpha,
            speed: readout.speed,
            tangential_acceleration: readout.tangential_acceleration,
            radial_acceleration: readout.radial_acceleration,
            total_acceleration: readout.total_acceleration,
            tension: readout.tension,
            energy: readout.energy.total(),
            event,
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames delivered, including the initial one.
    pub frames: u64,
    /// Fixed steps integrated.
    pub steps: u64,
    /// The stop event that ended the run early, if any.
    pub event: Option<StopEvent>,
    /// Readout after the last frame.
    pub readout: Readout,
}

/// Drives `sim` with frames from `clock` and hands records to `sink`.
///
/// A record is emitted for the initial frame, every `every` frames after it,
/// and on the frame a stop event fires. The run ends early when a stop event
/// pauses the simulation.
///
/// # Errors
///
/// Returns the first error produced by `sink`.
pub fn run<C, F, E>(
    sim: &mut Simulation,
    clock: &mut C,
    options: &RunOptions,
    mut sink: F,
) -> Result<RunSummary, E>
where
    C: FrameClock + ?Sized,
    F: FnMut(&FrameRecord) -> Result<(), E>,
{
    sim.set_mode(options.mode);
    let every = u64::from(options.every.max(1));
    let total = options.frame_count();

    tracing::info!(
        mode = %options.mode,
        fps = options.fps,
        frames = total,
        "starting run"
    );

    let mut steps = 0;
    let mut event = None;
    let mut frames = 0;

    for index in 0..=total {
        let frame = sim.on_frame(clock.next_frame());
        frames += 1;
        steps += u64::from(frame.steps);

        if index % every == 0 || frame.event.is_some() {
            sink(&FrameRecord::new(index, &sim.readout(), frame.event))?;
        }

        if let Some(fired) = frame.event {
            tracing::info!(event = %fired, frame = index, time = frame.state.time, "run stopped");
            event = Some(fired);
            break;
        }
    }

    Ok(RunSummary {
        frames,
        steps,
        event,
        readout: sim.readout(),
    })
}
