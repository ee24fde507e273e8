//! The frame-driven simulation loop.
//!
//! Hosts render at whatever rate they can manage; the physics always
//! advances in fixed steps. [`Simulation::on_frame`] bridges the two with a
//! time accumulator: every frame adds its wall-clock delta, and as many
//! whole steps as fit are drained through the integrator. After each step
//! the active [`SimulationMode`] is consulted, and a stop event ends the
//! frame early.
//!
//! # Example
//!
//! ```rust
//! use pendulum::{fps, PhysicsParameters, Simulation, SimulationMode};
//!
//! let mut sim = Simulation::new(PhysicsParameters::default());
//! sim.set_mode(SimulationMode::Running);
//!
//! // Drive one simulated second at 60 frames per second.
//! let frame = fps(60);
//! for i in 0..=60 {
//!     sim.on_frame(f64::from(i) * frame);
//! }
//!
//! assert!(sim.state().time > 0.95);
//! ```

use crate::dynamics::Readout;
use crate::error::Result;
use crate::integrator::step;
use crate::mode::{SimulationMode, StopEvent};
use crate::params::{PhysicsParameters, SimulationConfig};
use crate::state::AngularState;

/// What a single call to [`Simulation::on_frame`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The published state after all due steps.
    pub state: AngularState,
    /// Number of fixed steps integrated during this frame.
    pub steps: u32,
    /// The stop event that paused the simulation, if one fired.
    pub event: Option<StopEvent>,
}

/// A single pendulum advanced by wall-clock frames.
///
/// The simulation owns the angular state, the active mode and the clock
/// bookkeeping. Hosts feed it a timestamp per rendered frame and read the
/// published state (or a full [`Readout`]) back out.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: PhysicsParameters,
    config: SimulationConfig,
    state: AngularState,
    mode: SimulationMode,
    accumulator: f64,
    last_timestamp: Option<f64>,
}

impl Simulation {
    /// Creates a paused simulation released from `params.initial_angle`,
    /// using the default loop tuning.
    pub fn new(params: PhysicsParameters) -> Self {
        Self::with_config(params, SimulationConfig::default())
    }

    /// Creates a paused simulation with explicit loop tuning.
    pub fn with_config(params: PhysicsParameters, config: SimulationConfig) -> Self {
        Self {
            params,
            config,
            state: release_state(&params),
            mode: SimulationMode::Paused,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Replaces the starting state.
    ///
    /// Useful for hosts restoring a saved swing, or for placing the bob at a
    /// specific point of its trajectory.
    pub fn with_state(mut self, state: AngularState) -> Self {
        self.state = state;
        self
    }

    /// The most recently published state.
    #[inline]
    pub fn state(&self) -> &AngularState {
        &self.state
    }

    /// The active mode.
    #[inline]
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// The parameter snapshot used for stepping.
    #[inline]
    pub fn params(&self) -> &PhysicsParameters {
        &self.params
    }

    /// The loop tuning.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Wall-clock time received but not yet integrated, in seconds.
    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// The published state together with every derived quantity.
    pub fn readout(&self) -> Readout {
        Readout::new(&self.state, &self.params)
    }

    /// Switches the stepping policy.
    ///
    /// Any mode may be selected at any time. The switch is seen by the next
    /// call to [`Simulation::on_frame`]; selecting [`SimulationMode::Paused`]
    /// discards the fractional time pending in the accumulator there.
    pub fn set_mode(&mut self, mode: SimulationMode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "simulation mode changed");
        }
        self.mode = mode;
    }

    /// Applies a new parameter snapshot.
    ///
    /// Mass, length and gravity edits take effect on the next step without
    /// disturbing the swing. A changed `initial_angle` restarts it through
    /// [`Simulation::reset`].
    pub fn set_parameters(&mut self, params: PhysicsParameters) {
        if params.initial_angle != self.params.initial_angle {
            self.reset(params);
            return;
        }
        self.params = params;
    }

    /// Re-initialises the swing from `params`.
    ///
    /// The bob is placed at `params.initial_angle` at rest with the clock at
    /// zero, the accumulator is cleared, the next frame only records its
    /// timestamp, and the mode is forced to [`SimulationMode::Paused`].
    pub fn reset(&mut self, params: PhysicsParameters) {
        tracing::debug!(
            mass = params.mass,
            length = params.length,
            gravity = params.gravity,
            initial_angle = params.initial_angle,
            "simulation reset"
        );
        self.params = params;
        self.state = release_state(&params);
        self.mode = SimulationMode::Paused;
        self.accumulator = 0.0;
        self.last_timestamp = None;
    }

    /// Advances the simulation to a host frame.
    ///
    /// `timestamp` is a monotonically increasing wall-clock reading in
    /// seconds. The first frame after construction or [`Simulation::reset`]
    /// only records it. Later frames add the elapsed time, clamped to
    /// `[0, max_frame_delta]`, to the accumulator and drain it in fixed
    /// steps. While paused, elapsed time is discarded. A stop event pauses
    /// the simulation and drops whatever time is left in the accumulator.
    ///
    /// Non-finite timestamps are ignored. Parameters that fail
    /// [`PhysicsParameters::validate`] are never stepped: such frames are
    /// idle and discard their time, so the published state stays finite.
    pub fn on_frame(&mut self, timestamp: f64) -> Frame {
        if !timestamp.is_finite() {
            tracing::warn!(timestamp, "ignoring non-finite frame timestamp");
            return self.idle_frame();
        }

        let Some(last) = self.last_timestamp.replace(timestamp) else {
            return self.idle_frame();
        };

        let delta = (timestamp - last).clamp(0.0, self.config.max_frame_delta());
        self.accumulator += delta;

        if !self.mode.is_stepping() {
            self.accumulator = 0.0;
            return self.idle_frame();
        }

        if let Err(err) = self.check_steppable() {
            tracing::warn!(%err, "refusing to step");
            self.accumulator = 0.0;
            return self.idle_frame();
        }

        let dt = self.config.time_step();
        let mut steps = 0;
        let mut event = None;

        while self.accumulator >= dt {
            let before = self.state;
            let mut after = step(&before, &self.params, dt);
            self.accumulator -= dt;
            steps += 1;

            if let Some(fired) = self.mode.stop_event(&before, &after) {
                fired.snap(&mut after);
                self.state = after;
                self.mode = SimulationMode::Paused;
                self.accumulator = 0.0;
                event = Some(fired);
                tracing::debug!(
                    event = %fired,
                    time = after.time,
                    theta = after.theta,
                    omega = after.omega,
                    "stop condition reached"
                );
                break;
            }

            self.state = after;
        }

        tracing::trace!(steps, time = self.state.time, theta = self.state.theta, "frame drained");

        Frame {
            state: self.state,
            steps,
            event,
        }
    }

    fn check_steppable(&self) -> Result<()> {
        self.params.validate()?;
        SimulationConfig::new(self.config.time_step(), self.config.max_frame_delta())?;
        Ok(())
    }

    fn idle_frame(&self) -> Frame {
        Frame {
            state: self.state,
            steps: 0,
            event: None,
        }
    }
}

/// Rest at the release angle, or at the bottom when the angle is unusable.
fn release_state(params: &PhysicsParameters) -> AngularState {
    if params.initial_angle.is_finite() {
        AngularState::at_rest(params)
    } else {
        tracing::warn!(initial_angle = params.initial_angle, "non-finite release angle");
        AngularState::default()
    }
}
