#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]

//! # Pendulum
//!
//! A fixed-timestep simulation of a single undamped pendulum, built for
//! teaching: it keeps the physics exact enough to show real large-amplitude
//! behaviour while letting the host render at whatever rate it can.
//!
//! Pendulum provides:
//! - **Integrator**: classical RK4 stepping of `θ'' = −(g/L)·sin θ`
//! - **Simulation**: a frame-driven loop with a time accumulator and
//!   stop conditions at the lowest point and the right-hand peak
//! - **Derivations**: speed, accelerations, tension, weight components,
//!   energy and a bundled [`Readout`] for renderers
//! - **Period**: the exact period at any amplitude via the
//!   arithmetic-geometric mean
//!
//! ## Simulation Example
//!
//! ```rust
//! use pendulum::{PhysicsParameters, Simulation, SimulationMode, StopEvent};
//!
//! let params = PhysicsParameters::new(1.0, 1.0, 9.81, 30.0)?;
//! let mut sim = Simulation::new(params);
//! sim.set_mode(SimulationMode::PauseAtBottom);
//!
//! // Feed frame timestamps (seconds) until the bob reaches the bottom.
//! let mut t = 0.0;
//! let event = loop {
//!     if let Some(event) = sim.on_frame(t).event {
//!         break event;
//!     }
//!     t += 1.0 / 60.0;
//! };
//!
//! assert_eq!(event, StopEvent::ReachedBottom);
//! assert_eq!(sim.state().theta, 0.0);
//! assert_eq!(sim.mode(), SimulationMode::Paused);
//! # Ok::<(), pendulum::Error>(())
//! ```
//!
//! ## Period Example
//!
//! ```rust
//! use pendulum::{exact_period, small_angle_period};
//!
//! let t0 = small_angle_period(1.0, 9.81);
//! let t = exact_period(60f64.to_radians(), 1.0, 9.81);
//! assert!(t > t0);
//! ```
//!
//! ## Modes
//!
//! - **Running**: integrate continuously
//! - **Paused**: integrate nothing (the state after every reset)
//! - **PauseAtBottom**: run until the bob passes the lowest point
//! - **PauseAtTop**: run until the bob turns at its right-hand peak
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the public data types

mod dynamics;
mod error;
mod integrator;
mod mode;
mod params;
mod period;
mod simulation;
mod state;
mod vector;

pub use dynamics::{
    Energy, ForceDiagram, GravityComponents, Readout, bob_position, energy, gravity_components,
    gravity_force, linear_speed, radial_acceleration, tangential_acceleration, tension,
    total_acceleration,
};
pub use error::{Error, Result};
pub use integrator::{angular_acceleration, step};
pub use mode::{ParseModeError, SimulationMode, StopEvent, TOP_DETECTION_THRESHOLD};
pub use params::{
    DEFAULT_MAX_FRAME_DELTA, DEFAULT_TIME_STEP, PhysicsParameters, STANDARD_GRAVITY,
    SimulationConfig, fps,
};
pub use period::{
    AGM_MAX_ITERATIONS, AGM_TOLERANCE, arithmetic_geometric_mean, exact_period,
    small_angle_period,
};
pub use simulation::{Frame, Simulation};
pub use state::AngularState;
pub use vector::Vector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dynamics::{ForceDiagram, Readout};
    pub use crate::mode::{SimulationMode, StopEvent};
    pub use crate::params::{PhysicsParameters, SimulationConfig, fps};
    pub use crate::period::exact_period;
    pub use crate::simulation::{Frame, Simulation};
    pub use crate::state::AngularState;
}
