//! Errors raised when validating simulation inputs.
//!
//! The numeric core never fails: once parameters have passed validation the
//! integrator, loop and derivations are total over finite inputs. Everything
//! in this module is therefore about the boundary, where configuration enters.

/// Error returned when physical parameters or loop tuning are out of range.
///
/// # Example
///
/// ```rust
/// use pendulum::{Error, PhysicsParameters};
///
/// let err = PhysicsParameters::new(1.0, 0.0, 9.81, 30.0).unwrap_err();
/// assert!(matches!(err, Error::InvalidLength(_)));
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Mass must be finite and strictly positive.
    ///
    /// Tension and gravity scale linearly with mass; a zero or negative
    /// mass has no physical meaning for the bob.
    #[error("mass must be finite and > 0 kg, got {0}")]
    InvalidMass(f64),

    /// String length must be finite and strictly positive.
    ///
    /// The equation of motion divides by the length, so zero would
    /// produce infinite angular acceleration.
    #[error("length must be finite and > 0 m, got {0}")]
    InvalidLength(f64),

    /// Gravity must be finite and strictly positive.
    ///
    /// The period divides by gravity; zero gravity has no oscillation.
    #[error("gravity must be finite and > 0 m/s², got {0}")]
    InvalidGravity(f64),

    /// Initial angle must be finite and strictly between -180° and 180°.
    ///
    /// At ±180° the bob balances on top of the pivot and the period is
    /// unbounded.
    #[error("initial angle must be finite and within (-180°, 180°), got {0}")]
    InvalidAngle(f64),

    /// The fixed integration step must be finite and strictly positive.
    #[error("time step must be finite and > 0 s, got {0}")]
    InvalidTimeStep(f64),

    /// The frame-delta ceiling must be finite and at least one time step.
    ///
    /// A ceiling below the time step would make the loop unable to ever
    /// accumulate a full step.
    #[error("max frame delta must be finite and >= the time step, got {0}")]
    InvalidMaxFrameDelta(f64),
}

/// A specialized [`Result`] type for pendulum validation.
pub type Result<T> = std::result::Result<T, Error>;
