#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Integration tests covering long-duration stability, energy conservation,
//! stop conditions driven through the frame loop, and extreme parameters.

use pendulum::{
    AngularState, PhysicsParameters, Simulation, SimulationConfig, SimulationMode, StopEvent,
    TOP_DETECTION_THRESHOLD, energy, exact_period, fps, small_angle_period, step,
};

fn params(initial_angle: f64) -> PhysicsParameters {
    PhysicsParameters::new(1.0, 1.0, 9.81, initial_angle).unwrap()
}

/// Integrates exactly `duration` seconds: whole steps of `dt`, then one
/// partial step for the remainder.
fn integrate_for(
    state: AngularState,
    params: &PhysicsParameters,
    dt: f64,
    duration: f64,
) -> AngularState {
    let whole = (duration / dt).floor() as u64;
    let mut state = state;
    for _ in 0..whole {
        state = step(&state, params, dt);
    }
    let remainder = duration - whole as f64 * dt;
    if remainder > 0.0 {
        state = step(&state, params, remainder);
    }
    state
}

// =============================================================================
// Integrator: one full period returns to the release point
// =============================================================================

#[test]
fn one_period_returns_to_release_point() {
    for degrees in [5.0, 30.0, 60.0, 120.0] {
        let p = params(degrees);
        let start = AngularState::at_rest(&p);
        let period = exact_period(p.initial_angle_radians(), p.length, p.gravity);

        let end = integrate_for(start, &p, 1e-3, period);

        assert!(
            (end.theta - start.theta).abs() < 1e-6,
            "θ0={degrees}°: theta drifted to {} from {}",
            end.theta,
            start.theta
        );
        assert!(
            end.omega.abs() < 1e-5,
            "θ0={degrees}°: omega should be ~0 after one period, got {}",
            end.omega
        );
    }
}

#[test]
fn half_period_reaches_mirror_image() {
    let p = params(45.0);
    let start = AngularState::at_rest(&p);
    let period = exact_period(p.initial_angle_radians(), p.length, p.gravity);

    let half = integrate_for(start, &p, 1e-3, period / 2.0);

    assert!((half.theta + start.theta).abs() < 1e-6);
    assert!(half.omega.abs() < 1e-5);
}

// =============================================================================
// Integrator: long-duration stability and energy
// =============================================================================

#[test]
fn energy_conserved_over_many_swings() {
    let p = params(70.0);
    let mut state = AngularState::at_rest(&p);
    let initial = energy(&state, &p).total();

    // 100 simulated seconds at 240 steps per second.
    for _ in 0..24_000 {
        state = step(&state, &p, fps(240));
        assert!(state.theta.is_finite());
        assert!(state.omega.is_finite());
    }

    let drift = ((energy(&state, &p).total() - initial) / initial).abs();
    assert!(drift < 1e-6, "relative energy drift {drift:e}");
    assert!(state.theta.abs() <= p.initial_angle_radians() + 1e-6);
}

#[test]
fn near_inverted_release_stays_finite() {
    let p = params(179.5);
    let mut state = AngularState::at_rest(&p);
    for _ in 0..10_000 {
        state = step(&state, &p, fps(240));
    }
    assert!(state.theta.is_finite());
    assert!(state.omega.is_finite());
    assert!(state.theta.abs() < std::f64::consts::PI);
}

#[test]
fn heavy_short_pendulum_swings_faster() {
    let short = PhysicsParameters::new(50.0, 0.25, 9.81, 20.0).unwrap();
    let long = PhysicsParameters::new(50.0, 4.0, 9.81, 20.0).unwrap();
    let a = short.initial_angle_radians();

    assert!(
        exact_period(a, short.length, short.gravity) < exact_period(a, long.length, long.gravity)
    );
}

// =============================================================================
// Frame loop: accumulator bookkeeping
// =============================================================================

#[test]
fn accumulator_stays_below_one_step_with_jittery_frames() {
    let config = SimulationConfig::new(0.016, 0.1).unwrap();
    let mut sim = Simulation::with_config(params(30.0), config);
    sim.set_mode(SimulationMode::Running);

    let deltas = [0.0, 0.004, 0.033, 0.017, 0.05, 0.001, 0.09, 0.016, 0.02];
    let mut t = 0.0;
    let mut total_steps = 0;
    for delta in deltas {
        t += delta;
        total_steps += sim.on_frame(t).steps;
        assert!(sim.accumulator() < config.time_step());
        assert!(sim.accumulator() >= 0.0);
    }

    let integrated = f64::from(total_steps) * config.time_step();
    assert!((sim.state().time - integrated).abs() < 1e-9);
    assert!((integrated + sim.accumulator() - t).abs() < 1e-9);
}

#[test]
fn frame_delta_of_fifty_ms_drains_three_steps() {
    let config = SimulationConfig::new(0.016, 0.1).unwrap();
    let mut sim = Simulation::with_config(params(30.0), config);
    sim.set_mode(SimulationMode::Running);

    assert_eq!(sim.on_frame(10.0).steps, 0);
    assert_eq!(sim.on_frame(10.05).steps, 3);
    assert!((sim.accumulator() - 0.002).abs() < 1e-9);
}

#[test]
fn paused_simulation_ignores_any_amount_of_time() {
    let mut sim = Simulation::new(params(30.0));
    let before = *sim.state();

    for t in [0.0, 1.0, 1.5, 1000.0, 1e6] {
        sim.on_frame(t);
        assert_eq!(sim.state().theta, before.theta);
        assert_eq!(sim.state().omega, before.omega);
        assert_eq!(sim.state().time, before.time);
        assert_eq!(sim.accumulator(), 0.0);
    }
}

#[test]
fn time_advances_only_in_whole_steps() {
    let config = SimulationConfig::new(0.01, 0.1).unwrap();
    let mut sim = Simulation::with_config(params(10.0), config);
    sim.set_mode(SimulationMode::Running);

    let mut t = 0.0;
    for _ in 0..200 {
        sim.on_frame(t);
        let steps = (sim.state().time / config.time_step()).round();
        assert!((sim.state().time - steps * config.time_step()).abs() < 1e-9);
        t += fps(144);
    }
}

// =============================================================================
// Frame loop: stop conditions
// =============================================================================

#[test]
fn bottom_crossing_snaps_theta_to_zero() {
    let config = SimulationConfig::new(0.016, 0.1).unwrap();
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(0.05, -4.0));
    sim.set_mode(SimulationMode::PauseAtBottom);

    sim.on_frame(0.0);
    let frame = sim.on_frame(0.016);

    assert_eq!(frame.event, Some(StopEvent::ReachedBottom));
    assert_eq!(frame.state.theta, 0.0);
    assert_eq!(sim.mode(), SimulationMode::Paused);
}

#[test]
fn bottom_stop_leaves_remaining_time_unintegrated() {
    let config = SimulationConfig::new(0.016, 0.1).unwrap();
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(0.05, -4.0));
    sim.set_mode(SimulationMode::PauseAtBottom);

    sim.on_frame(0.0);
    let frame = sim.on_frame(0.09);

    assert_eq!(frame.steps, 1);
    assert!((sim.state().time - 0.016).abs() < 1e-12);
    assert_eq!(sim.accumulator(), 0.0);
}

#[test]
fn released_pendulum_stops_at_quarter_period() {
    let p = params(40.0);
    let config = SimulationConfig::new(1e-3, 0.1).unwrap();
    let mut sim = Simulation::with_config(p, config);
    sim.set_mode(SimulationMode::PauseAtBottom);

    let mut t = 0.0;
    sim.on_frame(t);
    while sim.mode() != SimulationMode::Paused {
        t += fps(60);
        sim.on_frame(t);
    }

    let quarter = exact_period(p.initial_angle_radians(), p.length, p.gravity) / 4.0;
    assert!((sim.state().time - quarter).abs() <= config.time_step());
    assert_eq!(sim.state().theta, 0.0);
    assert!(sim.state().omega < 0.0);
}

#[test]
fn turning_point_requires_positive_angle_above_threshold() {
    let config = SimulationConfig::new(1e-3, 0.1).unwrap();

    // Just above the threshold: fires and snaps omega.
    let above = TOP_DETECTION_THRESHOLD + 0.05;
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(above, 1e-4));
    sim.set_mode(SimulationMode::PauseAtTop);
    sim.on_frame(0.0);
    let frame = sim.on_frame(0.001);
    assert_eq!(frame.event, Some(StopEvent::ReachedTop));
    assert_eq!(sim.state().omega, 0.0);
    assert_eq!(sim.mode(), SimulationMode::Paused);

    // Below the threshold: the same sign change is ignored.
    let below = TOP_DETECTION_THRESHOLD / 2.0;
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(below, 1e-6));
    sim.set_mode(SimulationMode::PauseAtTop);
    sim.on_frame(0.0);
    let frame = sim.on_frame(0.001);
    assert_eq!(frame.event, None);
    assert!(sim.state().omega < 0.0);
    assert_eq!(sim.mode(), SimulationMode::PauseAtTop);
}

#[test]
fn resuming_from_top_does_not_refire() {
    let config = SimulationConfig::new(1e-3, 0.1).unwrap();
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(0.5, 1e-4));
    sim.set_mode(SimulationMode::PauseAtTop);
    sim.on_frame(0.0);
    assert!(sim.on_frame(0.001).event.is_some());

    // Re-arm immediately: the next step leaves the snapped zero and must
    // not count as another turning point.
    sim.set_mode(SimulationMode::PauseAtTop);
    let frame = sim.on_frame(0.011);
    assert_eq!(frame.event, None);
    assert!(frame.steps >= 9);
    assert!(sim.state().omega < 0.0);
}

#[test]
fn resuming_from_bottom_does_not_refire() {
    let config = SimulationConfig::new(0.016, 0.1).unwrap();
    let mut sim =
        Simulation::with_config(params(30.0), config).with_state(AngularState::new(0.05, -4.0));
    sim.set_mode(SimulationMode::PauseAtBottom);
    sim.on_frame(0.0);
    assert!(sim.on_frame(0.016).event.is_some());

    sim.set_mode(SimulationMode::PauseAtBottom);
    let frame = sim.on_frame(0.032);
    assert_eq!(frame.event, None);
    assert!(sim.state().theta < 0.0);
}

#[test]
fn reset_to_invalid_snapshot_keeps_published_state_finite() {
    let edits: [fn(&mut PhysicsParameters); 4] = [
        |p| p.length = 0.0,
        |p| p.mass = -1.0,
        |p| p.gravity = f64::INFINITY,
        |p| p.initial_angle = f64::NAN,
    ];

    let mut sim = Simulation::new(params(30.0));
    for edit in edits {
        let mut broken = params(30.0);
        edit(&mut broken);
        sim.reset(broken);
        sim.set_mode(SimulationMode::Running);
        let mut t = 0.0;
        for _ in 0..30 {
            let frame = sim.on_frame(t);
            assert_eq!(frame.steps, 0, "{broken:?} should not step");
            assert!(frame.state.theta.is_finite());
            assert!(frame.state.omega.is_finite());
            assert!(frame.state.alpha.is_finite());
            t += fps(60);
        }
    }
}

// =============================================================================
// Period
// =============================================================================

#[test]
fn period_converges_to_small_angle_limit() {
    let t0 = small_angle_period(2.5, 9.81);
    let mut previous_gap = f64::INFINITY;
    for degrees in [10.0, 1.0, 0.1, 0.01] {
        let gap = exact_period(f64::to_radians(degrees), 2.5, 9.81) - t0;
        assert!(gap >= 0.0);
        assert!(gap < previous_gap);
        previous_gap = gap;
    }
    assert!(previous_gap < 1e-8);
}

#[test]
fn period_independent_of_mass() {
    let light = PhysicsParameters::new(0.1, 1.0, 9.81, 50.0).unwrap();
    let heavy = PhysicsParameters::new(100.0, 1.0, 9.81, 50.0).unwrap();
    let light_sim = Simulation::new(light);
    let heavy_sim = Simulation::new(heavy);
    assert_eq!(
        light_sim.readout().exact_period,
        heavy_sim.readout().exact_period
    );
}
