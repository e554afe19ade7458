//! Scenario tests for the controller driven by the blocking runner on a
//! simulated clock.

use std::time::Duration;

use pirscreen::runner;
use pirscreen::sim::{display_state_at, Directive, ManualClock, RecordingDisplay, TimelineSensor};
use pirscreen::{ControllerConfig, ControllerState, MotionDisplayController, Transition};

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

/// 25 s base window, 20 s extension window, 0.5 s polls, no warm-up.
fn config() -> ControllerConfig {
    ControllerConfig {
        warmup: Duration::ZERO,
        base_on: secs(25.0),
        extension_window: secs(20.0),
        idle_poll: secs(0.5),
        extension_poll: secs(0.5),
        verbose: false,
    }
}

struct Outcome {
    directives: Vec<Directive>,
    transitions: Vec<(Duration, Transition)>,
    state: ControllerState,
}

fn simulate(motion: &[(f64, f64)], until: f64) -> Outcome {
    let mut clock = ManualClock::new();
    let sensor = TimelineSensor::new(clock.clone(), motion);
    let display = RecordingDisplay::new(clock.clone());
    let log = display.log();
    let controller = MotionDisplayController::new(sensor, display, config());

    let mut transitions = Vec::new();
    let controller = runner::run_for(controller, &mut clock, secs(until), |now, step| {
        if let Some(t) = step.transition {
            transitions.push((now, t));
        }
    })
    .expect("simulated collaborators never fail");

    let directives = log.borrow().clone();
    Outcome {
        directives,
        transitions,
        state: controller.state(),
    }
}

#[test]
fn reference_scenario_switches_off_after_window() {
    // t=0 no motion, t=0.5 motion, then nothing.
    let out = simulate(&[(0.5, 0.6)], 60.0);

    assert_eq!(
        out.directives,
        vec![(secs(0.0), false), (secs(0.5), true), (secs(45.5), false)]
    );
    assert_eq!(
        out.transitions,
        vec![
            (secs(0.0), Transition::DisplayOff),
            (secs(0.5), Transition::DisplayOn),
            (secs(25.5), Transition::WindowEntered),
            (secs(45.5), Transition::WindowExpired { on_for: secs(45.0) }),
        ]
    );
    assert_eq!(out.state, ControllerState::Idle);
}

#[test]
fn reference_scenario_restart_inside_window() {
    // Renewed motion at t=30, inside the 25.5..45.5 window.
    let out = simulate(&[(0.5, 0.6), (30.0, 30.1)], 100.0);

    assert_eq!(
        out.transitions,
        vec![
            (secs(0.0), Transition::DisplayOff),
            (secs(0.5), Transition::DisplayOn),
            (secs(25.5), Transition::WindowEntered),
            (secs(30.0), Transition::Restarted { after: secs(29.5) }),
            (secs(55.0), Transition::WindowEntered),
            (secs(75.0), Transition::WindowExpired { on_for: secs(45.0) }),
        ]
    );
    assert_eq!(
        out.directives,
        vec![
            (secs(0.0), false),
            (secs(0.5), true),
            (secs(30.0), true),
            (secs(75.0), false),
        ]
    );
}

#[test]
fn display_stays_on_through_base_window_and_off_within_bound() {
    let t = 3.0;
    let out = simulate(&[(t, t + 0.1)], 120.0);
    let log = &out.directives;

    let base_end = t + 25.0;
    let mut probe = t;
    while probe < base_end {
        assert_eq!(display_state_at(log, secs(probe)), Some(true), "t={}", probe);
        probe += 0.25;
    }

    let off_at = log
        .iter()
        .find(|&&(when, on)| !on && when > secs(t))
        .map(|&(when, _)| when)
        .expect("display switched off");
    assert!(off_at >= secs(base_end));
    assert!(off_at <= secs(t + 25.0 + 20.0 + 0.5));
}

#[test]
fn continuous_motion_keeps_display_on() {
    let out = simulate(&[(1.0, 200.0)], 190.0);

    assert!(out.directives.iter().skip(1).all(|&(_, on)| on));
    assert_eq!(display_state_at(&out.directives, secs(189.0)), Some(true));
    let restarts = out
        .transitions
        .iter()
        .filter(|(_, t)| matches!(t, Transition::Restarted { .. }))
        .count();
    // cycles at 1, 26, 51, ... each restart at window entry
    assert_eq!(restarts, 7);
}

#[test]
fn motion_after_window_starts_fresh_cycle() {
    let out = simulate(&[(0.0, 0.1), (50.0, 50.1)], 120.0);

    assert_eq!(
        out.directives,
        vec![
            (secs(0.0), true),
            (secs(45.0), false),
            (secs(50.0), true),
            (secs(95.0), false),
        ]
    );
    let fresh = out
        .transitions
        .iter()
        .filter(|(_, t)| *t == Transition::DisplayOn)
        .count();
    assert_eq!(fresh, 2);
}

#[test]
fn long_idle_period_issues_single_off() {
    let out = simulate(&[], 600.0);

    assert_eq!(out.directives, vec![(secs(0.0), false)]);
    assert_eq!(out.transitions, vec![(secs(0.0), Transition::DisplayOff)]);
}
