//! Blocking driver loop: poll → act → sleep → repeat.
//!
//! The controller is moved in, so its sensor handle and actuator are
//! dropped exactly once, on whichever path leaves the loop.

use core::time::Duration;

use crate::clock::Clock;
use crate::controller::{ControllerError, MotionDisplayController, Step};
use crate::display::DisplayPower;
use crate::sensor::MotionSensor;

/// Warm up, then run the control loop until a poll fails.
///
/// `observe` sees every step together with the time it was polled at.
/// Returns only on a fatal error; the collaborators have already been
/// released when it does.
pub fn run<S, D, C, F>(
    controller: MotionDisplayController<S, D>,
    clock: &mut C,
    mut observe: F,
) -> ControllerError<S, D>
where
    S: MotionSensor,
    D: DisplayPower,
    C: Clock,
    F: FnMut(Duration, &Step),
{
    let mut controller = controller;

    let err = match warm_up(&mut controller, clock) {
        Err(e) => e,
        Ok(()) => loop {
            if let Err(e) = cycle(&mut controller, clock, &mut observe) {
                break e;
            }
        },
    };

    drop(controller);
    err
}

/// Same loop as [`run`], stopping at the first poll at or after `until`.
///
/// Hands the controller back on success so callers can inspect it; on
/// error it is released before returning.
pub fn run_for<S, D, C, F>(
    controller: MotionDisplayController<S, D>,
    clock: &mut C,
    until: Duration,
    mut observe: F,
) -> Result<MotionDisplayController<S, D>, ControllerError<S, D>>
where
    S: MotionSensor,
    D: DisplayPower,
    C: Clock,
    F: FnMut(Duration, &Step),
{
    let mut controller = controller;

    warm_up(&mut controller, clock)?;
    while clock.now() < until {
        cycle(&mut controller, clock, &mut observe)?;
    }

    Ok(controller)
}

fn warm_up<S, D, C>(
    controller: &mut MotionDisplayController<S, D>,
    clock: &mut C,
) -> Result<(), ControllerError<S, D>>
where
    S: MotionSensor,
    D: DisplayPower,
    C: Clock,
{
    let delay = controller.warm_up()?;
    if !delay.is_zero() {
        clock.sleep(delay);
    }
    Ok(())
}

fn cycle<S, D, C, F>(
    controller: &mut MotionDisplayController<S, D>,
    clock: &mut C,
    observe: &mut F,
) -> Result<(), ControllerError<S, D>>
where
    S: MotionSensor,
    D: DisplayPower,
    C: Clock,
    F: FnMut(Duration, &Step),
{
    let now = clock.now();
    let step = controller.poll(now)?;
    observe(now, &step);
    clock.sleep(step.sleep);
    Ok(())
}
