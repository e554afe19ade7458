//! Host-side fakes for driving the controller without hardware.
//!
//! - [`ManualClock`]: time only moves when something sleeps or advances it.
//! - [`TimelineSensor`]: reports motion inside scripted time intervals.
//! - [`RecordingDisplay`]: records every directive with its timestamp.
//!
//! All three share the clock handle, so a scenario is described as
//! "motion between t=30 s and t=31 s" rather than as a list of readings.

use core::time::Duration;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::Clock;
use crate::display::DisplayPower;
use crate::sensor::MotionSensor;

/// Injected failure of a simulated collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimFault;

/// Clock that only advances on `sleep`/`advance`. Clones share the time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

/// PIR stand-in: motion is present during each half-open `[start, end)`
/// interval, given in seconds.
pub struct TimelineSensor {
    clock: ManualClock,
    motion: Vec<(Duration, Duration)>,
    fail_from: Option<Duration>,
    reads: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl TimelineSensor {
    pub fn new(clock: ManualClock, motion: &[(f64, f64)]) -> Self {
        Self {
            clock,
            motion: motion
                .iter()
                .map(|&(start, end)| {
                    (Duration::from_secs_f64(start), Duration::from_secs_f64(end))
                })
                .collect(),
            fail_from: None,
            reads: Rc::new(Cell::new(0)),
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// Every read at or after `at` fails.
    pub fn fail_from(mut self, at: Duration) -> Self {
        self.fail_from = Some(at);
        self
    }

    /// Shared read counter.
    pub fn reads(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }

    /// Shared counter incremented when the sensor is released.
    pub fn drops(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.drops)
    }
}

impl MotionSensor for TimelineSensor {
    type Error = SimFault;

    fn motion_detected(&mut self) -> Result<bool, SimFault> {
        let now = self.clock.now();
        self.reads.set(self.reads.get() + 1);
        if self.fail_from.is_some_and(|at| now >= at) {
            return Err(SimFault);
        }
        Ok(self
            .motion
            .iter()
            .any(|&(start, end)| start <= now && now < end))
    }
}

impl Drop for TimelineSensor {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Directive log entry: when, and on (`true`) or off.
pub type Directive = (Duration, bool);

/// Display stand-in that records directives.
pub struct RecordingDisplay {
    clock: ManualClock,
    log: Rc<RefCell<Vec<Directive>>>,
    fail_on_call: Option<usize>,
    calls: usize,
    drops: Rc<Cell<usize>>,
}

impl RecordingDisplay {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            log: Rc::new(RefCell::new(Vec::new())),
            fail_on_call: None,
            calls: 0,
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// The `n`th call (1-based) fails; the failed directive is not logged.
    pub fn fail_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    pub fn log(&self) -> Rc<RefCell<Vec<Directive>>> {
        Rc::clone(&self.log)
    }

    pub fn drops(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.drops)
    }
}

impl DisplayPower for RecordingDisplay {
    type Error = SimFault;

    fn set_power(&mut self, on: bool) -> Result<(), SimFault> {
        self.calls += 1;
        if self.fail_on_call == Some(self.calls) {
            return Err(SimFault);
        }
        self.log.borrow_mut().push((self.clock.now(), on));
        Ok(())
    }
}

impl Drop for RecordingDisplay {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Whether the display was on at time `at`, according to a directive log.
/// `None` if nothing had been issued yet.
pub fn display_state_at(log: &[Directive], at: Duration) -> Option<bool> {
    log.iter()
        .take_while(|&&(when, _)| when <= at)
        .last()
        .map(|&(_, on)| on)
}
