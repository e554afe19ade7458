//! PIR motion sensor input.
//!
//! The controller only needs one boolean per poll. Anything that can
//! produce it implements [`MotionSensor`]; [`PirSensor`] adapts any
//! `embedded-hal` input pin (the PIR output is active-high).

use embedded_hal::digital::InputPin;

/// Source of "motion present" readings, polled at a fixed cadence.
pub trait MotionSensor {
    type Error: core::fmt::Debug;

    /// Read the line once. Must return promptly.
    fn motion_detected(&mut self) -> Result<bool, Self::Error>;
}

impl<T: MotionSensor + ?Sized> MotionSensor for &mut T {
    type Error = T::Error;

    fn motion_detected(&mut self) -> Result<bool, Self::Error> {
        (**self).motion_detected()
    }
}

/// PIR module wired to a digital input. High means motion; any other
/// level is treated as no motion.
pub struct PirSensor<P> {
    pin: P,
}

impl<P: InputPin> PirSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back (e.g. to reconfigure it).
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> MotionSensor for PirSensor<P> {
    type Error = P::Error;

    fn motion_detected(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct FakePin {
        level: Result<bool, ErrorKind>,
    }

    impl ErrorType for FakePin {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.level
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.level.map(|high| !high)
        }
    }

    #[test]
    fn high_level_is_motion() {
        let mut pir = PirSensor::new(FakePin { level: Ok(true) });
        assert_eq!(pir.motion_detected(), Ok(true));
    }

    #[test]
    fn low_level_is_no_motion() {
        let mut pir = PirSensor::new(FakePin { level: Ok(false) });
        assert_eq!(pir.motion_detected(), Ok(false));
    }

    #[test]
    fn pin_error_is_propagated() {
        let mut pir = PirSensor::new(FakePin {
            level: Err(ErrorKind::Other),
        });
        assert_eq!(pir.motion_detected(), Err(ErrorKind::Other));
    }

    #[test]
    fn borrowed_sensor_reads_through() {
        fn read_once<S: MotionSensor>(mut sensor: S) -> Result<bool, S::Error> {
            sensor.motion_detected()
        }

        let mut pir = PirSensor::new(FakePin { level: Ok(true) });
        assert_eq!(read_once(&mut pir), Ok(true));
        assert!(pir.release().level.is_ok());
    }
}
