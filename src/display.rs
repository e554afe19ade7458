//! Display power actuator.

/// Accepts an on/off directive for the attached screen.
///
/// Calls are synchronous; the controller blocks until the directive has
/// been applied or failed.
pub trait DisplayPower {
    type Error: core::fmt::Debug;

    fn set_power(&mut self, on: bool) -> Result<(), Self::Error>;
}

impl<T: DisplayPower + ?Sized> DisplayPower for &mut T {
    type Error = T::Error;

    fn set_power(&mut self, on: bool) -> Result<(), Self::Error> {
        (**self).set_power(on)
    }
}
