use core::time::Duration;

/// Decide whether the extension window has run out.
///
/// `elapsed` is measured from the start of the current on-cycle and
/// `limit` is [`ControllerConfig::cycle_limit`], so the display stays on
/// while `elapsed < base_on + extension_window`.
///
/// [`ControllerConfig::cycle_limit`]: crate::config::ControllerConfig::cycle_limit
pub fn window_expired(elapsed: Duration, limit: Duration) -> bool {
    elapsed >= limit
}

/// Decide whether an idle poll has to issue "off".
///
/// Only the first idle evaluation after the display was on (or after
/// startup, when nothing has been issued yet) switches it off.
pub fn idle_needs_off(last_directive: Option<bool>) -> bool {
    last_directive != Some(false)
}
