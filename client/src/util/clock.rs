//! Viewer-local clock used for card timestamps.

use trajectories::Clock;

/// Clock for the browser's current UTC offset.
///
/// `Date.getTimezoneOffset` reports minutes *behind* UTC, so the sign flips.
/// Server renders use UTC; hydration re-renders with the local offset.
#[must_use]
pub fn viewer_clock() -> Clock {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let behind = js_sys::Date::new_0().get_timezone_offset() as i32;
        Clock::from_minutes_east(-behind)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Clock::utc()
    }
}
