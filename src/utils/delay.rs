use std::time::Duration;

/// Utility functions for the timers used throughout the page
pub struct Delay;

impl Delay {
    /// Timer future for an arbitrary duration, usable on web and desktop
    pub fn for_duration(duration: Duration) -> futures_timer::Delay {
        futures_timer::Delay::new(duration)
    }
}
