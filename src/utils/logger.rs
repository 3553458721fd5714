/// Debug logging utility
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Initialize debug logging - enabled for debug builds only
pub fn init_debug_logging() {
    let enabled = cfg!(debug_assertions);
    let _ = DEBUG_ENABLED.set(enabled);

    // dioxus::launch installs the same subscriber later; a second init is a no-op
    let _ = dioxus::logger::init(if enabled {
        dioxus::logger::tracing::Level::DEBUG
    } else {
        dioxus::logger::tracing::Level::INFO
    });

    if enabled {
        dioxus::logger::tracing::info!("🐛 Debug logging enabled");
    }
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

/// Debug print macro - only prints if debug logging is enabled
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            dioxus::logger::tracing::debug!($($arg)*);
        }
    };
}

/// Debug error print macro - only prints if debug logging is enabled
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            dioxus::logger::tracing::warn!($($arg)*);
        }
    };
}

/// Always print macro - for startup and lifecycle messages that should always show
#[macro_export]
macro_rules! always_print {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::info!($($arg)*)
    };
}

/// Always error print macro - for critical errors that should always show
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        dioxus::logger::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_follows_build_profile_and_can_run_twice() {
        init_debug_logging();
        init_debug_logging();
        assert_eq!(is_debug_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn every_macro_expands_with_format_args() {
        init_debug_logging();
        let count = 3;
        crate::debug_print!("debug {}", count);
        crate::debug_eprint!("warn {}", count);
        crate::always_print!("info {count}");
        crate::always_eprint!("error {}", count);
    }
}
