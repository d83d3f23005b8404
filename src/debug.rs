//! Debug output control for nmconv
//!
//! Only the command-line caller and configuration loading report here; the
//! conversion pipeline itself stays silent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Set to anything but `""` or `"0"` to turn debug output on
pub const DEBUG_ENV: &str = "NMCONV_DEBUG";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static ENV_CHECKED: Once = Once::new();

fn wants_debug(value: Option<&str>) -> bool {
    matches!(value, Some(value) if !value.is_empty() && value != "0")
}

pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    ENV_CHECKED.call_once(|| {
        if wants_debug(std::env::var(DEBUG_ENV).ok().as_deref()) {
            enable_debug();
        }
    });
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Like `eprintln!`, tagged with `[nmconv]`, and only when debug output is on
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[nmconv] {}", format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_values() {
        assert!(wants_debug(Some("1")));
        assert!(wants_debug(Some("yes")));
        assert!(!wants_debug(Some("0")));
        assert!(!wants_debug(Some("")));
        assert!(!wants_debug(None));
    }

    #[test]
    fn test_enable_debug() {
        enable_debug();
        assert!(is_debug_enabled());
        debug_println!("visible in test output: {}", 42);
    }
}
