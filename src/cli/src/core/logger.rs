use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide stderr logger, configured once from `--debug`.
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    /// Debug output stays off until `init` has been called.
    pub fn debug_enabled() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::debug_enabled() {
            eprintln!("[debug] {args}");
        }
    }

    pub fn warn(message: &str) {
        eprintln!("warning: {message}");
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_calls_do_not_panic() {
        Logger::debug_fmt(format_args!("before init"));
        Logger::init(true);
        Logger::init(false);
        assert!(Logger::debug_enabled());
        Logger::debug_fmt(format_args!("Formatted: {}", "test"));
        Logger::warn("Test warning");
    }
}
