#![deny(missing_docs)]
//! Shared logging utilities for the jobboard workspace.
//!
//! Every crate logs through the `board_*` macros so the facade can be swapped
//! in one place. The binary decides where records go; tests call
//! [`initialize_for_tests`].

use std::sync::Once;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

static TEST_LOGGER: Once = Once::new();

/// Initializes a terminal logger for tests.
///
/// Safe to call from every test: only the first call installs a logger, and
/// an already installed logger (from another harness) is left alone.
pub fn initialize_for_tests() {
    TEST_LOGGER.call_once(|| {
        use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

        // Debug in debug builds, info in release builds.
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    });
}
