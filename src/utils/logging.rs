//! Logging macros gated by a per-module `ENABLE_LOGS` switch.
//!
//! Modules opt in by declaring the flag next to their imports:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info, log_warn};
//!
//! log_info!("imported {} dates", added);
//! ```
//!
//! The macros forward to the `log` facade, so output still goes through
//! whatever logger the host installed (see [`crate::init_logging`]).

/// Info-level log line, emitted only when the calling module sets `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Debug-level counterpart of [`log_info!`]. Used for per-record detail.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}
