//! User-facing console sink for discovery diagnostics.
//!
//! # Responsibility
//! - Give the plugin layer one injected sink for info/warn/error lines.
//! - Keep discovery testable: tests substitute a recording sink instead of
//!   asserting on global logger output.

use log::{error, info, warn};

/// Sink for user-facing discovery diagnostics.
///
/// Discovery never propagates errors to the caller; everything a user should
/// see goes through this trait.
pub trait Console {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default console backed by the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConsole;

impl LogConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for LogConsole {
    fn info(&self, message: &str) {
        info!("event=plugin_console module=plugin status=ok message={message}");
    }

    fn warn(&self, message: &str) {
        warn!("event=plugin_console module=plugin status=warn message={message}");
    }

    fn error(&self, message: &str) {
        error!("event=plugin_console module=plugin status=error message={message}");
    }
}
