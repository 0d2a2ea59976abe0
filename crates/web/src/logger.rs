//! The logger capability.
//!
//! Embedding applications can supply their own sink; the default forwards
//! everything to `tracing`, so the usual subscriber setup applies.

use tracing::{debug, error, info, warn};

/// Log severity, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Short uppercase form used in rendered log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRI",
            Self::Error => "ERR",
            Self::Warning => "WRN",
            Self::Info => "INF",
            Self::Debug => "DBG",
        }
    }
}

/// A log sink. `tag` names the emitting subsystem.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, tag: &str, message: &str);
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        (**self).log(level, tag, message);
    }
}

/// Default [`Logger`] forwarding to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        match level {
            LogLevel::Critical | LogLevel::Error => error!(tag, severity = level.as_str(), "{message}"),
            LogLevel::Warning => warn!(tag, "{message}"),
            LogLevel::Info => info!(tag, "{message}"),
            LogLevel::Debug => debug!(tag, "{message}"),
        }
    }
}
