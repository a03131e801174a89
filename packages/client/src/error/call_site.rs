//! Call-site capture for errors that surface on a different task than the one that issued the call
//!
//! A request is issued on the caller's stack but completes on a runtime worker, so the error a
//! caller finally observes would otherwise only show where the completion happened. `CallSite`
//! is taken when the request is issued and attached to the error when the completion is built.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;

/// Where a request was issued.
///
/// The backtrace is captured unresolved; symbol names are only looked up when it is rendered.
pub struct CallSite {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl CallSite {
    /// Record the caller's location and, if enabled through `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`,
    /// its stack frames.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Record only the caller's location.
    #[track_caller]
    #[must_use]
    pub fn location_only() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::disabled(),
        }
    }

    #[cfg(test)]
    #[track_caller]
    pub(crate) fn with_frames() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::force_capture(),
        }
    }

    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Frames captured at the call site, if any were captured.
    #[must_use]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self.backtrace.status() {
            BacktraceStatus::Captured => Some(&self.backtrace),
            _ => None,
        }
    }
}

impl fmt::Debug for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallSite")
            .field("location", &self.location)
            .field("backtrace", &self.backtrace.status())
            .finish()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "issued at {}", self.location)?;
        if let Some(backtrace) = self.backtrace() {
            write!(f, "\n{backtrace}")?;
        }
        Ok(())
    }
}
