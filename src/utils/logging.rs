//! Logging helpers for timing hot sections.

use std::time::Instant;

use log::{log_enabled, Level};

/// Logs the wall time of a scope at `trace` level when dropped. Cost is a
/// single `Instant` read when tracing is disabled.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("{} took {} us", self.label, self.start.elapsed().as_micros());
        }
    }
}
