//! Sink for non-fatal diagnostics.

/// Receives one message per dropped file or host.
///
/// Implementations must return promptly; the update never waits on them.
pub trait Warner: Send + Sync {
    fn warn(&self, message: &str);
}

/// [`Warner`] that forwards every message to `log::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarner;

impl Warner for LogWarner {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
