//! # Notification Sink
//!
//! User-facing message seam. The mobile shell implements this with its
//! toast component; tests implement it with a recorder.
//!
//! Three severities, fire-and-forget, no return value: the session never
//! waits on or reacts to the UI acknowledging a message.

/// Trait for surfacing user-facing messages (implemented by the UI shell).
pub trait NotificationSink: Send + Sync {
    /// Informational message.
    fn info(&self, message: &str);

    /// Something went wrong but the app remains usable.
    fn warn(&self, message: &str);

    /// An operation failed mid-flight (e.g. a half-printed receipt).
    fn error(&self, message: &str);
}

/// No-op sink for headless use and tests that don't assert on messages.
pub struct NoOpSink;

impl NotificationSink for NoOpSink {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
