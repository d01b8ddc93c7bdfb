//! User-facing notification seam
//!
//! Mutating catalog operations report their outcome through a `Notifier`.
//! This is a display concern only: callers decide control flow from the
//! operation's return value, not from notifications.

/// Sink for one-shot outcome messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that discards everything; the default for embedded use and tests
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
