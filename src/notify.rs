//! User-facing notification surface.
//!
//! The toast/banner widget itself is an external collaborator; this module
//! only defines the fire-and-forget seam the synchronizer emits through.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Fire-and-forget notification sink. No return value is consumed.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Default sink that forwards notifications to the tracing pipeline.
///
/// Useful for headless callers and as a stand-in until a UI sink is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Error => tracing::warn!("{message}"),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    /// Test sink that records every notification it receives.
    pub struct RecordingNotifier {
        pub events: Mutex<Vec<(String, Severity)>>,
    }

    impl RecordingNotifier {
        #[must_use]
        pub fn new() -> Self {
            Self { events: Mutex::new(Vec::new()) }
        }

        /// Messages received so far, in order.
        pub fn messages(&self) -> Vec<(String, Severity)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.events.lock().unwrap().push((message.to_string(), severity));
        }
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
