//! Ephemeral toast notifications.
//!
//! Store mutations push short success or error messages that expire on their own.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Wall-clock time shown next to the message
    pub created_at: DateTime<Local>,
    /// Monotonic deadline after which the toast is pruned
    pub expires_at: Instant,
}

impl Toast {
    /// Format creation time for display.
    pub fn format_time(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Bounded queue of live toasts, oldest first.
#[derive(Debug, Clone)]
pub struct Notifier {
    toasts: VecDeque<Toast>,
    duration: Duration,
    max_toasts: usize,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000), 4)
    }
}

impl Notifier {
    /// Create a notifier.
    ///
    /// # Arguments
    /// * `duration` - How long each toast stays visible
    /// * `max_toasts` - Upper bound on simultaneously kept toasts (at least one)
    pub fn new(duration: Duration, max_toasts: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
            max_toasts: max_toasts.max(1),
        }
    }

    /// Push a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into(), Instant::now());
    }

    /// Push an error-styled toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into(), Instant::now());
    }

    fn push(&mut self, kind: ToastKind, message: String, now: Instant) {
        tracing::debug!(?kind, %message, "notify");
        self.toasts.push_back(Toast {
            kind,
            message,
            created_at: Local::now(),
            expires_at: now + self.duration,
        });
        while self.toasts.len() > self.max_toasts {
            self.toasts.pop_front();
        }
    }

    /// Drop every toast whose deadline has passed.
    ///
    /// # Arguments
    /// * `now` - Current monotonic time
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[allow(dead_code)] // Only read by tests
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
