//! Notification value.

use core::time::Duration;

use chrono::{DateTime, Utc};

/// How long a notification stays visible before auto-dismissing, unless the
/// user dismisses it explicitly first.
pub const AUTO_DISMISS: Duration = Duration::from_millis(4000);

/// One transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Utc::now(),
            dismiss_after: AUTO_DISMISS,
        }
    }
}
