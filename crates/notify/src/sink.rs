//! Notification sink seam and shipped implementations.

use std::sync::Mutex;

use crate::notification::Notification;

/// Where notifications go. Fire-and-forget: implementors must not fail and
/// callers never wait on a result.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Sink that surfaces notifications through the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            message = %notification.message,
            dismiss_after_ms = notification.dismiss_after.as_millis() as u64,
            "user notification"
        );
    }
}

/// In-memory sink recording every notification, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    notifications: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .map(|all| all.iter().map(|n| n.message.clone()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_messages_in_order() {
        let sink = MemorySink::new();
        sink.notify(&Notification::new("first"));
        sink.notify(&Notification::new("second"));

        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn fresh_memory_sink_is_empty() {
        assert!(MemorySink::new().is_empty());
    }
}
