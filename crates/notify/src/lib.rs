//! Transient user notification module.
//!
//! Fire-and-forget messages surfaced to the user after an action (order
//! added, order removed, validation failed). The sink is a trait seam so
//! the core never depends on a concrete message surface.

pub mod notification;
pub mod sink;

pub use notification::{Notification, AUTO_DISMISS};
pub use sink::{MemorySink, NotificationSink, TracingSink};
