//! Order-entry session orchestration.
//!
//! Wires the catalog, the draft, the order list, the export gate, and the
//! notification sink into one synchronous, single-user session. Every
//! operation completes (or no-ops) within the call; nothing suspends,
//! retries, or runs concurrently.

pub mod session;
pub mod telemetry;

pub use session::OrderSession;
