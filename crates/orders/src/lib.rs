//! Order drafting and order list module.
//!
//! This crate contains the business rules for composing one order line at a
//! time (the draft and its validity state machine) and for the session's
//! accumulated list of committed lines, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod line;
pub mod list;

pub use draft::{DraftState, OrderDraft, TouchedFields};
pub use line::OrderLine;
pub use list::OrderList;
