//! Document export module.
//!
//! This crate turns an order-line slice into the tabular content
//! description a document renderer consumes, and defines the renderer seam
//! itself. The transform is a pure function; the side-effecting render call
//! is kept behind a trait so the core stays testable without a viewer.

pub mod content;
pub mod renderer;

pub use content::{
    build_content, format_cents, DocumentContent, TableRow, COLUMNS, DOCUMENT_TITLE, HEADER_LOGO,
};
pub use renderer::{DocumentRenderer, ExportError, JsonRenderer};
