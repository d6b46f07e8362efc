//! SKU catalog module.
//!
//! This crate contains the static stock-keeping-unit lookup table: each SKU
//! maps to the warehouse aisle it is picked from and its unit price. The
//! catalog is seeded at startup and read-only at runtime (no IO, no storage).

pub mod entry;
pub mod sku;

pub use entry::{Catalog, CatalogEntry};
pub use sku::Sku;
