//! Committed order lines.

use serde::{Deserialize, Serialize};

use orderpad_catalog::Sku;
use orderpad_core::ValueObject;

/// One confirmed line item: SKU, derived aisle/price, quantity, classifier.
///
/// Lines are created only by committing a valid draft, so the derived fields
/// always carry the catalog values for the SKU at commit time. Once appended
/// to a list a line never changes; it can only be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: Sku,
    pub aisle: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price_cents: u64,
    pub quantity: u32,
    pub order_type: String,
}

impl ValueObject for OrderLine {}
