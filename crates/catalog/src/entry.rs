//! Catalog entries and the seeded lookup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use orderpad_core::ValueObject;

use crate::sku::Sku;

/// One row of the catalog: where a SKU lives and what one unit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub sku: Sku,
    pub aisle: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price_cents: u64,
}

impl ValueObject for CatalogEntry {}

/// Reference seed data: {sku, aisle, unit price in cents}.
const SEED: [(u32, u32, u64); 6] = [
    (1, 1, 1000),
    (2, 1, 1500),
    (3, 1, 400),
    (4, 2, 100),
    (5, 2, 200),
    (6, 2, 800),
];

/// Static SKU lookup table, read-only at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<Sku, CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from arbitrary entries. A duplicate SKU keeps the
    /// last entry seen.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.sku, e)).collect(),
        }
    }

    /// The reference catalog seeded at startup.
    pub fn seeded() -> Self {
        Self::new(SEED.iter().map(|&(sku, aisle, unit_price_cents)| {
            CatalogEntry {
                sku: Sku::new(sku),
                aisle,
                unit_price_cents,
            }
        }))
    }

    pub fn find_by_sku(&self, sku: Sku) -> Option<&CatalogEntry> {
        self.entries.get(&sku)
    }

    pub fn contains(&self, sku: Sku) -> bool {
        self.entries.contains_key(&sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
