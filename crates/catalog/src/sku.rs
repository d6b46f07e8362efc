//! Stock-keeping-unit identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use orderpad_core::DomainError;

/// Stock-keeping-unit identifier, the key into the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(pub u32);

impl Sku {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for Sku {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("Sku: {e}")))?;
        Ok(Self(value))
    }
}
