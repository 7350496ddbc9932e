use serde::{Deserialize, Serialize};

use blueberry_catalog::ProductEntry;
use blueberry_core::ValueObject;

/// The part of a catalog entry that enters the cart.
///
/// Badge, stock and original price are presentation-only and are dropped at
/// selection time. An item is a copy, not a reference to its entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: String,
    pub quantity: Option<String>,
}

impl ValueObject for CartItem {}

impl CartItem {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Capture the cart-relevant fields of `entry`.
    pub fn from_entry(entry: &ProductEntry) -> Self {
        Self {
            name: entry.name().to_owned(),
            price: entry.price().to_owned(),
            quantity: entry.quantity().map(str::to_owned),
        }
    }
}

impl From<&ProductEntry> for CartItem {
    fn from(entry: &ProductEntry) -> Self {
        Self::from_entry(entry)
    }
}
