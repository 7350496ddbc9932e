use serde::{Deserialize, Serialize};

use blueberry_core::ValueObject;

/// One catalog record.
///
/// Every field is a pre-formatted display string; prices are never parsed.
/// The name is the de facto identity but is not unique across sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    name: String,
    price: String,
    original_price: Option<String>,
    stock: Option<String>,
    quantity: Option<String>,
    badge: Option<String>,
}

impl ValueObject for ProductEntry {}

impl ProductEntry {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            original_price: None,
            stock: None,
            quantity: None,
            badge: None,
        }
    }

    pub fn with_original_price(mut self, original_price: impl Into<String>) -> Self {
        self.original_price = Some(original_price.into());
        self
    }

    pub fn with_stock(mut self, stock: impl Into<String>) -> Self {
        self.stock = Some(stock.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn original_price(&self) -> Option<&str> {
        present(&self.original_price)
    }

    pub fn stock(&self) -> Option<&str> {
        present(&self.stock)
    }

    pub fn quantity(&self) -> Option<&str> {
        present(&self.quantity)
    }

    pub fn badge(&self) -> Option<&str> {
        present(&self.badge)
    }

    /// Whether the entry carries the fields a cart item needs.
    pub fn is_purchasable(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }
}

// Blank annotations render as nothing, same as missing ones.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_annotations() {
        let entry = ProductEntry::new("Red Guava", "$15")
            .with_original_price("$17")
            .with_quantity("2kg")
            .with_badge("New");

        assert_eq!(entry.name(), "Red Guava");
        assert_eq!(entry.price(), "$15");
        assert_eq!(entry.original_price(), Some("$17"));
        assert_eq!(entry.quantity(), Some("2kg"));
        assert_eq!(entry.badge(), Some("New"));
        assert_eq!(entry.stock(), None);
    }

    #[test]
    fn blank_annotations_read_as_absent() {
        let entry = ProductEntry::new("Mexico corn", "$5").with_quantity("  ");
        assert_eq!(entry.quantity(), None);
    }

    #[test]
    fn blank_name_or_price_is_not_purchasable() {
        assert!(ProductEntry::new("Mexico corn", "$5").is_purchasable());
        assert!(!ProductEntry::new("", "$5").is_purchasable());
        assert!(!ProductEntry::new("Mexico corn", " ").is_purchasable());
    }
}
