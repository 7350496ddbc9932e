use serde::Deserialize;

use blueberry_catalog::EntryAddress;

// -------------------------
// Form DTOs
// -------------------------

/// Body of the "Add to Cart" form.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub section: String,
    pub position: usize,
}

impl From<AddToCartForm> for EntryAddress {
    fn from(form: AddToCartForm) -> Self {
        EntryAddress::new(form.section, form.position)
    }
}
