//! Product presentation unit: one catalog entry, one add action.

use chrono::{DateTime, Utc};

use blueberry_cart::CartItem;
use blueberry_catalog::{EntryAddress, ProductEntry};

use crate::html::HtmlBuffer;
use crate::navigator::View;
use crate::protocol::AddToCart;

const PRODUCT_IMAGE: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSKTyujPjfBbaBJG1-dW2IkvXZ1qFxs_QTWVg&s";

#[derive(Debug, Clone, Copy)]
pub struct ProductCard<'a> {
    address: &'a EntryAddress,
    entry: &'a ProductEntry,
}

impl<'a> ProductCard<'a> {
    pub fn new(address: &'a EntryAddress, entry: &'a ProductEntry) -> Self {
        Self { address, entry }
    }

    pub fn address(&self) -> &EntryAddress {
        self.address
    }

    pub fn entry(&self) -> &ProductEntry {
        self.entry
    }

    /// The "select for cart" action, or `None` when the entry lacks a name
    /// or price.
    pub fn add_action(&self, occurred_at: DateTime<Utc>) -> Option<AddToCart> {
        self.entry.is_purchasable().then(|| AddToCart {
            source: Some(self.address.clone()),
            item: CartItem::from_entry(self.entry),
            occurred_at,
        })
    }

    pub fn render(&self, out: &mut HtmlBuffer) {
        let entry = self.entry;
        out.open("div", &[("class", "blueberry-product-card")]);
        if let Some(badge) = entry.badge() {
            out.element("span", &[("class", "blueberry-badge")], badge);
        }
        out.void("img", &[("src", PRODUCT_IMAGE), ("alt", entry.name())])
            .element("h4", &[], entry.name());

        out.open("p", &[]);
        if let Some(original) = entry.original_price() {
            out.element("span", &[("class", "old-price")], original).text(" ");
        }
        out.text(entry.price()).close("p");

        if let Some(stock) = entry.stock() {
            out.element("p", &[("class", "stock")], stock);
        }
        if let Some(quantity) = entry.quantity() {
            out.element("p", &[("class", "quantity")], quantity);
        }

        out.open("div", &[("class", "blueberry-actions")]);
        if entry.is_purchasable() {
            let position = self.address.position.to_string();
            out.open("form", &[("method", "post"), ("action", View::Cart.location())])
                .void(
                    "input",
                    &[("type", "hidden"), ("name", "section"), ("value", self.address.section.as_str())],
                )
                .void(
                    "input",
                    &[("type", "hidden"), ("name", "position"), ("value", position.as_str())],
                )
                .element("button", &[("type", "submit")], "Add to Cart")
                .close("form");
        }
        out.element("button", &[("type", "button")], "Wishlist")
            .element("button", &[("type", "button")], "Compare")
            .close("div")
            .close("div");
    }
}
