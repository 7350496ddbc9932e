//! Read-only projection of a cart snapshot.

use blueberry_cart::{Cart, CartItem};

use crate::html::HtmlBuffer;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Renders a snapshot: the empty-state message, or one line per item in
/// insertion order. Holds its own snapshot, so later appends don't show up.
#[derive(Debug, Clone)]
pub struct CartView {
    cart: Cart,
}

impl CartView {
    pub fn new(cart: Cart) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// `"<name> - <price>"`, plus `" (<quantity>)"` when there is one.
    pub fn line(item: &CartItem) -> String {
        match item.quantity.as_deref().filter(|q| !q.is_empty()) {
            Some(quantity) => format!("{} - {} ({})", item.name, item.price, quantity),
            None => format!("{} - {}", item.name, item.price),
        }
    }

    /// Item lines, in add order. Empty for an empty cart.
    pub fn lines(&self) -> Vec<String> {
        self.cart.iter().map(Self::line).collect()
    }

    pub fn render(&self, out: &mut HtmlBuffer) {
        out.open("div", &[("class", "blueberry-cart")])
            .element("h1", &[], "Your Cart");
        if self.cart.is_empty() {
            out.element("p", &[], EMPTY_CART_MESSAGE);
        } else {
            out.open("ul", &[]);
            for line in self.lines() {
                out.element("li", &[], &line);
            }
            out.close("ul");
        }
        out.close("div");
    }
}
