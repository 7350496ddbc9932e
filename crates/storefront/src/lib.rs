//! `blueberry-storefront` — the application root and everything it wires:
//! navigation, the add-to-cart protocol, product cards and the cart view.
//!
//! If you're new to this crate, it is structured like:
//! - `navigator.rs`: the two views and their locations
//! - `protocol.rs`: the add-to-cart command (append, then navigate)
//! - `card.rs`: one catalog entry and its add action
//! - `cart_view.rs`: projection of a cart snapshot
//! - `layout.rs` / `html.rs`: static page furniture and the HTML writer
//! - `app.rs`: the [`Storefront`] that owns the cart store and navigator

pub mod app;
pub mod card;
pub mod cart_view;
pub mod error;
pub mod html;
pub mod layout;
pub mod navigator;
pub mod protocol;

pub use app::{JOURNAL_CAPACITY, Storefront};
pub use card::ProductCard;
pub use cart_view::{CartView, EMPTY_CART_MESSAGE};
pub use error::StorefrontError;
pub use layout::CategoryDropdown;
pub use navigator::{Navigated, NavigationEvent, Navigator, View};
pub use protocol::{AddToCart, AddToCartHandler, StorefrontEvent};
