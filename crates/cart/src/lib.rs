//! Cart module.
//!
//! The cart is an append-only, insertion-ordered sequence of items captured
//! from catalog entries. Snapshots are immutable: appending produces a new
//! snapshot and leaves every earlier one untouched.

pub mod cart;
pub mod item;
pub mod store;

pub use cart::Cart;
pub use item::CartItem;
pub use store::{CartEvent, CartStore, ItemAdded};
