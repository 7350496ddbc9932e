//! Value object trait: equality by value, not identity.
//!
//! Catalog entries and cart items are values: a cart item copied from a
//! catalog entry carries no reference back to it, and two items with the same
//! fields compare equal even though they occupy different cart positions.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CartItem { name: String, price: String, quantity: Option<String> }
///
/// impl ValueObject for CartItem {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
