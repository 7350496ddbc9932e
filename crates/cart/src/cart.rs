use std::sync::Arc;

use crate::item::CartItem;

/// An immutable cart snapshot.
///
/// Cloning is cheap (shared buffer). There is no way to mutate a snapshot;
/// [`Cart::appended`] copies into a fresh buffer, so holders of older
/// snapshots never observe later appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Arc<[CartItem]>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A new snapshot with `item` after every existing item.
    pub fn appended(&self, item: CartItem) -> Cart {
        let items: Arc<[CartItem]> = self.items.iter().cloned().chain(Some(item)).collect();
        Cart { items }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = core::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}
