use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blueberry_events::Event;

use crate::cart::Cart;
use crate::item::CartItem;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: CartItem,
    /// 1-based position of the item in the cart after the append.
    pub position: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
        }
    }
}

/// Owner of the session's current cart snapshot.
///
/// Single writer: `append` takes `&mut self`. Readers hold [`Cart`] snapshots,
/// which stay valid (and unchanged) after later appends.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    current: Cart,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` and return the new current snapshot. Always succeeds.
    pub fn append(&mut self, item: CartItem) -> Cart {
        self.current = self.current.appended(item);
        self.current.clone()
    }

    /// Append `item` and describe the append as an event.
    pub fn append_at(&mut self, item: CartItem, occurred_at: DateTime<Utc>) -> CartEvent {
        let cart = self.append(item.clone());
        tracing::debug!(
            name = %item.name,
            position = cart.len(),
            "cart item added"
        );
        CartEvent::ItemAdded(ItemAdded {
            item,
            position: cart.len(),
            occurred_at,
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Cart {
        self.current.clone()
    }
}
