//! The add-to-cart protocol.
//!
//! One user action, two effects, always in this order:
//! 1. append the item to the cart store;
//! 2. navigate to the cart view.
//!
//! Step 2 starts only after step 1 has returned, so the cart view can never
//! render without the new item.

use core::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blueberry_cart::{CartEvent, CartItem, CartStore};
use blueberry_catalog::EntryAddress;
use blueberry_events::{Command, CommandHandler, Event};

use crate::navigator::{NavigationEvent, Navigator, View};

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    /// Where the item was selected from (for logs; the item itself is a copy).
    pub source: Option<EntryAddress>,
    pub item: CartItem,
    pub occurred_at: DateTime<Utc>,
}

impl Command for AddToCart {
    fn command_type(&self) -> &'static str {
        "cart.add"
    }
}

/// Everything a storefront session can record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorefrontEvent {
    Cart(CartEvent),
    Navigation(NavigationEvent),
}

impl Event for StorefrontEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StorefrontEvent::Cart(e) => e.event_type(),
            StorefrontEvent::Navigation(e) => e.event_type(),
        }
    }

    fn version(&self) -> u32 {
        match self {
            StorefrontEvent::Cart(e) => e.version(),
            StorefrontEvent::Navigation(e) => e.version(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StorefrontEvent::Cart(e) => e.occurred_at(),
            StorefrontEvent::Navigation(e) => e.occurred_at(),
        }
    }
}

impl From<CartEvent> for StorefrontEvent {
    fn from(value: CartEvent) -> Self {
        StorefrontEvent::Cart(value)
    }
}

impl From<NavigationEvent> for StorefrontEvent {
    fn from(value: NavigationEvent) -> Self {
        StorefrontEvent::Navigation(value)
    }
}

/// Runs [`AddToCart`] against the session's store and navigator.
///
/// Both are borrowed mutably for the duration of the command, so nothing can
/// observe the store between the append and the navigation.
pub struct AddToCartHandler<'a> {
    store: &'a mut CartStore,
    navigator: &'a mut Navigator,
}

impl<'a> AddToCartHandler<'a> {
    pub fn new(store: &'a mut CartStore, navigator: &'a mut Navigator) -> Self {
        Self { store, navigator }
    }
}

impl CommandHandler for AddToCartHandler<'_> {
    type Cmd = AddToCart;
    type Ev = StorefrontEvent;
    type Error = Infallible;

    /// Returns `[ItemAdded, Navigated]`.
    fn handle(&mut self, command: AddToCart) -> Result<Vec<StorefrontEvent>, Infallible> {
        let added = self.store.append_at(command.item, command.occurred_at);
        let navigated = self.navigator.go_to(View::Cart, command.occurred_at);
        Ok(vec![added.into(), navigated.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueberry_cart::ItemAdded;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn add(item: CartItem) -> AddToCart {
        AddToCart {
            source: None,
            item,
            occurred_at: test_time(),
        }
    }

    #[test]
    fn appends_then_navigates_to_cart() {
        let mut store = CartStore::new();
        let mut navigator = Navigator::new();
        let item = CartItem::new("Red Guava", "$15").with_quantity("2kg");

        let Ok(events) = AddToCartHandler::new(&mut store, &mut navigator).handle(add(item.clone()));

        assert_eq!(store.snapshot().items(), &[item.clone()]);
        assert_eq!(navigator.current(), View::Cart);

        let types: Vec<_> = events.iter().map(Event::event_type).collect();
        assert_eq!(types, ["cart.item.added", "navigation.navigated"]);
        assert_eq!(
            events[0],
            StorefrontEvent::Cart(CartEvent::ItemAdded(ItemAdded {
                item,
                position: 1,
                occurred_at: test_time(),
            }))
        );
    }

    #[test]
    fn already_on_cart_still_navigates() {
        let mut store = CartStore::new();
        let mut navigator = Navigator::new();

        let mut handler = AddToCartHandler::new(&mut store, &mut navigator);
        let Ok(_) = handler.handle(add(CartItem::new("Mexico corn", "$5")));
        let Ok(events) = handler.handle(add(CartItem::new("Mexico corn", "$5")));

        assert!(matches!(
            &events[1],
            StorefrontEvent::Navigation(NavigationEvent::Navigated(n)) if n.from == View::Cart && n.to == View::Cart
        ));
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn command_type_is_stable() {
        assert_eq!(add(CartItem::new("x", "$1")).command_type(), "cart.add");
    }
}
