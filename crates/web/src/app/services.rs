use std::sync::{Mutex, MutexGuard, PoisonError};

use blueberry_storefront::Storefront;

/// Shared application state: the single session all clients see.
///
/// The storefront model processes one event at a time; the mutex is what
/// serializes concurrent requests into that order. A handler holds it for
/// the whole event (e.g. append + navigate + render).
#[derive(Debug)]
pub struct AppServices {
    storefront: Mutex<Storefront>,
}

impl AppServices {
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront: Mutex::new(storefront),
        }
    }

    /// Exclusive access for one event.
    pub fn storefront(&self) -> MutexGuard<'_, Storefront> {
        // Handlers never panic mid-event, and the store is only replaced
        // wholesale, so a poisoned lock still guards a consistent value.
        self.storefront.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
