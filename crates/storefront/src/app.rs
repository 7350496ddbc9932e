//! Application root: owns the session's cart store and navigator and routes
//! every user event through them.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use blueberry_cart::{Cart, CartStore};
use blueberry_catalog::{CatalogRegistry, EntryAddress};
use blueberry_core::{DomainError, SessionId};
use blueberry_events::{CommandHandler, Event, EventEnvelope};

use crate::card::ProductCard;
use crate::cart_view::CartView;
use crate::error::StorefrontError;
use crate::html::{self, HtmlBuffer};
use crate::layout::{self, CategoryDropdown};
use crate::navigator::{Navigator, View};
use crate::protocol::{AddToCart, AddToCartHandler, StorefrontEvent};

/// Most recent events kept per session; older ones are dropped.
pub const JOURNAL_CAPACITY: usize = 256;

/// One storefront session.
///
/// Events are processed one at a time through `&mut self`; the cart store is
/// lent to the add-to-cart handler and the cart view only ever sees
/// snapshots.
#[derive(Debug)]
pub struct Storefront {
    session_id: SessionId,
    catalog: Arc<CatalogRegistry>,
    cart: CartStore,
    navigator: Navigator,
    dropdown: CategoryDropdown,
    journal: VecDeque<EventEnvelope<StorefrontEvent>>,
    recorded: u64,
}

impl Storefront {
    pub fn new(catalog: Arc<CatalogRegistry>) -> Self {
        Self::with_session(SessionId::new(), catalog)
    }

    pub fn with_session(session_id: SessionId, catalog: Arc<CatalogRegistry>) -> Self {
        tracing::info!(%session_id, sections = catalog.sections().len(), "storefront session started");
        Self {
            session_id,
            catalog,
            cart: CartStore::new(),
            navigator: Navigator::new(),
            dropdown: CategoryDropdown::new(),
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
            recorded: 0,
        }
    }

    /// A session over the built-in catalog.
    pub fn blueberry() -> Self {
        Self::new(CatalogRegistry::blueberry_shared())
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &CatalogRegistry {
        &self.catalog
    }

    pub fn active_view(&self) -> View {
        self.navigator.current()
    }

    pub fn location(&self) -> &'static str {
        self.navigator.location()
    }

    pub fn snapshot(&self) -> Cart {
        self.cart.snapshot()
    }

    pub fn cart_view(&self) -> CartView {
        CartView::new(self.cart.snapshot())
    }

    /// The last [`JOURNAL_CAPACITY`] recorded events, oldest first.
    pub fn journal(&self) -> &VecDeque<EventEnvelope<StorefrontEvent>> {
        &self.journal
    }

    pub fn dropdown_mut(&mut self) -> &mut CategoryDropdown {
        &mut self.dropdown
    }

    /// The presentation unit for the entry at `address`.
    pub fn card<'a>(&'a self, address: &'a EntryAddress) -> Result<ProductCard<'a>, StorefrontError> {
        match self.catalog.entry(address) {
            Ok(entry) => Ok(ProductCard::new(address, entry)),
            Err(DomainError::NotFound) if self.catalog.section(&address.section).is_none() => {
                Err(StorefrontError::UnknownSection(address.section.clone()))
            }
            Err(_) => Err(StorefrontError::UnknownProduct(address.clone())),
        }
    }

    /// "Select for cart" on the entry at `address`. Returns the location now
    /// active (always the cart).
    pub fn add_to_cart(&mut self, address: &EntryAddress) -> Result<&'static str, StorefrontError> {
        self.add_to_cart_at(address, Utc::now())
    }

    pub fn add_to_cart_at(
        &mut self,
        address: &EntryAddress,
        occurred_at: DateTime<Utc>,
    ) -> Result<&'static str, StorefrontError> {
        let command = self
            .card(address)?
            .add_action(occurred_at)
            .ok_or_else(|| StorefrontError::ActionUnavailable(address.clone()))?;
        Ok(self.select(command))
    }

    /// Run an add-to-cart command: append, then navigate to the cart.
    pub fn select(&mut self, command: AddToCart) -> &'static str {
        tracing::info!(
            session_id = %self.session_id,
            command = blueberry_events::Command::command_type(&command),
            name = %command.item.name,
            source = ?command.source,
            "add to cart"
        );
        let mut handler = AddToCartHandler::new(&mut self.cart, &mut self.navigator);
        let Ok(events) = handler.handle(command);
        self.record(events);
        self.navigator.location()
    }

    /// Direct navigation (e.g. a header link).
    pub fn navigate(&mut self, view: View) -> &'static str {
        self.navigate_at(view, Utc::now())
    }

    pub fn navigate_at(&mut self, view: View, occurred_at: DateTime<Utc>) -> &'static str {
        let event = self.navigator.go_to(view, occurred_at);
        self.record([StorefrontEvent::from(event)]);
        self.navigator.location()
    }

    /// Enter `location`. Returns the view it selects, or `None` (state
    /// unchanged) for a location outside the two routes.
    ///
    /// Re-entering the active view (a reload) is not a transition and
    /// records nothing.
    pub fn visit(&mut self, location: &str) -> Option<View> {
        let view = View::from_location(location)?;
        if view != self.navigator.current() {
            self.navigate(view);
        }
        Some(view)
    }

    /// Render the active view as a complete page.
    pub fn render(&self) -> String {
        let mut out = HtmlBuffer::new();
        out.open("div", &[("class", "blueberry-app")]);
        layout::header(&mut out, &self.dropdown);
        match self.navigator.current() {
            View::Catalog => {
                layout::hero(&mut out);
                layout::sections(&mut out, &self.catalog);
            }
            View::Cart => self.cart_view().render(&mut out),
        }
        out.close("div");
        html::page("Blueberry", &out.finish())
    }

    fn record(&mut self, events: impl IntoIterator<Item = StorefrontEvent>) {
        for event in events {
            self.recorded += 1;
            let sequence_number = self.recorded;
            tracing::debug!(
                session_id = %self.session_id,
                sequence_number,
                event_type = event.event_type(),
                "event recorded"
            );
            if self.journal.len() == JOURNAL_CAPACITY {
                self.journal.pop_front();
            }
            self.journal
                .push_back(EventEnvelope::new(self.session_id, sequence_number, event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_view::EMPTY_CART_MESSAGE;
    use blueberry_cart::CartItem;
    use blueberry_catalog::{ProductEntry, Section};

    fn red_guava() -> EntryAddress {
        EntryAddress::new("day-of-the-deal", 2)
    }

    fn mexico_corn() -> EntryAddress {
        EntryAddress::new("day-of-the-deal", 5)
    }

    #[test]
    fn fresh_session_is_on_catalog_with_empty_cart() {
        let app = Storefront::blueberry();
        assert_eq!(app.active_view(), View::Catalog);
        assert_eq!(app.location(), "/");
        assert!(app.snapshot().is_empty());
        assert!(app.journal().is_empty());
    }

    #[test]
    fn add_then_add_lists_both_in_order() {
        let mut app = Storefront::blueberry();

        assert_eq!(app.add_to_cart(&red_guava()), Ok("/cart"));
        app.navigate(View::Catalog);
        assert_eq!(app.add_to_cart(&mexico_corn()), Ok("/cart"));

        assert_eq!(app.active_view(), View::Cart);
        assert_eq!(app.cart_view().lines(), ["Red Guava - $15 (2kg)", "Mexico corn - $5"]);

        let page = app.render();
        assert!(page.contains("<li>Red Guava - $15 (2kg)</li><li>Mexico corn - $5</li>"));
        assert!(!page.contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn select_accepts_arbitrary_items() {
        let mut app = Storefront::blueberry();
        let at = Utc::now();
        for item in [
            CartItem::new("Red Guava", "$15").with_quantity("2kg"),
            CartItem::new("Mexico corn", "$5"),
        ] {
            app.select(AddToCart {
                source: None,
                item,
                occurred_at: at,
            });
        }

        assert_eq!(app.active_view(), View::Cart);
        assert_eq!(app.cart_view().lines(), ["Red Guava - $15 (2kg)", "Mexico corn - $5"]);
    }

    #[test]
    fn direct_visit_to_empty_cart_shows_only_message() {
        let mut app = Storefront::blueberry();
        assert_eq!(app.visit("/cart"), Some(View::Cart));

        let page = app.render();
        assert!(page.contains("<p>Your cart is empty.</p>"));
        assert!(!page.contains("<li>Red"));
        assert!(!page.contains("blueberry-product-card"));
    }

    #[test]
    fn unknown_location_keeps_current_view() {
        let mut app = Storefront::blueberry();
        app.add_to_cart(&red_guava()).unwrap();
        assert_eq!(app.visit("/checkout"), None);
        assert_eq!(app.active_view(), View::Cart);
    }

    #[test]
    fn header_link_returns_to_catalog() {
        let mut app = Storefront::blueberry();
        app.add_to_cart(&red_guava()).unwrap();
        assert_eq!(app.navigate(View::Catalog), "/");
        assert_eq!(app.active_view(), View::Catalog);
        assert!(app.render().contains("blueberry-product-card"));
    }

    #[test]
    fn same_listing_twice_gives_two_items() {
        let mut app = Storefront::blueberry();
        app.add_to_cart(&red_guava()).unwrap();
        app.add_to_cart(&red_guava()).unwrap();
        assert_eq!(app.snapshot().len(), 2);
    }

    #[test]
    fn earlier_cart_view_is_not_affected_by_later_adds() {
        let mut app = Storefront::blueberry();
        app.add_to_cart(&red_guava()).unwrap();
        let view = app.cart_view();

        app.add_to_cart(&mexico_corn()).unwrap();

        assert_eq!(view.lines(), ["Red Guava - $15 (2kg)"]);
        assert_eq!(app.cart_view().lines().len(), 2);
    }

    #[test]
    fn journal_records_append_before_navigation() {
        let mut app = Storefront::blueberry();
        app.add_to_cart(&mexico_corn()).unwrap();

        let journal = app.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].event_type(), "cart.item.added");
        assert_eq!(journal[1].event_type(), "navigation.navigated");
        assert_eq!(journal[0].sequence_number(), 1);
        assert_eq!(journal[1].sequence_number(), 2);
        assert!(journal.iter().all(|e| e.session_id() == app.session_id()));
    }

    #[test]
    fn reloading_the_active_view_records_nothing() {
        let mut app = Storefront::blueberry();
        for _ in 0..1_000 {
            assert_eq!(app.visit("/"), Some(View::Catalog));
            app.render();
        }
        assert!(app.journal().is_empty());

        app.visit("/cart");
        app.visit("/cart");
        assert_eq!(app.journal().len(), 1);
        assert_eq!(app.active_view(), View::Cart);
    }

    #[test]
    fn journal_stays_bounded_under_repeated_navigation() {
        let mut app = Storefront::blueberry();
        for _ in 0..10_000 {
            app.visit("/cart");
            app.visit("/");
        }

        let journal = app.journal();
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        // Sequence numbers keep counting past evicted entries.
        assert_eq!(journal.back().map(|e| e.sequence_number()), Some(20_000));
        assert_eq!(
            journal.front().map(|e| e.sequence_number()),
            Some(20_000 - JOURNAL_CAPACITY as u64 + 1)
        );
    }

    #[test]
    fn sessions_share_the_builtin_catalog() {
        let a = Storefront::blueberry();
        let b = Storefront::blueberry();
        assert!(Arc::ptr_eq(&a.catalog, &b.catalog));
    }

    #[test]
    fn forged_addresses_are_rejected_without_side_effects() {
        let mut app = Storefront::blueberry();

        assert_eq!(
            app.add_to_cart(&EntryAddress::new("fast-food", 0)),
            Err(StorefrontError::UnknownSection("fast-food".into()))
        );
        assert_eq!(
            app.add_to_cart(&EntryAddress::new("tasty-snacks", 9)),
            Err(StorefrontError::UnknownProduct(EntryAddress::new("tasty-snacks", 9)))
        );
        assert!(app.snapshot().is_empty());
        assert_eq!(app.active_view(), View::Catalog);
        assert!(app.journal().is_empty());
    }

    #[test]
    fn entry_without_price_exposes_no_action() {
        let catalog = CatalogRegistry::new(vec![
            Section::new("misc", "Misc").with_entry(ProductEntry::new("Mystery box", "")),
        ]);
        let mut app = Storefront::new(Arc::new(catalog));
        let address = EntryAddress::new("misc", 0);

        assert_eq!(
            app.add_to_cart(&address),
            Err(StorefrontError::ActionUnavailable(address))
        );
        assert!(!app.render().contains("Add to Cart"));
        assert!(app.snapshot().is_empty());
    }

    #[test]
    fn dropdown_state_is_local_to_presentation() {
        let mut app = Storefront::blueberry();
        app.dropdown_mut().hover_enter();
        assert!(app.render().contains("blueberry-dropdown-menu"));
        assert_eq!(app.active_view(), View::Catalog);
        assert!(app.journal().is_empty());
    }
}
