//! The static catalog and its merchandising sections.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use blueberry_core::{DomainError, DomainResult};

use crate::product::ProductEntry;

/// A named merchandising group of entries, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    slug: String,
    title: String,
    tagline: Option<String>,
    shaded: bool,
    entries: Vec<ProductEntry>,
}

impl Section {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            tagline: None,
            shaded: false,
            entries: Vec::new(),
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Render on the alternate (gray) background.
    pub fn shaded(mut self) -> Self {
        self.shaded = true;
        self
    }

    pub fn with_entry(mut self, entry: ProductEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    pub fn is_shaded(&self) -> bool {
        self.shaded
    }

    pub fn entries(&self) -> &[ProductEntry] {
        &self.entries
    }
}

/// Stable address of one entry: section slug plus 0-based position.
///
/// Names repeat across sections, so this (not the name) is what an add
/// action carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryAddress {
    pub section: String,
    pub position: usize,
}

impl EntryAddress {
    pub fn new(section: impl Into<String>, position: usize) -> Self {
        Self {
            section: section.into(),
            position,
        }
    }
}

impl core::fmt::Display for EntryAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.section, self.position)
    }
}

/// Ordered set of sections. Constant for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogRegistry {
    sections: Vec<Section>,
}

static BLUEBERRY: LazyLock<Arc<CatalogRegistry>> =
    LazyLock::new(|| Arc::new(blueberry_sections()));

impl CatalogRegistry {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The storefront's built-in catalog.
    pub fn blueberry() -> &'static CatalogRegistry {
        &BLUEBERRY
    }

    /// The built-in catalog as a shared handle; every call returns the same
    /// allocation.
    pub fn blueberry_shared() -> Arc<CatalogRegistry> {
        Arc::clone(&BLUEBERRY)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// Resolve an address to its entry.
    pub fn entry(&self, address: &EntryAddress) -> DomainResult<&ProductEntry> {
        self.section(&address.section)
            .ok_or_else(DomainError::not_found)?
            .entries
            .get(address.position)
            .ok_or_else(DomainError::not_found)
    }

    /// Every entry with its address, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryAddress, &ProductEntry)> {
        self.sections.iter().flat_map(|section| {
            section
                .entries
                .iter()
                .enumerate()
                .map(move |(position, entry)| {
                    (EntryAddress::new(section.slug.as_str(), position), entry)
                })
        })
    }

    /// Addresses of all entries sharing `name` (exact match).
    pub fn addresses_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = EntryAddress> + 'a {
        self.entries()
            .filter(move |(_, entry)| entry.name() == name)
            .map(|(address, _)| address)
    }
}

fn blueberry_sections() -> CatalogRegistry {
    CatalogRegistry::new(vec![
        Section::new("day-of-the-deal", "Day of the Deal")
            .with_tagline("Don't wait. The time will never be just right.")
            .with_entry(ProductEntry::new("Fresh Coriander", "$1").with_stock("Out Of Stock"))
            .with_entry(
                ProductEntry::new("Crunchy Potato Chips", "$25")
                    .with_original_price("$30")
                    .with_badge("Sale"),
            )
            .with_entry(
                ProductEntry::new("Red Guava", "$15")
                    .with_original_price("$17")
                    .with_quantity("2kg")
                    .with_badge("New"),
            )
            .with_entry(
                ProductEntry::new("Fresh blueberry", "$25")
                    .with_original_price("$30")
                    .with_quantity("500g")
                    .with_badge("Sale"),
            )
            .with_entry(
                ProductEntry::new("Fresh orange", "$10")
                    .with_stock("2 Left")
                    .with_quantity("12 Pcs")
                    .with_badge("Hot"),
            )
            .with_entry(ProductEntry::new("Mexico corn", "$5").with_badge("Trend")),
        Section::new("tasty-snacks", "Tasty Snacks & Fast Food")
            .shaded()
            .with_entry(
                ProductEntry::new("Crunchy Potato Chips", "$25")
                    .with_stock("Out Of Stock")
                    .with_badge("Sale"),
            ),
        Section::new("fresh-fruits", "Fresh Fruits & Vegetables")
            .with_entry(ProductEntry::new("Fresh Coriander", "$1").with_stock("Out Of Stock"))
            .with_entry(
                ProductEntry::new("Red Guava", "$15")
                    .with_original_price("$17")
                    .with_quantity("2kg")
                    .with_badge("New"),
            )
            .with_entry(
                ProductEntry::new("Fresh Blueberry", "$25")
                    .with_original_price("$30")
                    .with_quantity("500g")
                    .with_badge("Sale"),
            )
            .with_entry(
                ProductEntry::new("Fresh Orange", "$10")
                    .with_stock("2 Left")
                    .with_quantity("12 Pcs"),
            ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_sections_in_order() {
        let catalog = CatalogRegistry::blueberry();
        let slugs: Vec<_> = catalog.sections().iter().map(Section::slug).collect();
        assert_eq!(slugs, ["day-of-the-deal", "tasty-snacks", "fresh-fruits"]);
        assert_eq!(catalog.entries().count(), 11);
    }

    #[test]
    fn shared_handle_is_built_once() {
        let a = CatalogRegistry::blueberry_shared();
        let b = CatalogRegistry::blueberry_shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(core::ptr::eq(&*a, CatalogRegistry::blueberry()));
    }

    #[test]
    fn every_builtin_entry_is_purchasable() {
        assert!(CatalogRegistry::blueberry()
            .entries()
            .all(|(_, entry)| entry.is_purchasable()));
    }

    #[test]
    fn resolves_entries_by_address() {
        let catalog = CatalogRegistry::blueberry();
        let entry = catalog.entry(&EntryAddress::new("day-of-the-deal", 5)).unwrap();
        assert_eq!(entry.name(), "Mexico corn");
        assert_eq!(entry.quantity(), None);
    }

    #[test]
    fn unknown_addresses_are_not_found() {
        let catalog = CatalogRegistry::blueberry();
        assert_eq!(
            catalog.entry(&EntryAddress::new("fast-food", 0)),
            Err(DomainError::NotFound)
        );
        assert_eq!(
            catalog.entry(&EntryAddress::new("tasty-snacks", 1)),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn repeated_names_are_distinct_listings() {
        let catalog = CatalogRegistry::blueberry();
        let guavas: Vec<_> = catalog.addresses_named("Red Guava").collect();
        assert_eq!(
            guavas,
            vec![
                EntryAddress::new("day-of-the-deal", 2),
                EntryAddress::new("fresh-fruits", 1),
            ]
        );

        // Same label, different listing data.
        let chips: Vec<_> = catalog
            .addresses_named("Crunchy Potato Chips")
            .map(|a| catalog.entry(&a).unwrap().clone())
            .collect();
        assert_eq!(chips.len(), 2);
        assert_ne!(chips[0], chips[1]);
    }

    #[test]
    fn address_display_is_slug_and_position() {
        assert_eq!(EntryAddress::new("fresh-fruits", 3).to_string(), "fresh-fruits#3");
    }
}
