//! Static page furniture: header, category dropdown, hero banners and the
//! catalog body. Presentation only; nothing here touches the cart.

use blueberry_catalog::{CatalogRegistry, EntryAddress};

use crate::card::ProductCard;
use crate::html::HtmlBuffer;
use crate::navigator::View;

const CATEGORIES: [&str; 4] = ["Fresh Fruits", "Fresh Vegetables", "Tasty Snacks", "Fast Food"];

const HERO_BANNERS: [(&str, &str, &str); 3] = [
    ("green", "Flat 30% Off", "Explore Healthy & Fresh Fruits"),
    ("red", "Flat 20% Off", "Explore Warm Fast Food & Snacks"),
    ("green", "Flat 30% Off", "Explore Organic & Fresh Vegetables"),
];

/// The header's category menu. Its open/closed flag is local hover state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryDropdown {
    open: bool,
}

impl CategoryDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn hover_enter(&mut self) {
        self.open = true;
    }

    pub fn hover_leave(&mut self) {
        self.open = false;
    }

    pub fn render(&self, out: &mut HtmlBuffer) {
        out.open("li", &[("class", "blueberry-dropdown")])
            .element("a", &[("href", "#")], "Categories");
        if self.open {
            out.open("ul", &[("class", "blueberry-dropdown-menu")]);
            for category in CATEGORIES {
                out.open("li", &[]).element("a", &[("href", "#")], category).close("li");
            }
            out.close("ul");
        }
        out.close("li");
    }
}

/// Persistent header; its links are the direct-navigation entry points.
pub fn header(out: &mut HtmlBuffer, dropdown: &CategoryDropdown) {
    out.open("header", &[("class", "blueberry-header")])
        .open("nav", &[("class", "blueberry-nav")])
        .element("div", &[("class", "blueberry-logo")], "Blueberry")
        .open("ul", &[("class", "blueberry-nav-links")]);

    nav_link(out, View::Catalog.location(), "Home");
    dropdown.render(out);
    for label in ["Shop", "Blog", "Pages", "Contact"] {
        nav_link(out, "#", label);
    }
    out.close("ul");

    out.open("div", &[("class", "blueberry-icons")])
        .element("a", &[("href", "#")], "Search")
        .element("a", &[("href", View::Cart.location())], "Cart")
        .element("a", &[("href", "#")], "Account")
        .close("div")
        .close("nav")
        .close("header");
}

fn nav_link(out: &mut HtmlBuffer, href: &str, label: &str) {
    out.open("li", &[]).element("a", &[("href", href)], label).close("li");
}

pub fn hero(out: &mut HtmlBuffer) {
    out.open("section", &[("class", "blueberry-hero")]);
    for (tone, headline, blurb) in HERO_BANNERS {
        let class = format!("blueberry-hero-card {tone}");
        out.open("div", &[("class", class.as_str())])
            .element("h2", &[], headline)
            .element("p", &[], blurb)
            .element("a", &[("href", "#")], "Shop Now")
            .close("div");
    }
    out.close("section");
}

/// Every section of `catalog` with a card per entry.
pub fn sections(out: &mut HtmlBuffer, catalog: &CatalogRegistry) {
    for section in catalog.sections() {
        let class = if section.is_shaded() {
            "blueberry-section gray"
        } else {
            "blueberry-section"
        };
        out.open("section", &[("class", class), ("id", section.slug())])
            .element("h2", &[], section.title());
        if let Some(tagline) = section.tagline() {
            out.element("p", &[], tagline);
        }
        out.open("div", &[("class", "blueberry-grid")]);
        for (position, entry) in section.entries().iter().enumerate() {
            let address = EntryAddress::new(section.slug(), position);
            ProductCard::new(&address, entry).render(out);
        }
        out.close("div").close("section");
    }
}
