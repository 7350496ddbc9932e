//! Catalog module.
//!
//! Static product entries grouped into merchandising sections. Pure data: no
//! IO, no rendering, no cart knowledge.

pub mod product;
pub mod registry;

pub use product::ProductEntry;
pub use registry::{CatalogRegistry, EntryAddress, Section};
