use thiserror::Error;

use blueberry_catalog::EntryAddress;

/// Failures of storefront operations.
///
/// The rendered catalog only ever offers valid add actions; these surface
/// when an address is assembled elsewhere (e.g. a hand-crafted form post).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("unknown catalog section: {0}")]
    UnknownSection(String),

    #[error("no catalog entry at {0}")]
    UnknownProduct(EntryAddress),

    #[error("entry at {0} cannot be added to the cart (missing name or price)")]
    ActionUnavailable(EntryAddress),
}
