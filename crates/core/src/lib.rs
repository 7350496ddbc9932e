//! `blueberry-core` — storefront domain building blocks.
//!
//! This crate contains **pure domain** primitives (no rendering, no HTTP).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::SessionId;
pub use value_object::ValueObject;
