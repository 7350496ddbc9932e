//! HTTP surface of the storefront: the catalog and cart pages plus the
//! add-to-cart form endpoint.
//!
//! One server process is one storefront session: every client shares the
//! same cart.

pub mod app;
pub mod config;
pub mod middleware;
