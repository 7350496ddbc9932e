//! HTTP application wiring (Axum router + shared storefront).
//!
//! - `services.rs`: the session's storefront behind its event lock
//! - `routes/`: HTTP routes + handlers (one file per view)
//! - `dto.rs`: form payloads
//! - `errors.rs`: error pages

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use blueberry_storefront::Storefront;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The router serves exactly one storefront session: every visitor shares
/// the same cart.
pub fn build_app(storefront: Storefront) -> Router {
    let services = Arc::new(services::AppServices::new(storefront));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log))
                .layer(Extension(services)),
        )
}
