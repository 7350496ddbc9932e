use axum::{routing::get, Router};

pub mod cart;
pub mod catalog;
pub mod system;

/// Router for the two navigable views.
pub fn router() -> Router {
    Router::new()
        .route("/", get(catalog::show))
        .route("/cart", get(cart::show).post(cart::add))
}
