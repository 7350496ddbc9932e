use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Form},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use blueberry_catalog::EntryAddress;
use blueberry_storefront::View;

use crate::app::{dto, errors, services::AppServices};

pub async fn show(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    let mut storefront = services.storefront();
    storefront.visit(View::Cart.location());
    Html(storefront.render())
}

/// "Add to Cart": append, navigate, then send the browser to the location
/// the navigator now holds.
///
/// A body that does not decode (e.g. `position=-1`) names no catalog entry
/// and gets the same not-found page as an out-of-range position.
pub async fn add(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<dto::AddToCartForm>, FormRejection>,
) -> axum::response::Response {
    let address = match form {
        Ok(Form(body)) => EntryAddress::from(body),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "add to cart form rejected");
            return errors::html_error(StatusCode::NOT_FOUND, "no such catalog entry");
        }
    };
    let outcome = services.storefront().add_to_cart(&address);

    match outcome {
        Ok(location) => Redirect::to(location).into_response(),
        Err(e) => {
            tracing::warn!(%address, error = %e, "add to cart rejected");
            errors::storefront_error_to_response(e)
        }
    }
}
