use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use blueberry_storefront::StorefrontError;
use blueberry_storefront::html::{self, HtmlBuffer};
use blueberry_storefront::navigator::View;

pub fn storefront_error_to_response(err: StorefrontError) -> axum::response::Response {
    match &err {
        StorefrontError::UnknownSection(_) | StorefrontError::UnknownProduct(_) => {
            html_error(StatusCode::NOT_FOUND, err.to_string())
        }
        StorefrontError::ActionUnavailable(_) => {
            html_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
    }
}

pub fn html_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    let mut out = HtmlBuffer::new();
    out.open("div", &[("class", "blueberry-error")])
        .element("h1", &[], status.canonical_reason().unwrap_or("Error"))
        .element("p", &[], &message.into())
        .element("a", &[("href", View::Catalog.location())], "Back to the shop")
        .close("div");

    (status, Html(html::page("Blueberry", &out.finish()))).into_response()
}
