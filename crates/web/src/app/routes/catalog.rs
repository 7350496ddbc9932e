use std::sync::Arc;

use axum::{extract::Extension, response::Html};

use blueberry_storefront::View;

use crate::app::services::AppServices;

pub async fn show(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    let mut storefront = services.storefront();
    storefront.visit(View::Catalog.location());
    Html(storefront.render())
}
