use anyhow::Context;

use blueberry_storefront::Storefront;
use blueberry_web::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("invalid configuration")?;
    blueberry_observability::init_with(settings.log_format);

    let app = blueberry_web::app::build_app(Storefront::blueberry());

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
