use anyhow::Context;

use wishlist_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wishlist_observability::init();

    let config = ApiConfig::from_env();
    let app = wishlist_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        export_dir = %config.export_dir.display(),
        "listening on {local_addr}"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
