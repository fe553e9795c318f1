use noel_solidarite_backend::{config, create_router, initialize_backend};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(config::env_filter()).init();

    let config = config::Config::load();
    info!("Serving frontend from {}", config.static_dir.display());

    let app_state = initialize_backend().await?;
    let app = create_router(app_state, &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
