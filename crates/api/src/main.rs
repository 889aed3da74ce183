use anyhow::Result;
use tracing::info;

use connectapp_admin_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting ConnectApp admin API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        admins_may_delete_subordinates = config.policy.admins_may_delete_subordinates,
        max_bulk_size = config.policy.max_bulk_size,
        "Access policy loaded"
    );

    let addr = config.socket_addr()?;

    // Build application
    let app = app::create_app(config);

    // Start server
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
