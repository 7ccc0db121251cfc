use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use admin_api_server::config::Settings;
use admin_api_server::database::{DbPool, Repository};
use admin_api_server::handlers;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,admin_api_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting Admin API Server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize database pool
    let db_pool = DbPool::new(&settings.database).await?;
    info!("✅ Database connection established");

    // Initialize repository and make sure the tenants table exists
    let repository = Arc::new(Repository::new(db_pool));
    repository.ensure_schema().await?;
    info!("✅ Tenant schema ensured");

    // Build router
    let app = handlers::build_router(repository);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
