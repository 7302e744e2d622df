use std::sync::Arc;

use chrono::Duration;
use gateway::config::Config;
use gateway::domain::identity::service::IdentityService;
use gateway::inbound::http::router::create_router;
use gateway::outbound::store::InMemoryUserStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gateway",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Missing or empty signing key fails here, before any request is served
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        users_file = %config.users.file,
        token_ttl_minutes = config.jwt.expire_minutes,
        "Configuration loaded"
    );

    let store = Arc::new(InMemoryUserStore::load(&config.users.file)?);
    tracing::info!(users = store.len(), "User table loaded");

    let identity = Arc::new(IdentityService::new(
        store,
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.expire_minutes),
    ));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(listener, create_router(identity)).await?;

    Ok(())
}
