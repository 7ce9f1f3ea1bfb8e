use std::sync::Arc;

use animal_service::config::Config;
use animal_service::domain::animal::service::AnimalService;
use animal_service::domain::user::service::AuthService;
use animal_service::inbound::http::router::create_router;
use animal_service::outbound::repositories::PostgresAnimalRepository;
use animal_service::outbound::repositories::PostgresUserRepository;
use anyhow::Context;
use auth::TokenAuthority;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "animal_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "animal-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Missing configuration is fatal here, never a per-request error
    let config = Config::load().context("Failed to load configuration")?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_minutes = config.jwt.refresh_ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_authority = Arc::new(
        TokenAuthority::new(
            config.jwt.access_secret.as_bytes(),
            config.jwt.refresh_secret.as_bytes(),
            &config.jwt.algorithm,
            Duration::minutes(config.jwt.access_ttl_minutes),
            Duration::minutes(config.jwt.refresh_ttl_minutes),
        )
        .context("Failed to build token authority")?,
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let animal_repository = Arc::new(PostgresAnimalRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(user_repository, token_authority));
    let animal_service = Arc::new(AnimalService::new(animal_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, animal_service);
    axum::serve(http_listener, application).await?;

    Ok(())
}
