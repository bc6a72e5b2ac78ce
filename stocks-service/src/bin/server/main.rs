use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenAuthority;
use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use stocks_service::config::Config;
use stocks_service::domain::account::service::AccountService;
use stocks_service::domain::quotes::ports::QuoteGateway;
use stocks_service::inbound::http::router::create_router;
use stocks_service::outbound::cache::CachedQuoteGateway;
use stocks_service::outbound::polygon::PolygonQuoteClient;
use stocks_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocks_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "stocks-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails here, before anything listens, if the secret or API key is
    // missing.
    let config = Config::load()?;

    tracing::info!(
        port = config.port,
        jwt_expiration_secs = config.jwt_expiration,
        redis_enabled = config.redis_host.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = 5, "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!("Database migrations completed");

    let token_authority = Arc::new(TokenAuthority::new(
        config.jwt_secret.as_bytes(),
        config.jwt_expiration,
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let account_service = Arc::new(AccountService::new(
        user_repository,
        PasswordHasher::new(),
        Arc::clone(&token_authority),
    )?);

    let polygon = PolygonQuoteClient::new(config.polygon_io_api_key.clone());
    let quote_gateway: Arc<dyn QuoteGateway> = match &config.redis_host {
        Some(host) => {
            let client = redis::Client::open(format!("redis://{}:{}/", host, config.redis_port))?;
            let connection = ConnectionManager::new(client).await?;
            tracing::info!(redis_host = %host, redis_port = config.redis_port, "Quote cache enabled");
            Arc::new(CachedQuoteGateway::new(polygon, connection))
        }
        None => Arc::new(polygon),
    };

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Http server listening");

    let application = create_router(account_service, token_authority, quote_gateway);
    axum::serve(listener, application).await?;

    Ok(())
}
