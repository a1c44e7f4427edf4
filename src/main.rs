use library_catalog::{
    AppConfig,
    adapters::{
        hashing::Argon2PasswordHasher,
        postgres::{
            PostgresAuthorRepository, PostgresBookRepository, PostgresBorrowingRecordRepository,
            PostgresCustomerRepository,
        },
    },
    api::{create_router, handlers::AppState},
    application::catalog::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Initialize adapters
    let service_deps = ServiceDependencies {
        authors: Arc::new(PostgresAuthorRepository::new(pool.clone())),
        books: Arc::new(PostgresBookRepository::new(pool.clone())),
        customers: Arc::new(PostgresCustomerRepository::new(pool.clone())),
        borrowing_records: Arc::new(PostgresBorrowingRecordRepository::new(pool)),
        password_hasher: Arc::new(Argon2PasswordHasher::default()),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
