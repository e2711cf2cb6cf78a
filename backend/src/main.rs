use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{error, info};

use txn_tracker_backend::app;
use txn_tracker_backend::config::{AppConfig, StorageBackend};
use txn_tracker_backend::logging::{self, LoggingConfig};
use txn_tracker_backend::repository::{
    InMemoryTransactionRepository, PgTransactionRepository, TransactionRepository,
};
use txn_tracker_backend::server;
use txn_tracker_backend::services::TransactionService;
use txn_tracker_backend::shutdown;
use txn_tracker_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(&LoggingConfig::from_env())
        .context("failed to initialize logging")?;

    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    let repository = connect_repository(&config).await?;
    let service = TransactionService::new(repository);
    let app = app::create_app(AppState::new(service.clone()), config.request_timeout);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Transaction tracker running at http://{}/", addr);

    server::serve(listener, app, service, config.shutdown_grace, shutdown::signal())
        .await
        .context("server did not shut down cleanly")
}

async fn connect_repository(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn TransactionRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            info!("📦 Using in-memory transaction storage");
            Ok(Arc::new(InMemoryTransactionRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .context("unable to initialize database")?;

            if config.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("failed to run database migrations")?;
                info!("Database migrations applied");
            }

            info!("📦 Using PostgreSQL transaction storage");
            Ok(Arc::new(PgTransactionRepository::new(pool)))
        }
    }
}
