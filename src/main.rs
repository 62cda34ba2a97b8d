use anyhow::Context;
use notification_service::db::{create_pool, run_migrations};
use notification_service::notification::{NotificationRepository, NotificationService};
use notification_service::routes::create_router;
use notification_service::state::{AppState, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notification_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    tracing::info!("Connecting to database...");
    let db = create_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await.context("failed to run migrations")?;

    let notification_repository = NotificationRepository::new(db.clone());
    let notification_service = NotificationService::new(notification_repository);

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        notification_service,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
