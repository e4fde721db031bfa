use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match config.database_url.clone() {
        Some(database_url) => {
            let pool = infra::db::connect(&database_url, config.database_max_connections).await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            // Run database migrations automatically on startup (can be disabled with SKIP_MIGRATIONS=true)
            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                infra::db::migrate(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            AppState::postgres(pool, config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using the in-process store (data is not persisted)");
            AppState::in_memory(config)
        }
    };

    let schema = build_schema(state.clone());
    let port = state.config().port;
    let app = build_router(state, schema);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
