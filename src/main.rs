use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorhub::config::Config;
use tutorhub::middleware::configure_extractors;
use tutorhub::store::{self, SharedStore, Store};
use tutorhub::{modules, DatabaseService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutorhub=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting tutorhub dashboard API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Seed the record store
    let seed = match &config.store.seed_path {
        Some(path) => store::seed::load(path)
            .await
            .with_context(|| format!("Failed to load seed data from {}", path.display()))?,
        None => {
            tracing::warn!(
                "STORE_SEED_PATH not set, starting with an empty store (seed/sample.json has demo data)"
            );
            Store::new()
        }
    };
    let db = web::Data::new(DatabaseService::new(SharedStore::new(seed)));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(db.clone())
            .configure(configure_extractors)
            .configure(modules::configure)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "tutorhub",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
