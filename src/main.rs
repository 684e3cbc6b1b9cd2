//! Wiring & DI. Entry point: bootstrap the catalog adapter, inject it into the
//! report service, serve HTTP. No business logic here.

use actix_web::{App, HttpServer, web};
use course_reviews::adapters::http;
use course_reviews::adapters::persistence::{InMemoryCatalog, SeedDocument, SqliteCatalog};
use course_reviews::ports::{CatalogPort, CourseReportPort};
use course_reviews::shared::config::AppConfig;
use course_reviews::usecases::CourseReportService;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config load failed: {}", e))?;

    let catalog = build_catalog(&cfg).await?;

    let max_concurrent_lookups = cfg.max_concurrent_lookups_or_default();
    info!(max_concurrent_lookups, "section fan-out limit");
    let service: Arc<dyn CourseReportPort> = Arc::new(CourseReportService::with_concurrency(
        catalog,
        max_concurrent_lookups,
    ));
    let service = web::Data::from(service);

    let bind_addr = cfg.bind_addr_or_default();
    let port = cfg.port_or_default();
    info!(addr = %bind_addr, port, "listening");

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(http::configure)
    })
    .bind((bind_addr.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

/// SQLite when `database_path` is set (seed imported into it if given),
/// otherwise an in-memory catalog built from the seed.
async fn build_catalog(cfg: &AppConfig) -> anyhow::Result<Arc<dyn CatalogPort>> {
    let seed_path = cfg.seed_path.as_deref().map(PathBuf::from);

    if cfg.uses_sqlite() {
        let db_path = PathBuf::from(cfg.database_path.as_deref().unwrap_or_default());
        let sqlite = SqliteCatalog::connect(&db_path)
            .await
            .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?;
        if let Some(path) = seed_path {
            let seed = SeedDocument::load(&path)
                .await
                .and_then(SeedDocument::into_catalog)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            sqlite
                .import(&seed)
                .await
                .map_err(|e| anyhow::anyhow!("seed import failed: {}", e))?;
        }
        info!(path = %sqlite.path().display(), "using SQLite catalog");
        return Ok(Arc::new(sqlite));
    }

    let memory = match seed_path {
        Some(path) => InMemoryCatalog::from_seed_file(&path)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => {
            warn!("no COURSE_REVIEWS_SEED_PATH or COURSE_REVIEWS_DATABASE_PATH set, catalog is empty");
            InMemoryCatalog::default()
        }
    };
    info!("using in-memory catalog");
    Ok(Arc::new(memory))
}
