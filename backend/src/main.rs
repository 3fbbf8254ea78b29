use std::sync::Arc;

use axum::{routing::get, Router};
use tera::Tera;
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod seed;

use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state — cheap to clone (all heap behind Arc).
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub templates: Arc<Tera>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.default_log_filter())),
        )
        .with_target(false)
        .compact()
        .init();

    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    if catalog.is_empty() {
        warn!("Catalog is empty; product endpoints will return no data");
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        templates: Arc::new(handlers::shop::init_templates()?),
    };

    let app = build_router(state.clone(), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        products = state.catalog.len(),
        debug_mode = config.debug,
        "{} initialized, listening on http://{}",
        handlers::SERVICE_NAME,
        addr
    );

    serve(listener, app, &config).await
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        // ── Shop page ───────────────────────────────────────────────────────
        .route("/", get(handlers::shop::index))
        .nest_service("/static", ServeDir::new(&config.static_dir))

        // ── Products (read-only) ────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))

        // ── Probes ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))

        .fallback(handlers::not_found);

    with_middleware(router, config).with_state(state)
}

/// Timeout, access log and (optionally) permissive CORS around every route.
fn with_middleware<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = router
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    if config.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Runs until SIGINT/SIGTERM, then drains in-flight requests for at most
/// `config.shutdown_grace`.
async fn serve(listener: tokio::net::TcpListener, app: Router, config: &Config) -> anyhow::Result<()> {
    let stop = Arc::new(tokio::sync::Notify::new());
    let mut server = tokio::spawn({
        let stop = stop.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.notified().await })
                .await
        }
    });

    tokio::select! {
        finished = &mut server => {
            finished??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!("{} shutting down gracefully", handlers::SERVICE_NAME);
    stop.notify_one();

    match tokio::time::timeout(config.shutdown_grace, server).await {
        Ok(finished) => finished??,
        Err(_) => warn!(
            grace_secs = config.shutdown_grace.as_secs(),
            "Grace period elapsed; abandoning in-flight requests"
        ),
    }

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
