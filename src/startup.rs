use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::configuration::{DatabaseSettings, Settings};
use crate::routes::video::{create, create_page, delete, edit_page, index, show, update};
use crate::services::video::VideoService;
use crate::store::{PgVideoStore, VideoStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub video_service: VideoService,
}

impl AppState {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self {
            video_service: VideoService::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/videos", post(create))
        .route("/videos/create", get(create_page))
        .route("/videos/{id}", get(show))
        .route("/videos/{id}/edit", get(edit_page))
        .route("/videos/{id}/updates", post(update))
        .route("/videos/{id}/deletes", post(delete))
        .nest_service("/assets", ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn get_connection_pool(cfg: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(cfg.connect_options())
}

/// Serves `state` on an already bound listener until shutdown is signalled.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

pub async fn run(cfg: Settings) -> anyhow::Result<()> {
    let pg_pool = get_connection_pool(&cfg.database);
    sqlx::migrate!("./migrations")
        .run(&pg_pool)
        .await
        .context("failed to run database migrations")?;

    let state = AppState::new(Arc::new(PgVideoStore::new(pg_pool)));

    let address = format!("{}:{}", cfg.application.host, cfg.application.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("could not bind {address}"))?;
    tracing::info!("Listening on {}", address);

    serve(listener, state).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {:?}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {:?}", e);
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
    tracing::info!("Shutdown signal received");
}
