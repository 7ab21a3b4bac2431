//! HTTP boundary. Handlers share one store handle behind a mutex; every
//! request takes it on the blocking pool, only for the duration of its own
//! queries, so SQLite work never runs on the async workers.

pub mod error;
pub mod routes;

use crate::calendar::GridLayout;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::{get, post, put};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<Mutex<DbPool>>,
    pub layout: GridLayout,
}

impl AppState {
    pub fn new(pool: DbPool, layout: GridLayout) -> Self {
        Self {
            pool: Arc::new(Mutex::new(pool)),
            layout,
        }
    }

    /// Run `f` with exclusive access to the store, on tokio's blocking pool.
    pub async fn with_pool<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut pool = pool
                .lock()
                .map_err(|_| AppError::Other("event store lock poisoned".to_string()))?;
            f(&mut *pool)
        })
        .await
        .map_err(|e| AppError::Server(format!("store task failed: {}", e)))?
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/events", post(routes::create_event))
        .route("/events/:year/:month", get(routes::month_events))
        .route(
            "/events/:id",
            put(routes::update_event).delete(routes::delete_event),
        )
        .route("/grid/:year/:month", get(routes::month_grid))
        .with_state(state)
}

pub async fn run(cfg: Config) -> AppResult<()> {
    run_with_shutdown(cfg, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
    .await
}

pub async fn run_with_shutdown<F>(cfg: Config, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let layout = cfg.layout()?;
    let pool = DbPool::open(&cfg.database)?;
    let state = AppState::new(pool, layout);
    let app = build_router(state);

    let addr = format!("{}:{}", cfg.server_host, cfg.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {}: {}", addr, e)))?;

    info!(%addr, database = %cfg.database, "calendar server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("calendar server stopped");
    Ok(())
}
