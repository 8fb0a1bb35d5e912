//! # HTTP API
//!
//! Axum server exposing the Gradebook schema.
//!
//! Routes:
//! - `POST /graphql`: execute a GraphQL request
//! - `GET /graphql?query=...`: execute a query (mutations are rejected with 405)
//! - `GET /graphql`: GraphiQL IDE (when enabled)
//! - `GET /health`: liveness and collection sizes
//!
//! The store lives behind a single `RwLock`. Queries share it, mutations
//! hold it exclusively for one repository call, so concurrent requests never
//! observe a half-applied mutation.

pub mod handlers;
pub mod rate_limit;
pub mod schema;
pub mod types;

use crate::config::ServerConfig;
use crate::error::AppError;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use gradebook_core::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use schema::{GradebookSchema, MutationRoot, QueryRoot, build_schema};

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// The store as shared between requests.
pub type SharedStore = Arc<RwLock<Store>>;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub schema: GradebookSchema,
    pub store: SharedStore,
    pub graphiql: bool,
}

impl AppState {
    /// Wrap `store` and build the schema around it.
    pub fn new(store: Store, graphiql: bool) -> Self {
        let store: SharedStore = Arc::new(RwLock::new(store));
        Self {
            schema: build_schema(Arc::clone(&store)),
            store,
            graphiql,
        }
    }
}

/// Build the application router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route(GRAPHQL_PATH, get(handlers::graphql_get).post(handlers::graphql))
        .route("/health", get(handlers::health))
        .with_state(state);

    if let Some(per_second) = config.rate_limit {
        router = router.layer(middleware::from_fn_with_state(
            rate_limit::limiter(per_second),
            rate_limit::enforce,
        ));
    }

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

/// Load the fixtures, bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    let store = config.load_store()?;
    let counts = store.counts();
    let id_strategy = store.courses().strategy();
    let app = create_router(AppState::new(store, config.graphiql), &config);

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.addr,
            source,
        })?;

    info!(
        addr = %config.addr,
        courses = counts.courses,
        students = counts.students,
        grades = counts.grades,
        id_strategy = ?id_strategy,
        graphiql = config.graphiql,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
