//! HTTP server.
//!
//! This module provides:
//! - Route registration for the `/app/people` endpoints
//! - Request decoding and validation (`requests`)
//! - Envelope and error shaping (`responses`)
//! - The serve loop with graceful shutdown
//!
//! # Endpoints
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/app/people` | create |
//! | DELETE | `/app/people?email=E` | delete |
//! | GET | `/app/people?orderBy=name\|email` | list |
//! | GET | `/app/people/{email}` | retrieve |
//! | PUT | `/app/people/{email}` | update |
//!
//! # Example
//!
//! ```no_run
//! use people_api::server::{router, AppState};
//! use people_api::storage::SqlStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqlStore::new_in_memory().await?;
//! let app = router(AppState::new(store));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod handlers;
mod requests;
mod responses;
mod types;

pub use handlers::{create_person, delete_person, get_person, list_persons, update_person};
pub use requests::{
    decode_person, parse_sort_key, require_email, validate_person, DeleteParams, ListParams,
    QueryPairs,
};
pub use responses::{
    ApiError, Envelope, CREATED_MESSAGE, DELETED_MESSAGE, SERVER_ERROR_MESSAGE, UPDATED_MESSAGE,
};
pub use types::AppState;

use axum::http::{header, HeaderName, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::storage::SqlStore;

/// Build the router with every endpoint, CORS, and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/app/people",
            get(list_persons).post(create_person).delete(delete_person),
        )
        .route("/app/people/:email", get(get_person).put(update_person))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, the CRUD methods plus HEAD/OPTIONS, and a fixed header list.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}

/// Serve `state` on `listener` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns the I/O error if the server stops abnormally.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Run the whole service: connect storage, bind, serve, then close storage.
///
/// The store is closed on every exit path after it was opened.
///
/// # Errors
///
/// Returns [`AppError`] if the database cannot be reached within the retry
/// policy, the listener cannot bind, or serving fails.
pub async fn run(config: Config) -> Result<(), AppError> {
    let store = SqlStore::connect(config.database_url().expose(), config.retry_policy()).await?;

    let listener = match TcpListener::bind(&config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            store.close().await;
            return Err(e.into());
        }
    };

    tracing::info!(addr = %config.listen_addr, "REST API server listening");

    let result = serve(listener, AppState::new(store.clone())).await;
    store.close().await;

    result.map_err(AppError::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
