//! HTTP API Layer
//!
//! This crate exposes the eligibility engine over HTTP using Axum. The
//! presentation layer posts a roster snapshot and a reference instant and
//! gets classifications, worklists and report rows back.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each engine operation
//! - **Middleware**: Request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{certifications, dashboard, health, insurance, renewals, reports};
use crate::middleware::{request_logging_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration supplying the engine defaults
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let public_routes = Router::new().route("/health", get(health::health_check));

    let insurance_routes = Router::new()
        .route("/classify", post(insurance::classify))
        .route("/summary", post(insurance::summary))
        .route("/urgent", post(insurance::urgent))
        .route("/filter", post(insurance::filter));

    let certification_routes =
        Router::new().route("/classify", post(certifications::classify));

    let report_routes = Router::new()
        .route("/expiring-certifications", post(reports::expiring_certifications))
        .route("/insurance-status", post(reports::insurance_status));

    let api_routes = Router::new()
        .nest("/insurance", insurance_routes)
        .nest("/certifications", certification_routes)
        .route("/renewals", post(renewals::worklist))
        .route("/dashboard", post(dashboard::overview))
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    // Layers run bottom-up: the id is assigned before tracing and logging see the request
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .fallback(health::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
