//! Unified API router for Calm AI Help
//!
//! Merges the module routers into a single axum `Router` with CORS and an
//! optional static-site fallback.
//!
//! ## Endpoint Map
//!
//! | Prefix                 | Module  | Description                         |
//! |------------------------|---------|-------------------------------------|
//! | `/api/health`          | api     | Load balancer health probe          |
//! | `/api/chat`            | chat    | Scripted Q&A                        |
//! | `/api/assessment(s)/*` | records | Assessment submit, fetch, listing   |
//! | `/api/contact(s)/*`    | records | Contact form submit, fetch, listing |
//! | `/*` (fallback)        | api     | Static site, when configured        |

use crate::chat::{chat_router, ChatState};
use crate::records::{records_router, RecordsState};
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the complete Calm AI Help HTTP application
///
/// Merges the module routers, adds CORS middleware and, when a static
/// directory is configured, serves the site files for non-API paths.
pub fn build_app(
    records_state: RecordsState,
    chat_state: ChatState,
    cors_origins: &[String],
    static_dir: Option<&Path>,
) -> Router {
    let cors = build_cors(cors_origins);

    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .merge(records_router(records_state))
        .merge(chat_router(chat_state));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors)
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    timestamp: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
