//! Axum route handlers for the activity signup API.

use std::{path::Path, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use signup_core::ActivityDirectory;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    error::GatewayError,
    extract::{ActivityName, EmailParam},
    registry::Registry,
};

// ── Shared state ─────────────────────────────────────────────────────────────

type Shared = Arc<Registry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Confirmation body returned by successful membership changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the API router over the given registry.
pub fn create_router(registry: Shared) -> Router {
    with_http_layers(api_routes(registry))
}

/// Build the API router plus the front-end assets in `static_dir` under
/// `/static`. Static requests pass through the same trace and CORS layers.
pub fn create_app(registry: Shared, static_dir: impl AsRef<Path>) -> Router {
    with_http_layers(api_routes(registry).nest_service("/static", ServeDir::new(static_dir)))
}

fn api_routes(registry: Shared) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", post(unregister))
        .route("/health", get(health))
        .with_state(registry)
}

fn with_http_layers(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: send browsers to the front-end.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /activities`: every activity keyed by name, with current participants.
pub async fn list_activities(State(registry): State<Shared>) -> Json<ActivityDirectory> {
    Json(registry.snapshot())
}

/// `POST /activities/{activity_name}/signup?email=`: add a participant.
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity is unknown or the email
/// is already signed up, and [`GatewayError::InvalidRequest`] if the path or
/// query cannot be decoded or `email` is missing.
pub async fn signup(
    State(registry): State<Shared>,
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
) -> Result<Json<MessageResponse>, GatewayError> {
    let enrollment = registry
        .signup(&activity_name, email)
        .inspect_err(|e| warn!(activity = %activity_name, error = %e, "signup rejected"))?;
    info!(activity = %enrollment.activity(), email = %enrollment.email(), "participant signed up");
    Ok(Json(MessageResponse { message: enrollment.to_string() }))
}

/// `POST /activities/{activity_name}/unregister?email=`: remove a participant.
///
/// # Errors
/// Returns [`GatewayError::Directory`] if the activity is unknown or the email
/// is not signed up, and [`GatewayError::InvalidRequest`] if the path or query
/// cannot be decoded or `email` is missing.
pub async fn unregister(
    State(registry): State<Shared>,
    ActivityName(activity_name): ActivityName,
    EmailParam(email): EmailParam,
) -> Result<Json<MessageResponse>, GatewayError> {
    let enrollment = registry
        .unregister(&activity_name, email)
        .inspect_err(|e| warn!(activity = %activity_name, error = %e, "unregister rejected"))?;
    info!(activity = %enrollment.activity(), email = %enrollment.email(), "participant unregistered");
    Ok(Json(MessageResponse { message: enrollment.to_string() }))
}
