use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::repository::{RepositoryError, SnapshotRepository};
use super::service::{EnterpriseHealthService, HealthServiceError};

/// Router builder exposing the enterprise health endpoints.
pub fn health_router<R>(service: Arc<EnterpriseHealthService<R>>) -> Router
where
    R: SnapshotRepository + 'static,
{
    Router::new()
        .route("/api/v1/enterprises", get(roster_handler::<R>))
        .route(
            "/api/v1/enterprises/:code/health",
            get(enterprise_health_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn roster_handler<R>(
    State(service): State<Arc<EnterpriseHealthService<R>>>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    match service.roster() {
        Ok(codes) => (StatusCode::OK, axum::Json(json!({ "enterprises": codes }))).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn enterprise_health_handler<R>(
    State(service): State<Arc<EnterpriseHealthService<R>>>,
    Path(code): Path<String>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    match service.latest_health(&code) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(HealthServiceError::Repository(RepositoryError::UnknownEnterprise(code))) => {
            let payload = json!({
                "error": format!("enterprise '{code}' is not in the snapshot directory"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err @ HealthServiceError::EmptyHistory(_)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(HealthServiceError::Rating(err)) => {
            let payload = json!({ "error": format!("snapshot is unusable: {err}") });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
