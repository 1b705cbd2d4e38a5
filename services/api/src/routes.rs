use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use healthscore::error::AppError;
use healthscore::rating::{
    health_router, ClusterId, EnterpriseHealthService, HealthAssessment, HealthGaugeView,
    SnapshotRepository,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// One ad-hoc (score, rating, cluster) triple to rate without storing it.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) score: f64,
    pub(crate) rating: String,
    #[serde(default)]
    pub(crate) cluster: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) gauge: HealthGaugeView,
}

pub(crate) fn with_health_routes<R>(service: Arc<EnterpriseHealthService<R>>) -> axum::Router
where
    R: SnapshotRepository + 'static,
{
    health_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/health/assessments",
            axum::routing::post(assessment_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        score,
        rating,
        cluster,
    } = payload;

    let assessment = HealthAssessment::evaluate(score, &rating, cluster.map(ClusterId))?;

    Ok(Json(AssessmentResponse {
        generated_on: Local::now().date_naive(),
        gauge: HealthGaugeView::new(&assessment),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assessment_endpoint_rates_a_triple() {
        let request = AssessmentRequest {
            score: 72.4,
            rating: " a ".to_string(),
            cluster: Some(2),
        };

        let Json(body) = assessment_endpoint(Json(request))
            .await
            .expect("assessment builds");

        assert_eq!(body.gauge.score, 72);
        assert_eq!(body.gauge.rating, "A");
        assert!((body.gauge.pointer_pct - 61.642).abs() < 1e-6);
        assert_eq!(
            body.gauge.cluster_profile,
            "fast capital turnover, high efficiency"
        );
        assert_eq!(body.gauge.segments.len(), 6);
    }

    #[tokio::test]
    async fn assessment_endpoint_rejects_scores_off_the_scale() {
        let request = AssessmentRequest {
            score: 640.0,
            rating: "AAA".to_string(),
            cluster: None,
        };

        match assessment_endpoint(Json(request)).await {
            Err(AppError::Rating(err)) => assert!(err.to_string().contains("640")),
            other => panic!("expected rating error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn assessment_endpoint_keeps_labels_off_the_scale() {
        let request = AssessmentRequest {
            score: 58.0,
            rating: "watchlist".to_string(),
            cluster: None,
        };

        let Json(body) = assessment_endpoint(Json(request))
            .await
            .expect("assessment builds");

        assert_eq!(body.gauge.rating, "WATCHLIST");
        assert!(body.gauge.rating_band.is_none());
        assert_eq!(body.gauge.rating_color, healthscore::rating::FALLBACK_COLOR);
    }
}
