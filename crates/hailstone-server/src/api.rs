//! HTTP API for the sequence engine.

use crate::config::ServerConfig;
use crate::error::{ApiError, Result};
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use hailstone_core::{Operation, Sequence};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

type AppState = Arc<ServerConfig>;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Embedded frontend
        .route("/", get(index))
        // Health
        .route("/health", get(health))
        // Sequence computation
        .route("/api/collatz", post(compute_sequence))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the embedded single-page frontend.
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct ComputeRequest {
    /// Signed so that negative submissions parse and get a proper error
    number: i64,
}

#[derive(Debug, Serialize)]
struct StepResponse {
    step: usize,
    value: u64,
    /// `null` for step 0; `"divide"` or `"multiply-add"` afterwards
    operation: Option<Operation>,
}

#[derive(Debug, Serialize)]
struct ComputeResponse {
    steps: Vec<StepResponse>,
    truncated: bool,
}

impl ComputeResponse {
    fn from_sequence(seq: &Sequence) -> Self {
        let steps = seq
            .steps()
            .map(|step| StepResponse {
                step: step.index,
                value: step.value,
                operation: step.operation,
            })
            .collect();
        Self {
            steps,
            truncated: seq.is_truncated(),
        }
    }
}

async fn compute_sequence(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>> {
    if req.number < 1 {
        return Err(ApiError::NonPositiveNumber(req.number));
    }

    let seq = hailstone_core::compute_capped(req.number as u64, state.max_steps)?;
    tracing::debug!(
        start = req.number,
        len = seq.len(),
        truncated = seq.is_truncated(),
        "sequence computed"
    );

    Ok(Json(ComputeResponse::from_sequence(&seq)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn test_state(max_steps: usize) -> AppState {
        Arc::new(ServerConfig {
            api_addr: "127.0.0.1:0".parse().unwrap(),
            max_steps,
        })
    }

    #[tokio::test]
    async fn computes_labelled_steps() {
        let res = compute_sequence(
            State(test_state(1000)),
            Json(ComputeRequest { number: 6 }),
        )
        .await
        .unwrap();

        let body = res.0;
        assert!(!body.truncated);
        assert_eq!(body.steps.len(), 9);

        // Step 0 is the input itself, with no producing operation
        assert_eq!(body.steps[0].step, 0);
        assert_eq!(body.steps[0].value, 6);
        assert_eq!(body.steps[0].operation, None);

        // 6 is even, 3 is odd
        assert_eq!(body.steps[1].value, 3);
        assert_eq!(body.steps[1].operation, Some(Operation::Halve));
        assert_eq!(body.steps[2].value, 10);
        assert_eq!(body.steps[2].operation, Some(Operation::TripleAddOne));

        assert_eq!(body.steps.last().unwrap().value, 1);
    }

    #[tokio::test]
    async fn cap_marks_truncation() {
        let res = compute_sequence(
            State(test_state(3)),
            Json(ComputeRequest { number: 27 }),
        )
        .await
        .unwrap();

        let body = res.0;
        assert!(body.truncated);
        assert_eq!(body.steps.len(), 4);
        assert_eq!(body.steps.last().unwrap().value, 124);
    }

    #[tokio::test]
    async fn rejects_zero_and_negative() {
        for number in [0, -5] {
            let err = compute_sequence(
                State(test_state(1000)),
                Json(ComputeRequest { number }),
            )
            .await
            .unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn overflow_maps_to_unprocessable() {
        // i64::MAX is odd; 3n + 1 leaves u64 range on the first step
        let err = compute_sequence(
            State(test_state(1000)),
            Json(ComputeRequest { number: i64::MAX }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn wire_shape_matches_contract() {
        let seq = hailstone_core::compute(5).unwrap();
        let json = serde_json::to_value(ComputeResponse::from_sequence(&seq)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "steps": [
                    { "step": 0, "value": 5, "operation": null },
                    { "step": 1, "value": 16, "operation": "multiply-add" },
                    { "step": 2, "value": 8, "operation": "divide" },
                    { "step": 3, "value": 4, "operation": "divide" },
                    { "step": 4, "value": 2, "operation": "divide" },
                    { "step": 5, "value": 1, "operation": "divide" },
                ],
                "truncated": false,
            })
        );
    }

    #[test]
    fn router_builds() {
        let _router = build_router(test_state(1000));
    }
}
