use axum::extract::State;
use axum::response::{IntoResponse, Json};

use super::AppState;
use crate::dispatching::rules::policy_for;
use crate::models::Algorithm;

/// GET /algorithms
///
/// Lists the algorithms in canonical order with the active sweep policies.
pub async fn list_algorithms(State(state): State<AppState>) -> impl IntoResponse {
    let algorithms: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&a| {
            serde_json::json!({
                "name": a.name(),
                "description": policy_for(a).description(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "algorithms": algorithms,
        "direction": state.engine.direction(),
        "tie_break": state.engine.tie_break(),
        "max_requests": state.config.limits.max_requests,
    }))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
