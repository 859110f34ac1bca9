use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;

use super::AppState;
use crate::dispatching::Outcome;
use crate::error::Result;
use crate::validation::{validate_request, RawSimulationRequest};

/// POST /simulate
///
/// Body: `{ "requests": [..], "head": n, "disk_size": n, "algorithm": "SCAN" | .. | "ALL" }`.
/// The body is parsed as JSON whatever the content type.
///
/// Returns one result object, or for `ALL` an object keyed by algorithm name
/// in canonical order. Invalid input yields 400 with `error` and `details`.
pub async fn simulate(State(state): State<AppState>, body: Bytes) -> Result<Json<Outcome>> {
    let raw: RawSimulationRequest = serde_json::from_slice(&body)?;
    let validated = validate_request(&raw, state.config.limits.max_requests)?;

    tracing::info!(
        algorithm = %validated.selector,
        requests = validated.input.requests().len(),
        head = validated.input.head(),
        disk_size = validated.input.disk_size(),
        "simulate"
    );

    Ok(Json(
        state.engine.dispatch(validated.selector, &validated.input),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::{app, AppState};
    use crate::config::Config;

    async fn post(body: impl Into<Body>) -> (StatusCode, String) {
        post_with(Config::default(), body).await
    }

    async fn post_with(config: Config, body: impl Into<Body>) -> (StatusCode, String) {
        let response = app(AppState::new(config))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn reference(algorithm: &str) -> String {
        json!({
            "requests": [98, 183, 37, 122, 14, 124, 65, 67],
            "head": 53,
            "disk_size": 200,
            "algorithm": algorithm,
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_single_algorithm() {
        let (status, body) = post(reference("scan")).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["algorithm"], "SCAN");
        assert_eq!(v["total_seek_time"], 331);
        assert_eq!(v["average_seek_time"], json!(41.38));
        assert_eq!(v["seek_sequence"], json!([65, 67, 98, 122, 124, 183, 37, 14]));
        assert_eq!(v["head_path"], json!([65, 67, 98, 122, 124, 183, 199, 37, 14]));
    }

    #[tokio::test]
    async fn test_all_algorithms_in_canonical_order() {
        let (status, body) = post(reference("ALL")).await;
        assert_eq!(status, StatusCode::OK);

        let positions: Vec<usize> = ["FCFS", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"]
            .iter()
            .map(|k| body.find(&format!("\"{k}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 6);
        let expected = [
            ("FCFS", 640, 80.0),
            ("SSTF", 236, 29.5),
            ("SCAN", 331, 41.38),
            ("C-SCAN", 382, 47.75),
            ("LOOK", 299, 37.38),
            ("C-LOOK", 322, 40.25),
        ];
        for (name, total, avg) in expected {
            assert_eq!(v[name]["total_seek_time"], total, "{name}");
            assert_eq!(v[name]["average_seek_time"], json!(avg), "{name}");
        }
    }

    #[tokio::test]
    async fn test_all_matches_single_calls() {
        let (_, all) = post(reference("ALL")).await;
        let all: Value = serde_json::from_str(&all).unwrap();
        for name in ["FCFS", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"] {
            let (_, single) = post(reference(name)).await;
            let single: Value = serde_json::from_str(&single).unwrap();
            assert_eq!(all[name], single, "{name}");
        }
    }

    #[tokio::test]
    async fn test_unknown_algorithm() {
        let (status, body) = post(reference("ELEVATOR")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let v: Value = serde_json::from_str(&body).unwrap();
        let msg = v["error"].as_str().unwrap();
        assert!(msg.contains("ELEVATOR"));
        assert!(msg.contains("C-LOOK"));
    }

    #[tokio::test]
    async fn test_out_of_range_reports_range() {
        let body = json!({"requests": [10, 250], "head": 5, "disk_size": 200, "algorithm": "FCFS"});
        let (status, body) = post(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert!(v["error"].as_str().unwrap().contains("between 0 and 199"));
        assert_eq!(v["details"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = post("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert!(v["error"].as_str().unwrap().starts_with("JSON error"));
    }

    #[tokio::test]
    async fn test_request_limit() {
        let mut config = Config::default();
        config.limits.max_requests = 4;
        let (status, body) = post_with(config, reference("FCFS")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("At most 4 requests"));
    }

    #[tokio::test]
    async fn test_empty_requests() {
        let body = json!({"requests": [], "head": 5, "disk_size": 10, "algorithm": "C-SCAN"});
        let (status, body) = post(body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["seek_sequence"], json!([]));
        assert_eq!(v["total_seek_time"], 0);
        assert_eq!(v["average_seek_time"], json!(0.0));
    }

    #[tokio::test]
    async fn test_meta_routes() {
        let app = app(AppState::new(Config::default()));
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/algorithms").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["algorithms"].as_array().unwrap().len(), 6);
        assert_eq!(v["algorithms"][3]["name"], "C-SCAN");
        assert_eq!(v["direction"], "up");
        assert_eq!(v["tie_break"], "arrival_order");
    }
}
