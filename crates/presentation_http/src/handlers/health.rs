//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub inference: ServiceStatus,
    pub speech: ServiceStatus,
}

/// Status of a backing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Readiness check - are the inference and speech vendors reachable?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let inference_healthy = state.chat_service.is_healthy().await;
    let speech_healthy = state.chat_service.speech_available().await;

    let model = if inference_healthy {
        Some(state.chat_service.current_model())
    } else {
        None
    };

    let ready = inference_healthy && speech_healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            inference: ServiceStatus {
                healthy: inference_healthy,
                model,
            },
            speech: ServiceStatus {
                healthy: speech_healthy,
                model: None,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("status"));
        assert!(json.contains("ok"));
        assert!(json.contains("version"));
    }

    #[test]
    fn health_response_deserialization() {
        let json = r#"{"status":"ok","version":"0.1.0"}"#;
        let resp: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, "0.1.0");
    }

    #[test]
    fn service_status_omits_missing_model() {
        let status = ServiceStatus {
            healthy: true,
            model: None,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("model"));
    }

    #[test]
    fn service_status_serialization_with_model() {
        let status = ServiceStatus {
            healthy: true,
            model: Some("gemini-2.0-flash-exp".to_string()),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("gemini-2.0-flash-exp"));
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: true,
            inference: ServiceStatus {
                healthy: true,
                model: Some("gemini-2.0-flash-exp".to_string()),
            },
            speech: ServiceStatus {
                healthy: true,
                model: None,
            },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("ready"));
        assert!(json.contains("inference"));
        assert!(json.contains("speech"));
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }
}
