use crate::api::schemas::health::ProxyStatus;
use axum::Json;

/// Liveness probe: fixed payload, no dependency on upstream reachability.
pub async fn root() -> Json<ProxyStatus> {
    Json(ProxyStatus { status: "ok".to_string(), message: "Proxy is running.".to_string() })
}
