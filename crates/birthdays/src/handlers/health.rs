//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no body)
//! - `/healthz` - Liveness with a small JSON body
//!
//! Neither touches storage or the cache.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Returns `{"status": "ok"}` while the process is serving.
#[axum::debug_handler]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
