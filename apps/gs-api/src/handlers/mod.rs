//! Handlers 模块

pub mod connection_stats;
pub mod metrics;

pub use connection_stats::*;
pub use metrics::*;

use axum::{Json, response::IntoResponse};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
