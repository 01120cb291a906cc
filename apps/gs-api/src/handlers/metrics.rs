//! 连接统计存储指标快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gs_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            set_success: snapshot.set_success,
            set_failure: snapshot.set_failure,
            cleared: snapshot.cleared,
            get_found: snapshot.get_found,
            get_not_found: snapshot.get_not_found,
            get_failure: snapshot.get_failure,
            decode_failure: snapshot.decode_failure,
            set_latency_ms_total: snapshot.set_latency_ms_total,
            set_latency_ms_count: snapshot.set_latency_ms_count,
            get_latency_ms_total: snapshot.get_latency_ms_total,
            get_latency_ms_count: snapshot.get_latency_ms_count,
        })),
    )
        .into_response()
}
