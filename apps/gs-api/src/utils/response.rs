//! HTTP 响应辅助函数和 DTO 转换
//!
//! - 错误响应：bad_request_error, not_found_error, storage_error
//! - DTO 转换：stats_to_dto, stats_from_dto, update_from_dto
//!
//! 存储错误到 HTTP 状态码：
//! - NotFound → 404
//! - Transport → 503
//! - DeadlineExceeded → 504
//! - 其他 → 500

use api_contract::{
    ApiResponse, ConnectionStatsDto, DownlinkStatsDto, GatewayStatusDto, RoundTripTimesDto,
    StatusStatsDto, TrafficUpdateDto, UplinkStatsDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{
    DownlinkStats, GatewayConnectionStats, GatewayStatus, RoundTripTimes, StatusStats,
    UplinkStats,
};
use gs_storage::{StorageError, TrafficUpdate};

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 连接统计未找到响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(
            "STATS.NOT_FOUND",
            StorageError::NotFound.to_string(),
        )),
    )
        .into_response()
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    let (status, code) = match &err {
        StorageError::NotFound => return not_found_error(),
        StorageError::Transport(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORAGE.UNAVAILABLE"),
        StorageError::DeadlineExceeded => (StatusCode::GATEWAY_TIMEOUT, "STORAGE.TIMEOUT"),
        StorageError::Encode(_) | StorageError::InvalidNamespace(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL.ERROR")
        }
    };
    (
        status,
        Json(ApiResponse::<()>::error(code, err.to_string())),
    )
        .into_response()
}

pub fn update_from_dto(dto: TrafficUpdateDto) -> TrafficUpdate {
    TrafficUpdate {
        up: dto.up,
        down: dto.down,
        status: dto.status,
    }
}

pub fn stats_to_dto(stats: GatewayConnectionStats) -> ConnectionStatsDto {
    ConnectionStatsDto {
        uplink: UplinkStatsDto {
            last_uplink_received_at: stats.uplink.last_uplink_received_at_ms,
            uplink_count: stats.uplink.uplink_count,
            round_trip_times: stats.uplink.round_trip_times.map(|rtt| RoundTripTimesDto {
                min_ms: rtt.min_ms,
                max_ms: rtt.max_ms,
                median_ms: rtt.median_ms,
                count: rtt.count,
            }),
        },
        downlink: DownlinkStatsDto {
            last_downlink_received_at: stats.downlink.last_downlink_received_at_ms,
            downlink_count: stats.downlink.downlink_count,
        },
        status: StatusStatsDto {
            connected_at: stats.status.connected_at_ms,
            protocol: stats.status.protocol,
            last_status: stats.status.last_status.map(|status| GatewayStatusDto {
                time: status.time_ms,
                boot_time: status.boot_time_ms,
                versions: status.versions,
                ip: status.ip,
                metrics: status.metrics,
            }),
            last_status_received_at: stats.status.last_status_received_at_ms,
        },
    }
}

pub fn stats_from_dto(dto: ConnectionStatsDto) -> GatewayConnectionStats {
    GatewayConnectionStats {
        uplink: UplinkStats {
            last_uplink_received_at_ms: dto.uplink.last_uplink_received_at,
            uplink_count: dto.uplink.uplink_count,
            round_trip_times: dto.uplink.round_trip_times.map(|rtt| RoundTripTimes {
                min_ms: rtt.min_ms,
                max_ms: rtt.max_ms,
                median_ms: rtt.median_ms,
                count: rtt.count,
            }),
        },
        downlink: DownlinkStats {
            last_downlink_received_at_ms: dto.downlink.last_downlink_received_at,
            downlink_count: dto.downlink.downlink_count,
        },
        status: StatusStats {
            connected_at_ms: dto.status.connected_at,
            protocol: dto.status.protocol,
            last_status: dto.status.last_status.map(|status| GatewayStatus {
                time_ms: status.time,
                boot_time_ms: status.boot_time,
                versions: status.versions,
                ip: status.ip,
                metrics: status.metrics,
            }),
            last_status_received_at_ms: dto.status.last_status_received_at,
        },
    }
}
