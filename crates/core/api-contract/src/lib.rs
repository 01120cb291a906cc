//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 网关连接统计返回结构（时间戳为 Unix 毫秒）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionStatsDto {
    pub uplink: UplinkStatsDto,
    pub downlink: DownlinkStatsDto,
    pub status: StatusStatsDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UplinkStatsDto {
    pub last_uplink_received_at: Option<i64>,
    pub uplink_count: u64,
    pub round_trip_times: Option<RoundTripTimesDto>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundTripTimesDto {
    pub min_ms: u64,
    pub max_ms: u64,
    pub median_ms: u64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownlinkStatsDto {
    pub last_downlink_received_at: Option<i64>,
    pub downlink_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusStatsDto {
    pub connected_at: Option<i64>,
    pub protocol: String,
    pub last_status: Option<GatewayStatusDto>,
    pub last_status_received_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayStatusDto {
    pub time: i64,
    pub boot_time: Option<i64>,
    pub versions: BTreeMap<String, String>,
    pub ip: Vec<String>,
    pub metrics: BTreeMap<String, f64>,
}

/// 更新选择器（全部为 false 时仅写 status）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficUpdateDto {
    pub up: bool,
    pub down: bool,
    pub status: bool,
}

/// 连接统计写入请求体；`stats` 缺省表示清除全部分类。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetConnectionStatsRequest {
    pub stats: Option<ConnectionStatsDto>,
    #[serde(default)]
    pub update: TrafficUpdateDto,
    pub tenant: Option<String>,
}

/// 指标快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub set_success: u64,
    pub set_failure: u64,
    pub cleared: u64,
    pub get_found: u64,
    pub get_not_found: u64,
    pub get_failure: u64,
    pub decode_failure: u64,
    pub set_latency_ms_total: u64,
    pub set_latency_ms_count: u64,
    pub get_latency_ms_total: u64,
    pub get_latency_ms_count: u64,
}
