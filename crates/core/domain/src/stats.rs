//! 网关连接统计模型。
//!
//! 一份快照按三个可独立更新的分类拆分：
//! - `uplink`：上行流量（最近上行时间、上行计数、往返时延）
//! - `downlink`：下行流量（最近下行时间、下行计数）
//! - `status`：连接与状态上报（连接时间、协议、最近状态）
//!
//! 所有时间戳均为 Unix 毫秒；`None` 表示从未观测到。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 网关连接统计快照。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConnectionStats {
    #[serde(default)]
    pub uplink: UplinkStats,
    #[serde(default)]
    pub downlink: DownlinkStats,
    #[serde(default)]
    pub status: StatusStats,
}

/// 上行分类。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UplinkStats {
    pub last_uplink_received_at_ms: Option<i64>,
    #[serde(default)]
    pub uplink_count: u64,
    pub round_trip_times: Option<RoundTripTimes>,
}

/// 往返时延样本统计（毫秒）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundTripTimes {
    pub min_ms: u64,
    pub max_ms: u64,
    pub median_ms: u64,
    pub count: u32,
}

/// 下行分类。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownlinkStats {
    pub last_downlink_received_at_ms: Option<i64>,
    #[serde(default)]
    pub downlink_count: u64,
}

/// 状态分类。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusStats {
    pub connected_at_ms: Option<i64>,
    #[serde(default)]
    pub protocol: String,
    pub last_status: Option<GatewayStatus>,
    pub last_status_received_at_ms: Option<i64>,
}

/// 网关上报的状态报文。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayStatus {
    pub time_ms: i64,
    pub boot_time_ms: Option<i64>,
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
    #[serde(default)]
    pub ip: Vec<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl GatewayConnectionStats {
    /// 是否三个分类都为默认值。
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
