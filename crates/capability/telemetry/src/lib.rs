//! 追踪、请求 ID 与连接统计指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
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

/// 连接统计存储指标。
pub struct TelemetryMetrics {
    set_success: AtomicU64,
    set_failure: AtomicU64,
    cleared: AtomicU64,
    get_found: AtomicU64,
    get_not_found: AtomicU64,
    get_failure: AtomicU64,
    decode_failure: AtomicU64,
    set_latency_ms_total: AtomicU64,
    set_latency_ms_count: AtomicU64,
    get_latency_ms_total: AtomicU64,
    get_latency_ms_count: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            set_success: AtomicU64::new(0),
            set_failure: AtomicU64::new(0),
            cleared: AtomicU64::new(0),
            get_found: AtomicU64::new(0),
            get_not_found: AtomicU64::new(0),
            get_failure: AtomicU64::new(0),
            decode_failure: AtomicU64::new(0),
            set_latency_ms_total: AtomicU64::new(0),
            set_latency_ms_count: AtomicU64::new(0),
            get_latency_ms_total: AtomicU64::new(0),
            get_latency_ms_count: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            set_success: self.set_success.load(Ordering::Relaxed),
            set_failure: self.set_failure.load(Ordering::Relaxed),
            cleared: self.cleared.load(Ordering::Relaxed),
            get_found: self.get_found.load(Ordering::Relaxed),
            get_not_found: self.get_not_found.load(Ordering::Relaxed),
            get_failure: self.get_failure.load(Ordering::Relaxed),
            decode_failure: self.decode_failure.load(Ordering::Relaxed),
            set_latency_ms_total: self.set_latency_ms_total.load(Ordering::Relaxed),
            set_latency_ms_count: self.set_latency_ms_count.load(Ordering::Relaxed),
            get_latency_ms_total: self.get_latency_ms_total.load(Ordering::Relaxed),
            get_latency_ms_count: self.get_latency_ms_count.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录写入成功次数。
pub fn record_set_success() {
    metrics().set_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录写入失败次数。
pub fn record_set_failure() {
    metrics().set_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录清除（删除全部分类）次数。
pub fn record_cleared() {
    metrics().cleared.fetch_add(1, Ordering::Relaxed);
}

/// 记录读取命中次数。
pub fn record_get_found() {
    metrics().get_found.fetch_add(1, Ordering::Relaxed);
}

/// 记录读取未找到次数（含解码失败）。
pub fn record_get_not_found() {
    metrics().get_not_found.fetch_add(1, Ordering::Relaxed);
}

/// 记录读取失败次数（后端故障、超时）。
pub fn record_get_failure() {
    metrics().get_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录存量数据解码失败次数。
pub fn record_decode_failure() {
    metrics().decode_failure.fetch_add(1, Ordering::Relaxed);
}

/// 记录写入延迟（毫秒）。
pub fn record_set_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .set_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics.set_latency_ms_count.fetch_add(1, Ordering::Relaxed);
}

/// 记录读取延迟（毫秒）。
pub fn record_get_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .get_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics.get_latency_ms_count.fetch_add(1, Ordering::Relaxed);
}
