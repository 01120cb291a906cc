//! 应用运行配置加载。

use std::env;
use std::time::Duration;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 连接统计后端类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsBackend {
    Redis,
    Memory,
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub redis_url: String,
    pub redis_namespace: String,
    pub redis_op_timeout: Option<Duration>,
    pub stats_backend: StatsBackend,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("GS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let redis_url =
            env::var("GS_REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let redis_namespace = read_optional("GS_REDIS_NAMESPACE").unwrap_or_else(|| "gs".to_string());
        let redis_op_timeout = read_optional_u64("GS_REDIS_OP_TIMEOUT_MS")?
            .filter(|value| *value > 0)
            .map(Duration::from_millis);
        let stats_backend = read_backend("GS_STATS_BACKEND")?;

        Ok(Self {
            http_addr,
            redis_url,
            redis_namespace,
            redis_op_timeout,
            stats_backend,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_optional_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key.to_string(), value)),
        Err(_) => Ok(None),
    }
}

fn read_backend(key: &str) -> Result<StatsBackend, ConfigError> {
    let Some(value) = read_optional(key) else {
        return Ok(StatsBackend::Redis);
    };
    match value.to_ascii_lowercase().as_str() {
        "redis" => Ok(StatsBackend::Redis),
        "memory" => Ok(StatsBackend::Memory),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
