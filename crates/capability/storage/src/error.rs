//! 存储层错误类型
//!
//! 两层错误：
//! - `KvError`：后端 KV 客户端返回的原始故障（连接、应答、超时）
//! - `StorageError`：对调用方暴露的领域错误
//!
//! `From<KvError> for StorageError` 是唯一的转换点。

/// 连接统计存储错误。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 三个分类均不存在，或存在的分类无法解码
    #[error("gateway connection stats not found")]
    NotFound,

    /// 后端不可达或返回故障
    #[error("backing store unavailable: {0}")]
    Transport(String),

    /// 编码失败（编解码器正确时不应发生）
    #[error("encode connection stats: {0}")]
    Encode(String),

    /// 调用截止时间或默认操作超时已过
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// key 命名空间非法
    #[error("invalid key namespace: {0}")]
    InvalidNamespace(String),
}

/// 后端 KV 客户端故障。
#[derive(Debug, Clone, thiserror::Error)]
pub enum KvError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("response error: {0}")]
    Response(String),

    #[error("timeout: {0}")]
    Timeout(String),
}

impl From<KvError> for StorageError {
    fn from(err: KvError) -> Self {
        match err {
            KvError::Connection(message) | KvError::Response(message) => Self::Transport(message),
            KvError::Timeout(_) => Self::DeadlineExceeded,
        }
    }
}

impl From<redis::RedisError> for KvError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal()
        {
            Self::Connection(err.to_string())
        } else {
            Self::Response(err.to_string())
        }
    }
}
