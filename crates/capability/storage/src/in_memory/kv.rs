//! KV 客户端内存实现（用于测试与单机演示）。
//!
//! 除基本读写外提供故障注入：
//! - `set_unavailable`：模拟连接中断
//! - `set_latency`：为每次调用增加固定延迟
//! - `insert_raw`：直接写入原始字节（模拟损坏数据）

use crate::error::KvError;
use crate::traits::{KvClient, KvOp};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

pub struct InMemoryKvClient {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
    latency_ms: AtomicU64,
    pipelines: AtomicU64,
}

impl InMemoryKvClient {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
            latency_ms: AtomicU64::new(0),
            pipelines: AtomicU64::new(0),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_latency(&self, latency: Duration) {
        let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(millis, Ordering::SeqCst);
    }

    /// 直接写入原始字节，绕过编码。
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// 当前所有 key（排序后，用于测试断言）。
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 已执行的管道次数（即写路径的网络往返次数）。
    pub fn pipeline_count(&self) -> u64 {
        self.pipelines.load(Ordering::SeqCst)
    }

    async fn round_trip(&self) -> Result<(), KvError> {
        let latency = self.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(KvError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryKvClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl KvClient for InMemoryKvClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        self.round_trip().await?;
        let entries = self
            .entries
            .read()
            .map_err(|_| KvError::Connection("lock failed".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn mget(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>, KvError> {
        self.round_trip().await?;
        let entries = self
            .entries
            .read()
            .map_err(|_| KvError::Connection("lock failed".to_string()))?;
        Ok(keys.iter().map(|key| entries.get(key).cloned()).collect())
    }

    async fn del(&self, keys: &[String]) -> Result<u64, KvError> {
        self.round_trip().await?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::Connection("lock failed".to_string()))?;
        let mut removed = 0;
        for key in keys {
            if entries.remove(key).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn pipeline(&self, ops: Vec<KvOp>) -> Result<(), KvError> {
        self.round_trip().await?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::Connection("lock failed".to_string()))?;
        for KvOp::Set { key, value } in ops {
            entries.insert(key, value);
        }
        self.pipelines.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
