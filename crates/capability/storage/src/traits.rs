//! 存储接口 Trait 定义
//!
//! - KvClient：后端 KV 客户端能力（get / mget / del / pipeline）
//! - ConnectionStatsStore：对外暴露的连接统计读写接口
//!
//! 设计原则：
//! - 后端客户端以 `Arc<dyn KvClient>` 注入，可替换为内存实现
//! - 所有接口显式接收 CallContext
//! - 使用 async_trait 支持动态分发

use crate::category::TrafficUpdate;
use crate::error::{KvError, StorageError};
use async_trait::async_trait;
use domain::{CallContext, GatewayConnectionStats, GatewayIdentifiers};

/// 管道中的单条命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvOp {
    Set { key: String, value: Vec<u8> },
}

/// 后端 KV 客户端
///
/// 实现必须支持多任务并发调用。
#[async_trait]
pub trait KvClient: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError>;

    /// 按顺序返回每个 key 的值，缺失为 `None`。
    async fn mget(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>, KvError>;

    /// 返回实际删除的 key 数量，缺失的 key 不算错误。
    async fn del(&self, keys: &[String]) -> Result<u64, KvError>;

    /// 一次往返发送多条独立命令，不保证原子性。
    async fn pipeline(&self, ops: Vec<KvOp>) -> Result<(), KvError>;
}

/// 网关连接统计存储接口
#[async_trait]
pub trait ConnectionStatsStore: Send + Sync {
    /// 写入或清除网关连接统计。
    ///
    /// `stats` 为 `None` 时删除全部三个分类；否则按 `update` 写入对应分类。
    async fn set(
        &self,
        ctx: &CallContext,
        ids: &GatewayIdentifiers,
        stats: Option<&GatewayConnectionStats>,
        update: TrafficUpdate,
    ) -> Result<(), StorageError>;

    /// 读取并合并三个分类。
    async fn get(
        &self,
        ctx: &CallContext,
        ids: &GatewayIdentifiers,
    ) -> Result<GatewayConnectionStats, StorageError>;

    /// 删除全部三个分类。
    async fn clear(&self, ctx: &CallContext, ids: &GatewayIdentifiers) -> Result<(), StorageError> {
        self.set(ctx, ids, None, TrafficUpdate::NONE).await
    }
}
