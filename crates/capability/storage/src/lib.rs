//! # Gateway Server 连接统计存储
//!
//! 在集群共享的 KV 后端（Redis）中记录并提供每个网关的连接统计，
//! 任何服务进程都可以读取网关当前健康状况，而无需持有进程内状态。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：后端客户端 `KvClient` 与对外接口 `ConnectionStatsStore`
//! 2. **分类层** (`category.rs`)：三个统计分类与更新选择器 `TrafficUpdate`
//! 3. **key 派生层** (`keys.rs`)：`<namespace>:<category>:uid:<unique_id>`
//! 4. **编解码层** (`codec.rs`)：JSON 编解码
//! 5. **错误处理层** (`error.rs`)：后端故障到领域错误的统一转换
//! 6. **注册表** (`registry.rs`)：写路径与读路径
//! 7. **后端实现**：
//!    - `redis`：生产环境，基于多路复用连接
//!    - `in_memory/`：测试与单机演示，带故障注入
//!
//! ## 核心语义
//!
//! - **分类独立存储**：uplink / downlink / status 各占一个 key，缺失表示从未观测
//! - **部分更新**：选择器决定写哪些分类；空选择器只写 status
//! - **全量删除**：`stats` 为 `None` 时一次删除全部三个分类
//! - **读合并**：只拷贝存在分类的字段；全部缺失返回 `NotFound`
//! - **失败即关闭**：任一存在分类解码失败，整次读取返回 `NotFound`
//! - **无重试**：后端错误原样转换后返回，重试由调用方决定
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use domain::{CallContext, GatewayConnectionStats, GatewayIdentifiers};
//! use gs_storage::{ConnectionStatsRegistry, ConnectionStatsStore, RedisKvClient, StatsKeys, TrafficUpdate};
//! use std::sync::Arc;
//!
//! let client = Arc::new(RedisKvClient::connect("redis://127.0.0.1:6379").await?);
//! let registry = ConnectionStatsRegistry::new(client, StatsKeys::new("gs")?);
//!
//! let ctx = CallContext::new("req-1");
//! let ids = GatewayIdentifiers::new("gateway-1");
//! let mut stats = GatewayConnectionStats::default();
//! stats.uplink.uplink_count = 5;
//! registry.set(&ctx, &ids, Some(&stats), TrafficUpdate::UP).await?;
//! let merged = registry.get(&ctx, &ids).await?;
//! ```

pub mod category;
pub mod codec;
pub mod error;
pub mod in_memory;
pub mod keys;
pub mod redis;
pub mod registry;
pub mod traits;

pub use category::*;
pub use error::*;
pub use keys::StatsKeys;
pub use registry::ConnectionStatsRegistry;
pub use traits::*;

pub use crate::redis::RedisKvClient;
pub use in_memory::InMemoryKvClient;
