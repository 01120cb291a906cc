//! 网关连接统计注册表
//!
//! 每个网关的统计按分类存成三条独立记录：
//! - 写路径：`None` 一次 DEL 删除全部分类；否则编码一次，按选择器经管道批量 SET
//! - 读路径：一次 MGET 取全部分类，逐个解码并只拷贝该分类的字段
//!
//! 任何存在的分类解码失败都按未找到处理，不返回部分结果。

use crate::category::{StatsCategory, TrafficUpdate};
use crate::codec;
use crate::error::{KvError, StorageError};
use crate::keys::StatsKeys;
use crate::traits::{ConnectionStatsStore, KvClient, KvOp};
use domain::{CallContext, GatewayConnectionStats, GatewayIdentifiers};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, debug, warn};

pub struct ConnectionStatsRegistry {
    client: Arc<dyn KvClient>,
    keys: StatsKeys,
    op_timeout: Option<Duration>,
}

impl ConnectionStatsRegistry {
    pub fn new(client: Arc<dyn KvClient>, keys: StatsKeys) -> Self {
        Self {
            client,
            keys,
            op_timeout: None,
        }
    }

    /// 调用上下文未带截止时间时使用的默认超时。
    pub fn with_op_timeout(mut self, op_timeout: Option<Duration>) -> Self {
        self.op_timeout = op_timeout.filter(|timeout| !timeout.is_zero());
        self
    }

    pub fn keys(&self) -> &StatsKeys {
        &self.keys
    }

    async fn run<T, F>(&self, ctx: &CallContext, call: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, KvError>>,
    {
        if ctx.is_expired() {
            return Err(StorageError::DeadlineExceeded);
        }
        let deadline = ctx
            .deadline
            .or_else(|| {
                self.op_timeout
                    .and_then(|timeout| Instant::now().checked_add(timeout))
            });
        match deadline {
            Some(deadline) => {
                let deadline = tokio::time::Instant::from_std(deadline);
                match tokio::time::timeout_at(deadline, call).await {
                    Ok(result) => result.map_err(StorageError::from),
                    Err(_) => Err(StorageError::DeadlineExceeded),
                }
            }
            None => call.await.map_err(StorageError::from),
        }
    }

    async fn clear_all(&self, ctx: &CallContext, uid: &str) -> Result<(), StorageError> {
        let keys = self.keys.all(uid);
        let removed = self.run(ctx, self.client.del(&keys)).await?;
        debug!(uid = %uid, removed, "connection stats cleared");
        gs_telemetry::record_cleared();
        Ok(())
    }

    async fn write(
        &self,
        ctx: &CallContext,
        uid: &str,
        stats: &GatewayConnectionStats,
        update: TrafficUpdate,
    ) -> Result<(), StorageError> {
        let payload =
            codec::encode(stats).map_err(|err| StorageError::Encode(err.to_string()))?;
        let ops: Vec<KvOp> = update
            .categories()
            .into_iter()
            .map(|category| KvOp::Set {
                key: self.keys.key(category, uid),
                value: payload.clone(),
            })
            .collect();
        let written = ops.len();
        self.run(ctx, self.client.pipeline(ops)).await?;
        debug!(uid = %uid, written, "connection stats written");
        Ok(())
    }

    async fn read(
        &self,
        ctx: &CallContext,
        uid: &str,
    ) -> Result<GatewayConnectionStats, StorageError> {
        let keys = self.keys.all(uid);
        let values = self.run(ctx, self.client.mget(&keys)).await?;
        if values.len() != StatsCategory::ALL.len() {
            return Err(StorageError::Transport(format!(
                "unexpected MGET reply length {}",
                values.len()
            )));
        }
        if values.iter().all(Option::is_none) {
            return Err(StorageError::NotFound);
        }

        let mut result = GatewayConnectionStats::default();
        for (category, value) in StatsCategory::ALL.into_iter().zip(values) {
            let Some(data) = value else { continue };
            let decoded = match codec::decode(&data) {
                Ok(decoded) => decoded,
                Err(err) => {
                    warn!(uid = %uid, category = %category, error = %err, "stored connection stats undecodable");
                    gs_telemetry::record_decode_failure();
                    return Err(StorageError::NotFound);
                }
            };
            match category {
                StatsCategory::Uplink => result.uplink = decoded.uplink,
                StatsCategory::Downlink => result.downlink = decoded.downlink,
                StatsCategory::Status => result.status = decoded.status,
            }
        }
        Ok(result)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[async_trait::async_trait]
impl ConnectionStatsStore for ConnectionStatsRegistry {
    async fn set(
        &self,
        ctx: &CallContext,
        ids: &GatewayIdentifiers,
        stats: Option<&GatewayConnectionStats>,
        update: TrafficUpdate,
    ) -> Result<(), StorageError> {
        let uid = ids.unique_id();
        let span = tracing::debug_span!(
            "set gateway connection stats",
            request_id = %ctx.request_id,
            uid = %uid
        );
        let started = Instant::now();
        let result = async {
            match stats {
                None => self.clear_all(ctx, &uid).await,
                Some(stats) => self.write(ctx, &uid, stats, update).await,
            }
        }
        .instrument(span)
        .await;
        gs_telemetry::record_set_latency_ms(elapsed_ms(started));
        match &result {
            Ok(()) => gs_telemetry::record_set_success(),
            Err(err) => {
                warn!(uid = %uid, error = %err, "set gateway connection stats failed");
                gs_telemetry::record_set_failure();
            }
        }
        result
    }

    async fn get(
        &self,
        ctx: &CallContext,
        ids: &GatewayIdentifiers,
    ) -> Result<GatewayConnectionStats, StorageError> {
        let uid = ids.unique_id();
        let span = tracing::debug_span!(
            "get gateway connection stats",
            request_id = %ctx.request_id,
            uid = %uid
        );
        let started = Instant::now();
        let result = self.read(ctx, &uid).instrument(span).await;
        gs_telemetry::record_get_latency_ms(elapsed_ms(started));
        match &result {
            Ok(_) => gs_telemetry::record_get_found(),
            Err(StorageError::NotFound) => gs_telemetry::record_get_not_found(),
            Err(err) => {
                warn!(uid = %uid, error = %err, "get gateway connection stats failed");
                gs_telemetry::record_get_failure();
            }
        }
        result
    }
}
