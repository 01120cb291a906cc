//! Redis 后端客户端实现

use crate::error::KvError;
use crate::traits::{KvClient, KvOp};
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

/// 基于多路复用连接的 Redis 客户端
///
/// 连接可廉价克隆，多个任务共享同一条底层连接。
#[derive(Clone)]
pub struct RedisKvClient {
    connection: MultiplexedConnection,
}

impl RedisKvClient {
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }

    pub async fn connect(redis_url: &str) -> Result<Self, KvError> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_tokio_connection().await?;
        Ok(Self::new(connection))
    }
}

#[async_trait::async_trait]
impl KvClient for RedisKvClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KvError> {
        let mut connection = self.connection.clone();
        let data: Option<Vec<u8>> = connection.get(key).await?;
        Ok(data)
    }

    async fn mget(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>, KvError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut connection = self.connection.clone();
        let values: Vec<Option<Vec<u8>>> = connection.mget(keys).await?;
        Ok(values)
    }

    async fn del(&self, keys: &[String]) -> Result<u64, KvError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut connection = self.connection.clone();
        let removed: u64 = connection.del(keys).await?;
        Ok(removed)
    }

    async fn pipeline(&self, ops: Vec<KvOp>) -> Result<(), KvError> {
        if ops.is_empty() {
            return Ok(());
        }
        let mut pipe = redis::pipe();
        for KvOp::Set { key, value } in ops {
            pipe.set(key, value).ignore();
        }
        let mut connection = self.connection.clone();
        pipe.query_async::<_, ()>(&mut connection).await?;
        Ok(())
    }
}
