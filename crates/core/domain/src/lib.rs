pub mod stats;

pub use stats::{
    DownlinkStats, GatewayConnectionStats, GatewayStatus, RoundTripTimes, StatusStats,
    UplinkStats,
};

use std::borrow::Cow;
use std::time::{Duration, Instant};

/// 网关标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GatewayIdentifiers {
    pub gateway_id: String,
    pub tenant_id: Option<String>,
}

impl GatewayIdentifiers {
    /// 构造不带租户的网关标识。
    pub fn new(gateway_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            tenant_id: None,
        }
    }

    /// 构造带租户的网关标识。
    pub fn with_tenant(gateway_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            tenant_id: Some(tenant_id.into()),
        }
    }

    /// 派生集群内稳定唯一的网关 ID。
    ///
    /// 无租户时即 `gateway_id`；有租户时为 `gateway_id@tenant_id`。
    /// 空租户视同无租户。
    ///
    /// 两部分中的 `%` 与 `@` 会被转义为 `%25` / `%40`，
    /// 分隔符 `@` 因此只出现一次，不同的标识不会派生出相同的 ID。
    pub fn unique_id(&self) -> String {
        let gateway_id = escape_id_part(&self.gateway_id);
        match self.tenant_id.as_deref() {
            Some(tenant) if !tenant.is_empty() => {
                format!("{}@{}", gateway_id, escape_id_part(tenant))
            }
            _ => gateway_id.into_owned(),
        }
    }
}

fn escape_id_part(value: &str) -> Cow<'_, str> {
    if value.contains(['%', '@']) {
        Cow::Owned(value.replace('%', "%25").replace('@', "%40"))
    } else {
        Cow::Borrowed(value)
    }
}

/// 调用上下文：请求标识与可选截止时间。
#[derive(Debug, Clone)]
pub struct CallContext {
    pub request_id: String,
    pub deadline: Option<Instant>,
}

impl CallContext {
    /// 无截止时间的上下文。
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: None,
        }
    }

    /// 从当前时刻起 `timeout` 后截止；超出时钟可表示范围时视为不设截止。
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    /// 指定绝对截止时间。
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// 截止时间是否已过。
    pub fn is_expired(&self) -> bool {
        self.deadline
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}

impl Default for CallContext {
    /// 空上下文（仅用于测试或后台任务）。
    fn default() -> Self {
        Self::new("")
    }
}
