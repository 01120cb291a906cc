//! 连接统计 key 派生
//!
//! key 布局：`<namespace>:<category>:uid:<unique_id>`

use crate::category::StatsCategory;
use crate::error::StorageError;

/// key 派生器，进程启动时按配置的命名空间构造一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsKeys {
    namespace: String,
}

impl StatsKeys {
    /// 构造派生器；命名空间首尾的 `:` 会被去掉，去掉后不能为空。
    pub fn new(namespace: &str) -> Result<Self, StorageError> {
        let trimmed = namespace.trim().trim_matches(':');
        if trimmed.is_empty() {
            return Err(StorageError::InvalidNamespace(namespace.to_string()));
        }
        Ok(Self {
            namespace: trimmed.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self, category: StatsCategory, unique_id: &str) -> String {
        format!("{}:{}:uid:{}", self.namespace, category.tag(), unique_id)
    }

    /// 三个分类的 key，顺序同 [`StatsCategory::ALL`]。
    pub fn all(&self, unique_id: &str) -> Vec<String> {
        StatsCategory::ALL
            .into_iter()
            .map(|category| self.key(category, unique_id))
            .collect()
    }
}
