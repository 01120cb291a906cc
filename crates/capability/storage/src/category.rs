//! 统计分类与更新选择器。

use std::fmt;
use std::ops::BitOr;

/// 可独立存储的统计分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsCategory {
    Uplink,
    Downlink,
    Status,
}

impl StatsCategory {
    /// 读取路径的固定顺序（与 MGET 的 key 顺序一致）。
    pub const ALL: [StatsCategory; 3] = [Self::Uplink, Self::Downlink, Self::Status];

    /// key 中使用的分类标签。
    pub fn tag(self) -> &'static str {
        match self {
            Self::Uplink => "up",
            Self::Downlink => "down",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for StatsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 更新选择器：说明本次快照由哪类事件产生。
///
/// 只决定写哪些分类，不参与字段过滤。
/// 未选择任何分类时写入 [`TrafficUpdate::DEFAULT_CATEGORY`]。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrafficUpdate {
    pub up: bool,
    pub down: bool,
    pub status: bool,
}

impl TrafficUpdate {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        status: false,
    };
    pub const UP: Self = Self {
        up: true,
        down: false,
        status: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
        status: false,
    };
    pub const STATUS: Self = Self {
        up: false,
        down: false,
        status: true,
    };
    pub const ALL: Self = Self {
        up: true,
        down: true,
        status: true,
    };

    /// 空选择器的回退分类。
    pub const DEFAULT_CATEGORY: StatsCategory = StatsCategory::Status;

    pub fn is_empty(self) -> bool {
        !self.up && !self.down && !self.status
    }

    pub fn contains(self, category: StatsCategory) -> bool {
        match category {
            StatsCategory::Uplink => self.up,
            StatsCategory::Downlink => self.down,
            StatsCategory::Status => self.status,
        }
    }

    /// 实际要写入的分类。
    pub fn categories(self) -> Vec<StatsCategory> {
        if self.is_empty() {
            return vec![Self::DEFAULT_CATEGORY];
        }
        StatsCategory::ALL
            .into_iter()
            .filter(|category| self.contains(*category))
            .collect()
    }
}

impl BitOr for TrafficUpdate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            up: self.up || rhs.up,
            down: self.down || rhs.down,
            status: self.status || rhs.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_falls_back_to_status() {
        assert!(TrafficUpdate::NONE.is_empty());
        assert_eq!(
            TrafficUpdate::NONE.categories(),
            vec![StatsCategory::Status]
        );
        assert_eq!(
            TrafficUpdate::default().categories(),
            vec![StatsCategory::Status]
        );
    }

    #[test]
    fn explicit_update_selects_only_requested() {
        assert_eq!(TrafficUpdate::UP.categories(), vec![StatsCategory::Uplink]);
        assert_eq!(
            (TrafficUpdate::UP | TrafficUpdate::DOWN).categories(),
            vec![StatsCategory::Uplink, StatsCategory::Downlink]
        );
        assert_eq!(
            TrafficUpdate::ALL.categories(),
            StatsCategory::ALL.to_vec()
        );
    }
}
