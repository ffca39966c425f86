// ==========================================
// 集装箱货运看板 - 领域类型定义
// ==========================================
// 红线: 货运状态为封闭枚举,顺序即优先级
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// 货运状态 (Shipment Status)
// ==========================================
// 顺序: NotReadyToShip < ReadyToShip < OnBoardVessel < ArrivedAtPod < InTransit < Delivered
// 枚举外的值保留原文 (Unknown),排在所有已知状态之后
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    NotReadyToShip, // 未备妥
    ReadyToShip,    // 待装运
    OnBoardVessel,  // 已装船
    ArrivedAtPod,   // 已抵卸货港
    InTransit,      // 转运中
    Delivered,      // 已交付
    Unknown(String),
}

impl ShipmentStatus {
    /// 状态优先级顺序（排序与分组统计共用同一份常量）
    pub const PRIORITY_ORDER: [ShipmentStatus; 6] = [
        ShipmentStatus::NotReadyToShip,
        ShipmentStatus::ReadyToShip,
        ShipmentStatus::OnBoardVessel,
        ShipmentStatus::ArrivedAtPod,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
    ];

    /// 从源系统文本解析状态
    ///
    /// 精确匹配（忽略首尾空白）；未知文本原样保留为 `Unknown`
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "Not ready to ship" => ShipmentStatus::NotReadyToShip,
            "Ready to ship" => ShipmentStatus::ReadyToShip,
            "On board vessel" => ShipmentStatus::OnBoardVessel,
            "Arrived at POD" => ShipmentStatus::ArrivedAtPod,
            "In transit" => ShipmentStatus::InTransit,
            "Delivered" => ShipmentStatus::Delivered,
            _ => ShipmentStatus::Unknown(s.to_string()),
        }
    }

    /// 源系统文本
    pub fn label(&self) -> &str {
        match self {
            ShipmentStatus::NotReadyToShip => "Not ready to ship",
            ShipmentStatus::ReadyToShip => "Ready to ship",
            ShipmentStatus::OnBoardVessel => "On board vessel",
            ShipmentStatus::ArrivedAtPod => "Arrived at POD",
            ShipmentStatus::InTransit => "In transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Unknown(raw) => raw,
        }
    }

    /// 优先级下标 (0..=5)；未知状态返回 6
    pub fn priority(&self) -> usize {
        Self::PRIORITY_ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or(Self::PRIORITY_ORDER.len())
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ShipmentStatus::Unknown(_))
    }
}

impl Default for ShipmentStatus {
    fn default() -> Self {
        ShipmentStatus::Unknown(String::new())
    }
}

impl From<String> for ShipmentStatus {
    fn from(s: String) -> Self {
        ShipmentStatus::from_label(&s)
    }
}

impl From<&str> for ShipmentStatus {
    fn from(s: &str) -> Self {
        ShipmentStatus::from_label(s)
    }
}

impl From<ShipmentStatus> for String {
    fn from(status: ShipmentStatus) -> Self {
        match status {
            ShipmentStatus::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 排序列 (Sort Column)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Booking,     // 订舱号
    Status,      // 状态
    Origin,      // 起运港 (ETD)
    Destination, // 目的港 (ETA)
}

impl SortColumn {
    /// 从字符串解析排序列（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "booking" => Some(SortColumn::Booking),
            "status" => Some(SortColumn::Status),
            "origin" => Some(SortColumn::Origin),
            "destination" => Some(SortColumn::Destination),
            _ => None,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Booking => write!(f, "booking"),
            SortColumn::Status => write!(f, "status"),
            SortColumn::Origin => write!(f, "origin"),
            SortColumn::Destination => write!(f, "destination"),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// 从字符串解析排序方向（支持 asc/desc 缩写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// 按方向调整比较结果 (升序 +1 / 降序 -1)
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

// ==========================================
// 排序规格 (Sort Spec)
// ==========================================
// 默认: 目的港升序（未交付在前）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// 点击列头后的排序规格
    ///
    /// - 同一列: 方向翻转
    /// - 不同列: 从升序开始
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.reversed())
        } else {
            Self::new(column, SortDirection::Ascending)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortColumn::Destination, SortDirection::Ascending)
    }
}
