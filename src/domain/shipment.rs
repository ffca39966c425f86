// ==========================================
// 集装箱货运看板 - 货运领域模型
// ==========================================
// RawShipmentRecord: 外部数据源输入（一箱一行）
// BookingSummary / BookingDetail: 按订舱号聚合的派生视图
// ==========================================

use crate::domain::types::ShipmentStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// RawShipmentRecord - 原始箱级记录
// ==========================================
// 字段名与数据源保持一致 (Booking / Container / PO / ...)
// 生命周期: 只读输入,核心逻辑不修改
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawShipmentRecord {
    #[serde(rename = "Booking", default)]
    pub booking_number: String, // 订舱号（分组键）
    #[serde(rename = "Container", default)]
    pub container_number: String, // 箱号
    #[serde(rename = "PO", default)]
    pub po_number: String, // 采购订单号
    #[serde(rename = "Status", default)]
    pub status: ShipmentStatus,
    #[serde(rename = "POL", default)]
    pub origin_port: String, // 起运港代码
    #[serde(rename = "POD", default)]
    pub destination_port: String, // 目的港代码
    #[serde(rename = "ETD", default)]
    pub etd: String, // 预计离港日期 DD/MM/YY[YY]
    #[serde(rename = "ETA", default)]
    pub eta: String, // 预计到港日期 DD/MM/YY[YY]
    #[serde(rename = "Customer", default)]
    pub customer_code: String,
    #[serde(rename = "DeliveryAddress", default)]
    pub delivery_address: String,
    #[serde(
        rename = "ManualUpdate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_update: Option<String>, // 人工更新标记
}

impl RawShipmentRecord {
    /// 是否带人工更新标记（空白/否定值视为无标记）
    pub fn is_manually_updated(&self) -> bool {
        match self.manual_update.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => !matches!(
                v.to_lowercase().as_str(),
                "0" | "false" | "n" | "no"
            ),
        }
    }
}

// ==========================================
// PortDate - 港口 + 日期
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDate {
    pub port: String, // 港口代码
    pub date: String, // 原始日期文本
}

// ==========================================
// BookingSummary - 订舱汇总
// ==========================================
// 每个订舱号一条; 状态/港口/日期取组内首条记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub booking_number: String,
    pub status: ShipmentStatus,
    pub containers: usize, // 组内记录数（不按箱号去重）, 恒 >= 1
    pub origin: PortDate,
    pub destination: PortDate,
    pub manually_updated: bool, // 组内任一记录带人工更新标记
}

// ==========================================
// BookingDetail - 订舱展开明细
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub containers: Vec<String>, // 去重箱号,首次出现顺序
    pub po_number: String,
    pub delivery_address: String,
}

// ==========================================
// StatusConflict - 组内状态不一致
// ==========================================
// 首条状态生效,此结构仅用于上报
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConflict {
    pub booking_number: String,
    pub container_number: String,
    pub kept: ShipmentStatus,
    pub conflicting: ShipmentStatus,
}

// ==========================================
// StatusCounts - 状态计数
// ==========================================
// 迭代顺序 = 状态优先级; 不存在零值条目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCounts {
    counts: BTreeMap<ShipmentStatus, usize>,
}

impl StatusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, status: &ShipmentStatus) {
        *self.counts.entry(status.clone()).or_insert(0) += 1;
    }

    /// 指定状态计数（不存在返回 None,而不是 0）
    pub fn get(&self, status: &ShipmentStatus) -> Option<usize> {
        self.counts.get(status).copied()
    }

    /// 按优先级顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&ShipmentStatus, usize)> {
        self.counts.iter().map(|(status, count)| (status, *count))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
