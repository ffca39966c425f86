// ==========================================
// 集装箱货运看板 - 展示层数据传输对象
// ==========================================
// 职责: 排序后的订舱行 + 已生成的展示文本,供视图层直接渲染
// ==========================================

use crate::domain::types::ShipmentStatus;
use crate::label::date_label::DateLabel;
use serde::{Deserialize, Serialize};

// ==========================================
// DateCell - 日期单元格
// ==========================================
// 日期无法解析时保留原文,由视图层显示占位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateCell {
    Label(DateLabel),
    Invalid { port_code: String, raw: String },
}

impl DateCell {
    pub fn label(&self) -> Option<&DateLabel> {
        match self {
            DateCell::Label(label) => Some(label),
            DateCell::Invalid { .. } => None,
        }
    }
}

// ==========================================
// BookingRow - 看板行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    pub booking_number: String,
    pub status: ShipmentStatus,
    pub status_text: String, // 如 "3 containers delivered"
    pub containers: usize,
    pub origin: DateCell,
    pub destination: DateCell,
    pub manually_updated: bool,
    pub expanded: bool,
}
