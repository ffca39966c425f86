// ==========================================
// 集装箱货运看板 - 状态文本
// ==========================================
// 格式: "{箱数} container{s} {状态小写}"
// ==========================================

use crate::domain::types::ShipmentStatus;

pub struct StatusLabelFormatter {}

impl StatusLabelFormatter {
    pub fn new() -> Self {
        Self {}
    }

    /// 箱数 + 状态文本（箱数 > 1 时使用复数）
    pub fn format(&self, status: &ShipmentStatus, count: usize) -> String {
        let plural = if count > 1 { "s" } else { "" };
        format!(
            "{} container{} {}",
            count,
            plural,
            status.label().to_lowercase()
        )
    }
}

impl Default for StatusLabelFormatter {
    fn default() -> Self {
        Self::new()
    }
}
