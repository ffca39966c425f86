// ==========================================
// 集装箱货运看板 - 状态统计引擎
// ==========================================
// 职责: 按状态桶统计订舱汇总数量
// 输入: BookingSummary 序列
// 输出: StatusCounts（优先级顺序,无零值条目）
// ==========================================

use crate::domain::shipment::{BookingSummary, StatusCounts};
use tracing::instrument;

pub struct StatusSummarizer {}

impl StatusSummarizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 统计各状态订舱数
    #[instrument(skip_all, fields(count = summaries.len()))]
    pub fn count(&self, summaries: &[BookingSummary]) -> StatusCounts {
        summaries
            .iter()
            .fold(StatusCounts::new(), |mut counts, summary| {
                counts.increment(&summary.status);
                counts
            })
    }
}

impl Default for StatusSummarizer {
    fn default() -> Self {
        Self::new()
    }
}
