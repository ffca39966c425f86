// ==========================================
// 集装箱货运看板 - 引擎层
// ==========================================
// 职责: 订舱聚合、状态计数、看板排序
// 红线: 引擎不修改输入记录,不生成展示文本
// ==========================================

pub mod aggregator;
pub mod sorter;
pub mod status_summary;

// 重导出核心引擎
pub use aggregator::{AggregationResult, ShipmentAggregator};
pub use sorter::ShipmentSorter;
pub use status_summary::StatusSummarizer;
