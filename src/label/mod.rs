// ==========================================
// 集装箱货运看板 - 展示文本层
// ==========================================
// 职责: 港口名称解析、到离港日期标签、状态文本
// 红线: 只输出结构化值与纯文本,不拼接任何标记语言
// ==========================================

pub mod date_label;
pub mod error;
pub mod port;
pub mod status_label;

// 重导出
pub use date_label::{DateFormatter, DateLabel, EventVerb};
pub use error::LabelError;
pub use port::PortNameResolver;
pub use status_label::StatusLabelFormatter;
