// ==========================================
// 集装箱货运看板 - API 层
// ==========================================
// 职责: 提供看板视图模型,供界面层调用
// ==========================================

pub mod board_api;
pub mod dto;

// 重导出核心类型
pub use board_api::ShipmentBoard;
pub use dto::{BookingRow, DateCell};
