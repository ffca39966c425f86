// ==========================================
// 集装箱货运看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含引擎逻辑,不含展示逻辑
// ==========================================

pub mod date;
pub mod shipment;
pub mod types;

// 重导出核心类型
pub use date::{parse_calendar_date, DateParseError, ShipmentDate};
pub use shipment::{
    BookingDetail, BookingSummary, PortDate, RawShipmentRecord, StatusConflict, StatusCounts,
};
pub use types::{ShipmentStatus, SortColumn, SortDirection, SortSpec};
