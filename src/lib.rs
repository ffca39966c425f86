// ==========================================
// 集装箱货运看板 - 核心库
// ==========================================
// 功能: 箱级货运记录 → 订舱汇总、状态计数、排序看板
// 系统定位: 只读展示 (数据由外部数据源提供)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 聚合与排序
pub mod engine;

// 展示文本层 - 港口名称与日期标签
pub mod label;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 看板配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 看板视图模型
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ShipmentStatus, SortColumn, SortDirection, SortSpec};

// 领域实体
pub use domain::{
    BookingDetail, BookingSummary, PortDate, RawShipmentRecord, StatusConflict, StatusCounts,
};

// 引擎
pub use engine::{AggregationResult, ShipmentAggregator, ShipmentSorter, StatusSummarizer};

// 展示文本
pub use label::{DateFormatter, DateLabel, LabelError, PortNameResolver, StatusLabelFormatter};

// API
pub use api::{BookingRow, DateCell, ShipmentBoard};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Shipment Board";
