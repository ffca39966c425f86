// ==========================================
// 集装箱货运看板 - 订舱排序引擎
// ==========================================
// 职责: 按选定列与方向对订舱汇总排序
// 输入: BookingSummary 列表 + SortSpec
// 输出: 排序后的 BookingSummary 列表
// ==========================================
// 红线: 稳定排序,同值保持原相对顺序
// 红线: 目的港升序为两段式规则 (未交付在前, 已交付按到港日倒序)
// ==========================================

mod core;


pub use self::core::ShipmentSorter;
