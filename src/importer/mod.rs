// ==========================================
// 集装箱货运看板 - 导入层
// ==========================================
// 职责: 数据源载荷 (JSON / CSV) → 箱级原始记录
// 流程: 文件解析 → 字段映射
// 红线: 不做业务校验,无法识别的内容按空结果处理
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod shipment_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, JsonParser, RawRow, RecordParser, UniversalFileParser};
pub use shipment_importer::ShipmentImporter;
