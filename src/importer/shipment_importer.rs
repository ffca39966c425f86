// ==========================================
// 集装箱货运看板 - 箱级记录导入器
// ==========================================

use crate::domain::shipment::RawShipmentRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{JsonParser, RawRow, UniversalFileParser};
use std::path::Path;
use tracing::{info, instrument};

pub struct ShipmentImporter {
    parser: UniversalFileParser,
    mapper: FieldMapper,
}

impl ShipmentImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
        }
    }

    /// 从文件导入（按扩展名选择解析器）
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawShipmentRecord>> {
        let rows = self.parser.parse(file_path.as_ref())?;
        let records = self.map_rows(&rows);
        info!(count = records.len(), "箱级记录导入完成");
        Ok(records)
    }

    /// 从数据源 JSON 载荷导入
    pub fn import_json_str(&self, raw: &str) -> ImportResult<Vec<RawShipmentRecord>> {
        let rows = JsonParser.parse_str(raw)?;
        Ok(self.map_rows(&rows))
    }

    fn map_rows(&self, rows: &[RawRow]) -> Vec<RawShipmentRecord> {
        rows.iter()
            .map(|row| self.mapper.map_to_raw_record(row))
            .collect()
    }
}

impl Default for ShipmentImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ShipmentStatus;

    #[test]
    fn test_import_json_payload() {
        let importer = ShipmentImporter::new();
        let records = importer
            .import_json_str(
                r#"[
                    {"Booking": "B1", "Container": "C1", "Status": "Delivered", "ETA": "05/01/24"},
                    {"Booking": "B1", "Container": "C2", "Status": "Delivered", "ETA": "05/01/24"}
                ]"#,
            )
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].container_number, "C2");
        assert_eq!(records[0].status, ShipmentStatus::Delivered);
    }

    #[test]
    fn test_import_non_array_payload_is_empty() {
        let importer = ShipmentImporter::new();
        assert!(importer.import_json_str("{}").unwrap().is_empty());
    }
}
