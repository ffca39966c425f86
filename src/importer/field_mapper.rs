// ==========================================
// 集装箱货运看板 - 字段映射器实现
// ==========================================
// 职责: 源字段 → RawShipmentRecord
// 缺失字段按空文本处理,不做校验
// ==========================================

use crate::domain::shipment::RawShipmentRecord;
use crate::domain::types::ShipmentStatus;
use crate::importer::file_parser::RawRow;

pub struct FieldMapper;

impl FieldMapper {
    /// 原始行 → 箱级记录
    pub fn map_to_raw_record(&self, row: &RawRow) -> RawShipmentRecord {
        RawShipmentRecord {
            booking_number: self.get_string(row, "Booking"),
            container_number: self.get_string(row, "Container"),
            po_number: self.get_string(row, "PO"),
            status: ShipmentStatus::from_label(&self.get_string(row, "Status")),
            origin_port: self.get_string(row, "POL"),
            destination_port: self.get_string(row, "POD"),
            etd: self.get_string(row, "ETD"),
            eta: self.get_string(row, "ETA"),
            customer_code: self.get_string(row, "Customer"),
            delivery_address: self.get_string(row, "DeliveryAddress"),
            manual_update: self.get_optional(row, "ManualUpdate"),
        }
    }

    /// 提取字段,支持多个可能的列名（别名）; 缺失返回空文本
    fn get_string(&self, row: &RawRow, key: &str) -> String {
        self.get_optional(row, key).unwrap_or_default()
    }

    fn get_optional(&self, row: &RawRow, key: &str) -> Option<String> {
        // 定义列名别名映射
        let aliases: &[&str] = match key {
            "Booking" => &["Booking", "BookingNumber", "Booking No"],
            "Container" => &["Container", "ContainerNumber", "Container No"],
            "PO" => &["PO", "PONumber", "PO Number"],
            "DeliveryAddress" => &["DeliveryAddress", "Delivery Address"],
            "ManualUpdate" => &["ManualUpdate", "Manual Update"],
            _ => std::slice::from_ref(&key),
        };

        // 尝试所有可能的列名
        aliases
            .iter()
            .filter_map(|alias| row.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}
