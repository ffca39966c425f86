// ==========================================
// 集装箱货运看板 - 订舱聚合引擎
// ==========================================
// 职责: 箱级原始记录 → 订舱汇总 + 展开明细索引
// 输入: 原始记录序列 + 可选客户代码过滤
// 输出: AggregationResult
// ==========================================
// 红线: 分组稳定且无损 (首次出现顺序, 记录数守恒)
// 注: 明细索引基于未过滤的全量记录构建,与汇总的过滤口径不同
// ==========================================

use crate::domain::shipment::{
    BookingDetail, BookingSummary, PortDate, RawShipmentRecord, StatusConflict,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, warn};

// ==========================================
// AggregationResult - 聚合结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    /// 订舱汇总（首次出现顺序）
    pub summaries: Vec<BookingSummary>,
    /// 订舱号 → 展开明细（全量记录,不受客户过滤影响）
    pub details: HashMap<String, BookingDetail>,
    /// 组内状态不一致的记录（首条状态生效）
    pub status_conflicts: Vec<StatusConflict>,
}

// ==========================================
// ShipmentAggregator - 订舱聚合引擎
// ==========================================
pub struct ShipmentAggregator {
    // 无状态引擎,不需要注入依赖
}

impl ShipmentAggregator {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合原始记录
    ///
    /// 步骤:
    /// 1) 按客户代码过滤（过滤值转大写后精确匹配）
    /// 2) 按订舱号分组生成汇总
    /// 3) 基于全量记录生成展开明细
    ///
    /// # 参数
    /// - `records`: 原始记录（只读）
    /// - `customer_code`: 客户代码过滤,None 或空白表示不过滤
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(
        &self,
        records: &[RawShipmentRecord],
        customer_code: Option<&str>,
    ) -> AggregationResult {
        if records.is_empty() {
            return AggregationResult::default();
        }

        let filtered = self.filter_by_customer(records, customer_code);
        let (summaries, status_conflicts) = self.summarize(&filtered);
        let details = self.build_details(records);

        debug!(
            retained = filtered.len(),
            bookings = summaries.len(),
            details = details.len(),
            conflicts = status_conflicts.len(),
            "订舱聚合完成"
        );

        AggregationResult {
            summaries,
            details,
            status_conflicts,
        }
    }

    /// 按客户代码过滤
    ///
    /// 记录的客户代码需与过滤值的大写形式完全一致
    pub fn filter_by_customer<'a>(
        &self,
        records: &'a [RawShipmentRecord],
        customer_code: Option<&str>,
    ) -> Vec<&'a RawShipmentRecord> {
        match customer_code.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => {
                let wanted = code.to_uppercase();
                records
                    .iter()
                    .filter(|r| r.customer_code == wanted)
                    .collect()
            }
            None => records.iter().collect(),
        }
    }

    /// 按订舱号分组生成汇总
    ///
    /// 状态/港口/日期取组内首条记录; 箱数 = 组内记录数
    ///
    /// # 返回
    /// (汇总列表, 状态不一致列表)
    pub fn summarize(
        &self,
        records: &[&RawShipmentRecord],
    ) -> (Vec<BookingSummary>, Vec<StatusConflict>) {
        let mut summaries: Vec<BookingSummary> = Vec::new();
        let mut index_by_booking: HashMap<&str, usize> = HashMap::new();
        let mut conflicts = Vec::new();

        for &record in records {
            match index_by_booking.get(record.booking_number.as_str()) {
                Some(&idx) => {
                    let summary = &mut summaries[idx];
                    summary.containers += 1;
                    summary.manually_updated |= record.is_manually_updated();

                    if summary.status != record.status {
                        warn!(
                            booking = %record.booking_number,
                            container = %record.container_number,
                            kept = %summary.status,
                            conflicting = %record.status,
                            "订舱内状态不一致,沿用首条状态"
                        );
                        conflicts.push(StatusConflict {
                            booking_number: record.booking_number.clone(),
                            container_number: record.container_number.clone(),
                            kept: summary.status.clone(),
                            conflicting: record.status.clone(),
                        });
                    }
                }
                None => {
                    index_by_booking.insert(record.booking_number.as_str(), summaries.len());
                    summaries.push(BookingSummary {
                        booking_number: record.booking_number.clone(),
                        status: record.status.clone(),
                        containers: 1,
                        origin: PortDate {
                            port: record.origin_port.clone(),
                            date: record.etd.clone(),
                        },
                        destination: PortDate {
                            port: record.destination_port.clone(),
                            date: record.eta.clone(),
                        },
                        manually_updated: record.is_manually_updated(),
                    });
                }
            }
        }

        (summaries, conflicts)
    }

    /// 构建展开明细索引
    ///
    /// 箱号按字符串精确去重（保留首次出现顺序）; PO/地址取首条记录
    pub fn build_details(&self, records: &[RawShipmentRecord]) -> HashMap<String, BookingDetail> {
        let mut details: HashMap<String, BookingDetail> = HashMap::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for record in records {
            let detail = details
                .entry(record.booking_number.clone())
                .or_insert_with(|| BookingDetail {
                    containers: Vec::new(),
                    po_number: record.po_number.clone(),
                    delivery_address: record.delivery_address.clone(),
                });

            if seen.insert((
                record.booking_number.as_str(),
                record.container_number.as_str(),
            )) {
                detail.containers.push(record.container_number.clone());
            }
        }

        details
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ShipmentAggregator {
    fn default() -> Self {
        Self::new()
    }
}
