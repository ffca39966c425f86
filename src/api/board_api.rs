// ==========================================
// 集装箱货运看板 - 看板 API
// ==========================================
// 职责: 持有当前数据快照与界面选择状态,输出派生视图
// 输入: 原始记录快照 / 客户过滤 / 排序选择 / 展开行
// 输出: 排序后的汇总、状态计数、展开明细、看板行
// ==========================================
// 缓存: 按 (快照版本, 客户过滤, 排序规格) 记忆派生视图
// 红线: 结果正确性不依赖缓存,任何输入变化都会触发全量重算
// ==========================================

use crate::api::dto::{BookingRow, DateCell};
use crate::config::board_settings::BoardSettings;
use crate::domain::shipment::{
    BookingDetail, BookingSummary, RawShipmentRecord, StatusConflict, StatusCounts,
};
use crate::domain::types::{SortColumn, SortSpec};
use crate::engine::aggregator::{AggregationResult, ShipmentAggregator};
use crate::engine::sorter::ShipmentSorter;
use crate::engine::status_summary::StatusSummarizer;
use crate::label::date_label::DateFormatter;
use crate::label::port::PortNameResolver;
use crate::label::status_label::StatusLabelFormatter;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

/// 聚合缓存键
#[derive(Debug, Clone, PartialEq, Eq)]
struct AggregationKey {
    revision: u64,
    customer_code: Option<String>,
}

// ==========================================
// ShipmentBoard - 看板视图模型
// ==========================================
pub struct ShipmentBoard {
    // 数据快照
    records: Vec<RawShipmentRecord>,
    revision: u64,

    // 界面选择状态
    customer_code: Option<String>,
    sort: SortSpec,
    expanded: Option<String>,

    // 引擎
    aggregator: ShipmentAggregator,
    summarizer: StatusSummarizer,
    sorter: ShipmentSorter,
    dates: DateFormatter,
    statuses: StatusLabelFormatter,

    // 派生视图缓存
    aggregation_cache: Option<(AggregationKey, AggregationResult)>,
    sorted_cache: Option<((AggregationKey, SortSpec), Vec<BookingSummary>)>,
    counts_cache: Option<(AggregationKey, StatusCounts)>,
}

impl ShipmentBoard {
    /// 创建空看板（默认排序: 目的港升序）
    pub fn new() -> Self {
        Self::with_ports(PortNameResolver::new())
    }

    /// 指定港口名称解析器
    pub fn with_ports(ports: PortNameResolver) -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
            customer_code: None,
            sort: SortSpec::default(),
            expanded: None,
            aggregator: ShipmentAggregator::new(),
            summarizer: StatusSummarizer::new(),
            sorter: ShipmentSorter::new(),
            dates: DateFormatter::new(ports),
            statuses: StatusLabelFormatter::new(),
            aggregation_cache: None,
            sorted_cache: None,
            counts_cache: None,
        }
    }

    /// 按配置创建
    pub fn from_settings(settings: &BoardSettings) -> Self {
        let mut board = Self::with_ports(settings.port_resolver());
        board.sort = settings.sort;
        board.set_customer_filter(settings.customer_code.as_deref());
        board
    }

    // ==========================================
    // 输入与选择状态
    // ==========================================

    /// 替换数据快照（快照版本 +1）
    pub fn replace_records(&mut self, records: Vec<RawShipmentRecord>) {
        self.records = records;
        self.revision += 1;
        debug!(revision = self.revision, count = self.records.len(), "数据快照已替换");
    }

    pub fn records(&self) -> &[RawShipmentRecord] {
        &self.records
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 设置客户代码过滤（空白视为不过滤）
    pub fn set_customer_filter(&mut self, customer_code: Option<&str>) {
        self.customer_code = customer_code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase);
    }

    pub fn customer_filter(&self) -> Option<&str> {
        self.customer_code.as_deref()
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// 点击列头: 同列翻转方向,新列从升序开始
    pub fn toggle_sort(&mut self, column: SortColumn) -> SortSpec {
        self.sort = self.sort.toggled(column);
        self.sort
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// 展开/收起订舱行（同时只展开一行）
    pub fn toggle_expanded(&mut self, booking_number: &str) {
        if self.expanded.as_deref() == Some(booking_number) {
            self.expanded = None;
        } else {
            self.expanded = Some(booking_number.to_string());
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    // ==========================================
    // 派生视图
    // ==========================================

    /// 排序后的订舱汇总
    pub fn summaries(&mut self) -> &[BookingSummary] {
        let key = (self.aggregation_key(), self.sort);
        let stale = self.sorted_cache.as_ref().map_or(true, |(k, _)| *k != key);

        if stale {
            self.refresh_aggregation();
            let summaries = self
                .aggregation_cache
                .as_ref()
                .map(|(_, agg)| agg.summaries.clone())
                .unwrap_or_default();
            let sorted = self.sorter.sort(summaries, self.sort);
            self.sorted_cache = Some((key, sorted));
        }

        self.sorted_cache
            .as_ref()
            .map(|(_, sorted)| sorted.as_slice())
            .unwrap_or(&[])
    }

    /// 状态计数（优先级顺序）
    pub fn status_counts(&mut self) -> &StatusCounts {
        let key = self.aggregation_key();
        let stale = self.counts_cache.as_ref().map_or(true, |(k, _)| *k != key);

        if stale {
            self.refresh_aggregation();
            let counts = match &self.aggregation_cache {
                Some((_, agg)) => self.summarizer.count(&agg.summaries),
                None => StatusCounts::new(),
            };
            self.counts_cache = Some((key.clone(), counts));
        }

        let (_, counts) = self
            .counts_cache
            .get_or_insert_with(|| (key, StatusCounts::new()));
        counts
    }

    /// 订舱展开明细（全量记录,不受客户过滤影响）
    pub fn detail(&mut self, booking_number: &str) -> Option<&BookingDetail> {
        self.refresh_aggregation();
        self.aggregation_cache
            .as_ref()
            .and_then(|(_, agg)| agg.details.get(booking_number))
    }

    /// 当前展开行的明细
    pub fn expanded_detail(&mut self) -> Option<&BookingDetail> {
        let booking = self.expanded.clone()?;
        self.detail(&booking)
    }

    /// 组内状态不一致的记录
    pub fn status_conflicts(&mut self) -> &[StatusConflict] {
        self.refresh_aggregation();
        self.aggregation_cache
            .as_ref()
            .map(|(_, agg)| agg.status_conflicts.as_slice())
            .unwrap_or(&[])
    }

    /// 看板行（以本地当前时刻生成日期标签）
    pub fn rows(&mut self) -> Vec<BookingRow> {
        self.rows_at(Local::now().naive_local())
    }

    /// 看板行（指定比较时刻）
    pub fn rows_at(&mut self, now: NaiveDateTime) -> Vec<BookingRow> {
        let expanded = self.expanded.clone();
        let summaries = self.summaries().to_vec();

        summaries
            .iter()
            .map(|summary| BookingRow {
                booking_number: summary.booking_number.clone(),
                status: summary.status.clone(),
                status_text: self.statuses.format(&summary.status, summary.containers),
                containers: summary.containers,
                origin: self.date_cell(&summary.origin.port, &summary.origin.date, true, now),
                destination: self.date_cell(
                    &summary.destination.port,
                    &summary.destination.date,
                    false,
                    now,
                ),
                manually_updated: summary.manually_updated,
                expanded: expanded.as_deref() == Some(summary.booking_number.as_str()),
            })
            .collect()
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn aggregation_key(&self) -> AggregationKey {
        AggregationKey {
            revision: self.revision,
            customer_code: self.customer_code.clone(),
        }
    }

    fn refresh_aggregation(&mut self) {
        let key = self.aggregation_key();
        let stale = self
            .aggregation_cache
            .as_ref()
            .map_or(true, |(k, _)| *k != key);

        if stale {
            debug!(revision = key.revision, customer = ?key.customer_code, "重算订舱聚合");
            let result = self
                .aggregator
                .aggregate(&self.records, self.customer_code.as_deref());
            self.aggregation_cache = Some((key, result));
        }
    }

    fn date_cell(&self, port_code: &str, raw: &str, departure: bool, now: NaiveDateTime) -> DateCell {
        match self.dates.format_at(port_code, raw, departure, now) {
            Ok(label) => DateCell::Label(label),
            Err(err) => {
                warn!(error = %err, "日期标签降级为原文显示");
                DateCell::Invalid {
                    port_code: port_code.to_string(),
                    raw: raw.to_string(),
                }
            }
        }
    }
}

impl Default for ShipmentBoard {
    fn default() -> Self {
        Self::new()
    }
}
