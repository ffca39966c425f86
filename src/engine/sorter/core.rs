use crate::domain::date::parse_calendar_date;
use crate::domain::shipment::BookingSummary;
use crate::domain::types::{SortColumn, SortDirection, SortSpec};
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::instrument;

// ==========================================
// SortKeys - 预解析的日期键
// ==========================================
// 无法解析的日期按 NaiveDate::MAX 处理（排序确定,但不在契约内）
#[derive(Debug, Clone, Copy)]
struct SortKeys {
    departure: NaiveDate,
    arrival: NaiveDate,
}

impl SortKeys {
    fn of(summary: &BookingSummary) -> Self {
        Self {
            departure: date_key(&summary.origin.date),
            arrival: date_key(&summary.destination.date),
        }
    }
}

fn date_key(raw: &str) -> NaiveDate {
    parse_calendar_date(raw).unwrap_or(NaiveDate::MAX)
}

// ==========================================
// ShipmentSorter - 订舱排序引擎
// ==========================================
pub struct ShipmentSorter {
    // 无状态引擎,不需要注入依赖
}

impl ShipmentSorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序订舱汇总
    ///
    /// 规则:
    /// - booking: 订舱号字典序
    /// - status: 状态优先级下标 (NotReadyToShip=0 … Delivered=5, 未知=6)
    /// - origin / destination: 对应日期按日历比较
    /// - 降序: 比较结果取反
    /// - 目的港 + 升序: 见 `compare_destination_board`
    ///
    /// # 返回
    /// 排序后的列表（稳定排序）
    #[instrument(skip(self, summaries), fields(count = summaries.len(), column = %spec.column, direction = %spec.direction))]
    pub fn sort(&self, summaries: Vec<BookingSummary>, spec: SortSpec) -> Vec<BookingSummary> {
        // 预解析日期,避免 sort_by 中重复解析
        let mut keyed: Vec<(SortKeys, BookingSummary)> = summaries
            .into_iter()
            .map(|summary| (SortKeys::of(&summary), summary))
            .collect();

        keyed.sort_by(|(keys_a, a), (keys_b, b)| self.compare_keyed(a, keys_a, b, keys_b, spec));

        keyed.into_iter().map(|(_, summary)| summary).collect()
    }

    /// 比较两个订舱汇总
    ///
    /// # 返回
    /// Ordering::Less 表示 a 排在 b 之前
    pub fn compare(&self, a: &BookingSummary, b: &BookingSummary, spec: SortSpec) -> Ordering {
        self.compare_keyed(a, &SortKeys::of(a), b, &SortKeys::of(b), spec)
    }

    // ==========================================
    // 比较方法
    // ==========================================

    fn compare_keyed(
        &self,
        a: &BookingSummary,
        keys_a: &SortKeys,
        b: &BookingSummary,
        keys_b: &SortKeys,
        spec: SortSpec,
    ) -> Ordering {
        // 两段式规则仅作用于升序; 降序回落到普通日期倒序
        if spec.column == SortColumn::Destination && spec.direction == SortDirection::Ascending {
            return self.compare_destination_board(a, keys_a, b, keys_b);
        }

        let ord = match spec.column {
            SortColumn::Booking => a.booking_number.cmp(&b.booking_number),
            SortColumn::Status => a.status.priority().cmp(&b.status.priority()),
            SortColumn::Origin => keys_a.departure.cmp(&keys_b.departure),
            SortColumn::Destination => keys_a.arrival.cmp(&keys_b.arrival),
        };

        spec.direction.apply(ord)
    }

    /// 目的港升序（看板默认视图）
    ///
    /// 1) 未交付 全部排在 已交付 之前
    /// 2) 未交付: 到港日升序（最近到港优先）
    /// 3) 已交付: 到港日降序（最近交付优先）
    fn compare_destination_board(
        &self,
        a: &BookingSummary,
        keys_a: &SortKeys,
        b: &BookingSummary,
        keys_b: &SortKeys,
    ) -> Ordering {
        match (a.status.is_delivered(), b.status.is_delivered()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, false) => keys_a.arrival.cmp(&keys_b.arrival),
            (true, true) => keys_b.arrival.cmp(&keys_a.arrival),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ShipmentSorter {
    fn default() -> Self {
        Self::new()
    }
}
