// ==========================================
// 看板集成测试
// ==========================================
// 职责: 验证 聚合 → 计数 → 排序 → 标签 的完整数据流
// 场景: 示例数据 (B1/B2) + 多客户混合数据
// ==========================================


use chrono::{NaiveDate, NaiveDateTime};
use shipment_board::api::{DateCell, ShipmentBoard};
use shipment_board::domain::types::{ShipmentStatus, SortColumn, SortDirection, SortSpec};
use shipment_board::engine::{ShipmentAggregator, ShipmentSorter, StatusSummarizer};
use shipment_board::label::{DateFormatter, EventVerb, StatusLabelFormatter};
use std::collections::HashSet;
use test_helpers::{mixed_fleet, worked_example, RecordBuilder};

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn order(board: &mut ShipmentBoard) -> Vec<String> {
    board
        .summaries()
        .iter()
        .map(|s| s.booking_number.clone())
        .collect()
}

// ==========================================
// 示例数据 (B1/B2)
// ==========================================

#[test]
fn test_worked_example_end_to_end() {
    shipment_board::logging::init_test();

    let mut board = ShipmentBoard::new();
    board.replace_records(worked_example());

    let summaries = board.summaries().to_vec();
    assert_eq!(summaries.len(), 2);

    // 目的港升序: 未交付 B2 排在已交付 B1 之前
    assert_eq!(summaries[0].booking_number, "B2");
    assert_eq!(summaries[0].status, ShipmentStatus::ReadyToShip);
    assert_eq!(summaries[0].containers, 1);
    assert_eq!(summaries[1].booking_number, "B1");
    assert_eq!(summaries[1].status, ShipmentStatus::Delivered);
    assert_eq!(summaries[1].containers, 2);

    let rows = board.rows_at(at(2024, 6, 1));
    assert_eq!(rows[1].status_text, "2 containers delivered");
    assert_eq!(rows[0].status_text, "1 container ready to ship");
    assert_eq!(
        rows[1].destination.label().unwrap().to_string(),
        "Arrived Sydney on 05/01/24"
    );
    assert_eq!(
        rows[0].destination.label().unwrap().to_string(),
        "Arriving Melbourne on 20/12/25"
    );
}

// ==========================================
// 聚合性质
// ==========================================

#[test]
fn test_summary_count_equals_distinct_bookings() {
    let records = mixed_fleet();
    let result = ShipmentAggregator::new().aggregate(&records, None);

    let distinct: HashSet<&str> = records.iter().map(|r| r.booking_number.as_str()).collect();
    assert_eq!(result.summaries.len(), distinct.len());

    let container_total: usize = result.summaries.iter().map(|s| s.containers).sum();
    assert_eq!(container_total, records.len());
}

#[test]
fn test_container_total_matches_filtered_records() {
    let records = mixed_fleet();
    let aggregator = ShipmentAggregator::new();

    for code in ["ACME", "globex"] {
        let result = aggregator.aggregate(&records, Some(code));
        let retained = records
            .iter()
            .filter(|r| r.customer_code == code.to_uppercase())
            .count();
        let container_total: usize = result.summaries.iter().map(|s| s.containers).sum();
        assert_eq!(container_total, retained, "customer {}", code);
    }
}

#[test]
fn test_unknown_customer_yields_empty_board() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());
    board.set_customer_filter(Some("NOBODY"));

    assert!(board.summaries().is_empty());
    assert!(board.status_counts().is_empty());
    // 明细不受过滤影响
    assert!(board.detail("BK100").is_some());
}

#[test]
fn test_detail_containers_unique_in_first_seen_order() {
    let mut records = mixed_fleet();
    records.push(
        RecordBuilder::new("BK100", "MSCU1000001")
            .status("In transit")
            .build(),
    );
    records.push(
        RecordBuilder::new("BK100", "MSCU1000003")
            .status("In transit")
            .delivery_address("1 Harbour St")
            .build(),
    );

    let result = ShipmentAggregator::new().aggregate(&records, None);
    let detail = &result.details["BK100"];
    assert_eq!(
        detail.containers,
        vec!["MSCU1000001", "MSCU1000002", "MSCU1000003"]
    );
    assert_eq!(detail.po_number, "PO-1");
}

// ==========================================
// 状态计数
// ==========================================

#[test]
fn test_status_counts_sum_and_priority_order() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());

    let summary_count = board.summaries().len();
    let counts = board.status_counts().clone();

    assert_eq!(counts.total(), summary_count);
    assert!(counts.iter().all(|(_, n)| n > 0));
    assert_eq!(counts.get(&ShipmentStatus::ReadyToShip), None);

    let statuses: Vec<ShipmentStatus> = counts.iter().map(|(s, _)| s.clone()).collect();
    assert_eq!(
        statuses,
        vec![
            ShipmentStatus::NotReadyToShip,
            ShipmentStatus::ArrivedAtPod,
            ShipmentStatus::InTransit,
            ShipmentStatus::Delivered,
        ]
    );
    assert_eq!(counts.get(&ShipmentStatus::Delivered), Some(2));
}

#[test]
fn test_unknown_status_counted_separately() {
    let mut records = mixed_fleet();
    records.push(
        RecordBuilder::new("BK900", "MSCU9000001")
            .status("Held by customs")
            .build(),
    );

    let result = ShipmentAggregator::new().aggregate(&records, None);
    let counts = StatusSummarizer::new().count(&result.summaries);

    assert_eq!(
        counts.get(&ShipmentStatus::from_label("Held by customs")),
        Some(1)
    );
    // 未知状态排在所有已知状态之后
    let last = counts.iter().last().map(|(s, _)| s.clone());
    assert_eq!(last, Some(ShipmentStatus::from_label("Held by customs")));
}

// ==========================================
// 排序
// ==========================================

#[test]
fn test_destination_ascending_two_tier() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());

    assert_eq!(
        order(&mut board),
        vec!["BK500", "BK100", "BK300", "BK200", "BK400"]
    );
}

#[test]
fn test_destination_descending_plain_date_sort() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());
    board.set_sort(SortSpec::new(SortColumn::Destination, SortDirection::Descending));

    assert_eq!(
        order(&mut board),
        vec!["BK300", "BK100", "BK500", "BK200", "BK400"]
    );
}

#[test]
fn test_booking_descending_is_exact_reverse() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());

    board.toggle_sort(SortColumn::Booking);
    let ascending = order(&mut board);
    assert_eq!(ascending, vec!["BK100", "BK200", "BK300", "BK400", "BK500"]);

    board.toggle_sort(SortColumn::Booking);
    let mut descending = order(&mut board);
    descending.reverse();
    assert_eq!(descending, ascending);
}

#[test]
fn test_status_and_origin_columns() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());

    board.set_sort(SortSpec::new(SortColumn::Status, SortDirection::Ascending));
    assert_eq!(
        order(&mut board),
        vec!["BK300", "BK500", "BK100", "BK200", "BK400"]
    );

    board.set_sort(SortSpec::new(SortColumn::Origin, SortDirection::Ascending));
    assert_eq!(
        order(&mut board),
        vec!["BK400", "BK200", "BK500", "BK100", "BK300"]
    );
}

#[test]
fn test_unparseable_dates_sort_last() {
    let records = vec![
        RecordBuilder::new("X1", "C1")
            .status("In transit")
            .pod("AUSYD", "TBA")
            .build(),
        RecordBuilder::new("X2", "C2")
            .status("In transit")
            .pod("AUSYD", "01/02/25")
            .build(),
    ];
    let result = ShipmentAggregator::new().aggregate(&records, None);
    let sorted = ShipmentSorter::new().sort(result.summaries, SortSpec::default());

    assert_eq!(sorted[0].booking_number, "X2");
    assert_eq!(sorted[1].booking_number, "X1");
}

// ==========================================
// 日期与状态文本
// ==========================================

#[test]
fn test_full_and_short_year_equivalent() {
    let formatter = DateFormatter::default();
    let now = at(2024, 3, 5);

    let full = formatter.format_at("AUSYD", "05/03/2024", false, now).unwrap();
    let short = formatter.format_at("AUSYD", "05/03/24", false, now).unwrap();
    assert_eq!(full.verb, short.verb);
    assert_eq!(full.verb, EventVerb::Arrived);
    // 展示保留原始年份位数
    assert_eq!(full.date_text(), "05/03/2024");
    assert_eq!(short.date_text(), "05/03/24");

    let summaries = ShipmentAggregator::new()
        .aggregate(
            &[
                RecordBuilder::new("L1", "C1").status("In transit").pod("AUSYD", "06/03/2024").build(),
                RecordBuilder::new("S1", "C2").status("In transit").pod("AUSYD", "05/03/24").build(),
            ],
            None,
        )
        .summaries;
    let sorted = ShipmentSorter::new().sort(summaries, SortSpec::default());
    assert_eq!(sorted[0].booking_number, "S1");
    assert_eq!(sorted[1].booking_number, "L1");
}

#[test]
fn test_status_text_plurals() {
    let formatter = StatusLabelFormatter::new();
    assert_eq!(
        formatter.format(&ShipmentStatus::Delivered, 1),
        "1 container delivered"
    );
    assert_eq!(
        formatter.format(&ShipmentStatus::Delivered, 3),
        "3 containers delivered"
    );
}

#[test]
fn test_rows_degrade_invalid_dates() {
    let mut board = ShipmentBoard::new();
    board.replace_records(vec![RecordBuilder::new("B1", "C1")
        .status("On board vessel")
        .pol("CNSHA", "2025-01-02")
        .build()]);

    let rows = board.rows_at(at(2024, 6, 1));
    assert!(matches!(rows[0].origin, DateCell::Invalid { .. }));
    assert_eq!(
        rows[0].destination.label().map(|l| l.verb),
        Some(EventVerb::Arrived)
    );
}

#[test]
fn test_manual_update_flag_reaches_rows() {
    let mut board = ShipmentBoard::new();
    board.replace_records(mixed_fleet());

    let rows = board.rows_at(at(2025, 1, 10));
    let bk500 = rows.iter().find(|r| r.booking_number == "BK500").unwrap();
    assert!(bk500.manually_updated);
    assert_eq!(bk500.status_text, "2 containers arrived at pod");
    assert_eq!(
        bk500.origin.label().unwrap().to_string(),
        "Departed Singapore on 01/12/24"
    );

    let bk100 = rows.iter().find(|r| r.booking_number == "BK100").unwrap();
    assert!(!bk100.manually_updated);
    // 未收录的港口代码原样显示
    assert_eq!(
        bk100.destination.label().unwrap().to_string(),
        "Arriving USLAX on 28/01/2025"
    );
}
