// ==========================================
// 集装箱货运看板 - 货运日期值对象
// ==========================================
// 格式: DD/MM/YY 或 DD/MM/YYYY (仅 2024/2025 折叠为两位年)
// 红线: 其他四位年份不做修正,直接报告解析失败
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 允许折叠为两位年的四位年份
pub const NORMALIZED_FULL_YEARS: [&str; 2] = ["2024", "2025"];

/// 日期解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("日期格式错误: 期望 DD/MM/YY，实际 {0:?}")]
    Malformed(String),

    #[error("年份无法识别: {year}（仅支持两位年或 2024/2025）")]
    UnsupportedYear { year: String },

    #[error("日期不存在: {0}")]
    OutOfRange(String),
}

// ==========================================
// ShipmentDate - 已解析的货运日期
// ==========================================
// 保留原始 日/月/年 文本,供展示层原样输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDate {
    pub day: String,
    pub month: String,
    pub year: String,
    pub date: NaiveDate,
}

impl ShipmentDate {
    /// 解析 `DD/MM/YY[YY]` 文本
    ///
    /// 年份锚定在 2000 年代 (20YY)
    pub fn parse(raw: &str) -> Result<Self, DateParseError> {
        let trimmed = raw.trim();
        let mut parts = trimmed.split('/');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None) => (d, m, y),
            _ => return Err(DateParseError::Malformed(raw.to_string())),
        };

        let short_year = if NORMALIZED_FULL_YEARS.contains(&year) {
            &year[2..]
        } else {
            year
        };

        if short_year.len() != 2 || !short_year.chars().all(|c| c.is_ascii_digit()) {
            return Err(DateParseError::UnsupportedYear {
                year: year.to_string(),
            });
        }

        let dd = parse_component(day).ok_or_else(|| DateParseError::Malformed(raw.to_string()))?;
        let mm =
            parse_component(month).ok_or_else(|| DateParseError::Malformed(raw.to_string()))?;
        let yy: i32 = short_year
            .parse()
            .map_err(|_| DateParseError::Malformed(raw.to_string()))?;

        let date = NaiveDate::from_ymd_opt(2000 + yy, mm, dd)
            .ok_or_else(|| DateParseError::OutOfRange(raw.to_string()))?;

        Ok(Self {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
            date,
        })
    }

    /// 原始展示文本 (DD/MM/YY[YY])
    pub fn display_text(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// 日/月分量: 1~2 位数字
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 解析为日历日期（排序用,失败返回 None）
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    ShipmentDate::parse(raw).ok().map(|d| d.date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_and_four_digit_years_match() {
        let long = ShipmentDate::parse("05/03/2024").unwrap();
        let short = ShipmentDate::parse("05/03/24").unwrap();
        assert_eq!(long.date, short.date);
        assert_eq!(long.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(
            ShipmentDate::parse("31/12/2025").unwrap().date,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_original_digits_preserved() {
        let parsed = ShipmentDate::parse("05/03/2024").unwrap();
        assert_eq!(parsed.display_text(), "05/03/2024");
        assert_eq!(parsed.day, "05");
        assert_eq!(parsed.year, "2024");
    }

    #[test]
    fn test_other_four_digit_years_are_not_normalized() {
        let err = ShipmentDate::parse("05/03/2026").unwrap_err();
        assert_eq!(
            err,
            DateParseError::UnsupportedYear {
                year: "2026".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            ShipmentDate::parse(""),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            ShipmentDate::parse("2024-03-05"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            ShipmentDate::parse("1/2/3/4"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            ShipmentDate::parse("31/02/24"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert_eq!(parse_calendar_date("not a date"), None);
    }

    #[test]
    fn test_single_digit_components() {
        let parsed = ShipmentDate::parse("5/3/24").unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }
}
