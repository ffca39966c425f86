// ==========================================
// 集装箱货运看板 - 到离港日期标签
// ==========================================
// 职责: 港口代码 + 日期文本 → 时态化标签
// 输入: 港口代码, DD/MM/YY[YY] 日期, 是否离港事件
// 输出: DateLabel (动词 + 港口名 + 原始日/月/年)
// ==========================================
// 规则:
// - 日期(当日零点) 早于 当前时刻 → 过去时 (Departed / Arrived)
// - 否则 → 将来时 (Departing / Arriving)
// ==========================================

use crate::domain::date::ShipmentDate;
use crate::i18n;
use crate::label::error::LabelError;
use crate::label::port::PortNameResolver;
use chrono::{Local, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ==========================================
// EventVerb - 事件动词
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventVerb {
    Departed,
    Departing,
    Arrived,
    Arriving,
}

impl EventVerb {
    /// 按事件类型与时态选择动词
    pub fn select(departure: bool, past: bool) -> Self {
        match (departure, past) {
            (true, true) => EventVerb::Departed,
            (true, false) => EventVerb::Departing,
            (false, true) => EventVerb::Arrived,
            (false, false) => EventVerb::Arriving,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventVerb::Departed => "Departed",
            EventVerb::Departing => "Departing",
            EventVerb::Arrived => "Arrived",
            EventVerb::Arriving => "Arriving",
        }
    }

    pub fn is_past(&self) -> bool {
        matches!(self, EventVerb::Departed | EventVerb::Arrived)
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            EventVerb::Departed => "date_label.departed",
            EventVerb::Departing => "date_label.departing",
            EventVerb::Arrived => "date_label.arrived",
            EventVerb::Arriving => "date_label.arriving",
        }
    }
}

impl fmt::Display for EventVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// DateLabel - 结构化日期标签
// ==========================================
// 展示层自行决定强调样式（港口名、日期）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLabel {
    pub verb: EventVerb,
    pub port_code: String,
    pub port_name: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateLabel {
    /// 原始日期文本 (DD/MM/YY[YY])
    pub fn date_text(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }

    /// 按当前语言渲染
    pub fn localized(&self) -> String {
        let date = self.date_text();
        i18n::t_with_args(
            self.verb.i18n_key(),
            &[("port", self.port_name.as_str()), ("date", date.as_str())],
        )
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.verb, self.port_name, self.date_text())
    }
}

// ==========================================
// DateFormatter - 日期标签生成器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DateFormatter {
    ports: PortNameResolver,
}

impl DateFormatter {
    pub fn new(ports: PortNameResolver) -> Self {
        Self { ports }
    }

    pub fn ports(&self) -> &PortNameResolver {
        &self.ports
    }

    /// 以本地当前时刻生成标签
    pub fn format(
        &self,
        port_code: &str,
        raw_date: &str,
        departure: bool,
    ) -> Result<DateLabel, LabelError> {
        self.format_at(port_code, raw_date, departure, Local::now().naive_local())
    }

    /// 以指定时刻生成标签
    ///
    /// # 参数
    /// - `port_code`: 港口代码
    /// - `raw_date`: DD/MM/YY[YY]
    /// - `departure`: true=离港, false=到港
    /// - `now`: 比较基准时刻
    ///
    /// # 错误
    /// 日期无法解析时返回 `LabelError::InvalidDate`
    pub fn format_at(
        &self,
        port_code: &str,
        raw_date: &str,
        departure: bool,
        now: NaiveDateTime,
    ) -> Result<DateLabel, LabelError> {
        let parsed = ShipmentDate::parse(raw_date).map_err(|source| {
            debug!(port_code, raw_date, error = %source, "日期标签解析失败");
            LabelError::InvalidDate {
                port_code: port_code.to_string(),
                source,
            }
        })?;

        let past = parsed.date.and_time(NaiveTime::MIN) < now;

        Ok(DateLabel {
            verb: EventVerb::select(departure, past),
            port_code: port_code.to_string(),
            port_name: self.ports.resolve(port_code).to_string(),
            day: parsed.day,
            month: parsed.month,
            year: parsed.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::DateParseError;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_departure_tense() {
        let formatter = DateFormatter::default();
        let now = at(2024, 6, 1, 9);

        let past = formatter.format_at("CNNBO", "01/01/24", true, now).unwrap();
        assert_eq!(past.verb, EventVerb::Departed);
        assert_eq!(past.port_name, "Ningbo");

        let future = formatter.format_at("CNNBO", "01/12/24", true, now).unwrap();
        assert_eq!(future.verb, EventVerb::Departing);
    }

    #[test]
    fn test_arrival_tense() {
        let formatter = DateFormatter::default();
        let now = at(2024, 6, 1, 9);

        let past = formatter.format_at("AUSYD", "05/01/2024", false, now).unwrap();
        assert_eq!(past.verb, EventVerb::Arrived);
        assert_eq!(past.date_text(), "05/01/2024");

        let future = formatter.format_at("AUSYD", "20/12/25", false, now).unwrap();
        assert_eq!(future.verb, EventVerb::Arriving);
    }

    #[test]
    fn test_same_day_counts_as_past_after_midnight() {
        let formatter = DateFormatter::default();

        let label = formatter
            .format_at("AUMEL", "01/06/24", false, at(2024, 6, 1, 9))
            .unwrap();
        assert_eq!(label.verb, EventVerb::Arrived);

        let midnight = formatter
            .format_at("AUMEL", "01/06/24", false, at(2024, 6, 1, 0))
            .unwrap();
        assert_eq!(midnight.verb, EventVerb::Arriving);
    }

    #[test]
    fn test_unknown_port_used_verbatim() {
        let formatter = DateFormatter::default();
        let label = formatter
            .format_at("ZZXXX", "01/01/24", true, at(2024, 6, 1, 9))
            .unwrap();
        assert_eq!(label.port_name, "ZZXXX");
        assert_eq!(label.to_string(), "Departed ZZXXX on 01/01/24");
    }

    #[test]
    fn test_invalid_date_reported() {
        let formatter = DateFormatter::default();
        let err = formatter
            .format_at("AUSYD", "05/03/2026", false, at(2024, 6, 1, 9))
            .unwrap_err();

        assert_eq!(
            err,
            LabelError::InvalidDate {
                port_code: "AUSYD".to_string(),
                source: DateParseError::UnsupportedYear {
                    year: "2026".to_string()
                },
            }
        );
    }
}
