// ==========================================
// 集装箱货运看板 - 展示层错误类型
// ==========================================

use crate::domain::date::DateParseError;
use thiserror::Error;

/// 展示文本生成错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("日期标签生成失败 (港口 {port_code}): {source}")]
    InvalidDate {
        port_code: String,
        #[source]
        source: DateParseError,
    },
}
