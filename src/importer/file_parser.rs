// ==========================================
// 集装箱货运看板 - 文件解析器实现
// ==========================================
// 支持: JSON (对象数组) / CSV (带表头)
// 输出: 行 → (列名 → 文本值)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;
use tracing::warn;

/// 原始行: 列名 → 文本值
pub type RawRow = HashMap<String, String>;

// ==========================================
// RecordParser Trait
// ==========================================
pub trait RecordParser {
    /// 解析文件为原始行
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

/// 检查文件存在及扩展名
fn check_file(path: &Path, expected_ext: &str) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    if let Some(ext) = path.extension() {
        if !ext.eq_ignore_ascii_case(expected_ext) {
            return Err(ImportError::UnsupportedFormat(
                ext.to_string_lossy().to_string(),
            ));
        }
    }

    Ok(())
}

// ==========================================
// JSON Parser 实现
// ==========================================
pub struct JsonParser;

impl JsonParser {
    /// 解析 JSON 文本
    ///
    /// - 顶层不是数组 → 空结果（记录警告）
    /// - 非对象元素 → 跳过
    /// - 标量值统一转为文本, null 视为缺失
    pub fn parse_str(&self, raw: &str) -> ImportResult<Vec<RawRow>> {
        let document: Value = serde_json::from_str(raw)?;

        let Value::Array(items) = document else {
            warn!("JSON 顶层不是数组,按空数据处理");
            return Ok(Vec::new());
        };

        let mut rows = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let Value::Object(fields) = item else {
                warn!(index = idx, "跳过非对象元素");
                continue;
            };

            let row: RawRow = fields
                .into_iter()
                .filter_map(|(key, value)| {
                    let text = match value {
                        Value::Null => return None,
                        Value::String(s) => s.trim().to_string(),
                        other => other.to_string(),
                    };
                    Some((key.trim().to_string(), text))
                })
                .collect();

            rows.push(row);
        }

        Ok(rows)
    }
}

impl RecordParser for JsonParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        check_file(file_path, "json")?;
        let raw = fs::read_to_string(file_path)?;
        self.parse_str(&raw)
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl RecordParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        check_file(file_path, "csv")?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => JsonParser.parse_to_raw_rows(path),
            "csv" => CsvParser.parse_to_raw_rows(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
