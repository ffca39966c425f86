// ==========================================
// 集装箱货运看板 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: key-value (JSON 对象文件)
// 查找顺序: 显式路径 → SHIPMENT_BOARD_CONFIG → 用户配置目录 → 内置默认值
// ==========================================

use crate::config::board_settings::BoardSettings;
use crate::domain::types::{SortColumn, SortDirection, SortSpec};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SHIPMENT_BOARD_CONFIG";

/// 配置模块错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置文件顶层必须为 JSON 对象")]
    NotAnObject,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建仅含默认值的 ConfigManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 按查找顺序加载配置
    ///
    /// 文件不存在时使用内置默认值; 文件存在但格式错误时返回错误
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                return Self::from_file(Path::new(path));
            }
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("未找到配置文件,使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 用户配置目录下的默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shipment-board").join("config.json"))
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = Some(path.to_path_buf());
        debug!(path = %path.display(), keys = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 从 JSON 对象文本加载
    ///
    /// 字符串值原样保存; 其他值（如 port_names 对象）保存为 JSON 文本
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Value = serde_json::from_str(raw)?;
        let Value::Object(map) = parsed else {
            return Err(ConfigError::NotAnObject);
        };

        let values = map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        Ok(Self {
            values,
            source: None,
        })
    }

    /// 配置来源文件（默认配置时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    // ==========================================
    // 通用读写
    // ==========================================

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 读取配置值,带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// 覆写配置值（仅内存）
    pub fn set_config_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        let json_value = json!(self.values);
        Ok(serde_json::to_string(&json_value)?)
    }

    // ==========================================
    // 看板配置
    // ==========================================

    /// 界面语言（默认 en）
    pub fn get_locale(&self) -> String {
        self.get_config_or_default(config_keys::LOCALE, "en")
    }

    /// 默认排序（默认 目的港升序）
    ///
    /// 无法识别的值回落到默认值并记录警告
    pub fn get_default_sort(&self) -> SortSpec {
        let fallback = SortSpec::default();

        let column = match self.get_config_value(config_keys::DEFAULT_SORT_COLUMN) {
            Some(raw) => SortColumn::parse(raw).unwrap_or_else(|| {
                warn!(
                    config_key = config_keys::DEFAULT_SORT_COLUMN,
                    raw_value = %raw,
                    "排序列配置无法识别，使用默认值"
                );
                fallback.column
            }),
            None => fallback.column,
        };

        let direction = match self.get_config_value(config_keys::DEFAULT_SORT_DIRECTION) {
            Some(raw) => SortDirection::parse(raw).unwrap_or_else(|| {
                warn!(
                    config_key = config_keys::DEFAULT_SORT_DIRECTION,
                    raw_value = %raw,
                    "排序方向配置无法识别，使用默认值"
                );
                fallback.direction
            }),
            None => fallback.direction,
        };

        SortSpec::new(column, direction)
    }

    /// 默认客户代码过滤（空白视为不过滤）
    pub fn get_customer_code(&self) -> Option<String> {
        self.get_config_value(config_keys::CUSTOMER_CODE)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }

    /// 港口名称覆写表
    ///
    /// 配置格式为 JSON: {"AUSYD": "Port Botany", "USLAX": "Los Angeles"}
    /// 格式错误时返回空表
    pub fn get_port_names(&self) -> HashMap<String, String> {
        let value = self.get_config_or_default(config_keys::PORT_NAMES, "{}");
        serde_json::from_str(&value).unwrap_or_else(|_| {
            warn!(
                config_key = config_keys::PORT_NAMES,
                raw_value = %value,
                "港口名称配置格式错误，使用空配置"
            );
            HashMap::new()
        })
    }

    /// 汇总为类型化配置
    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            locale: self.get_locale(),
            sort: self.get_default_sort(),
            customer_code: self.get_customer_code(),
            port_names: self.get_port_names(),
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 界面
    pub const LOCALE: &str = "locale";

    // 排序
    pub const DEFAULT_SORT_COLUMN: &str = "default_sort_column";
    pub const DEFAULT_SORT_DIRECTION: &str = "default_sort_direction";

    // 过滤
    pub const CUSTOMER_CODE: &str = "customer_code";

    // 港口名称覆写 (JSON)
    pub const PORT_NAMES: &str = "port_names";
}
