// ==========================================
// 集装箱货运看板 - 看板配置
// ==========================================
// 职责: ConfigManager 键值 → 类型化配置
// ==========================================

use crate::domain::types::SortSpec;
use crate::label::port::PortNameResolver;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 看板配置（类型化视图）
///
/// 由 `ConfigManager::board_settings` 生成
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSettings {
    /// 界面语言（en / zh-CN）
    pub locale: String,

    /// 初始排序
    pub sort: SortSpec,

    /// 初始客户代码过滤
    #[serde(default)]
    pub customer_code: Option<String>,

    /// 港口名称覆写
    #[serde(default)]
    pub port_names: HashMap<String, String>,
}

impl BoardSettings {
    /// 按配置构建港口名称解析器
    pub fn port_resolver(&self) -> PortNameResolver {
        PortNameResolver::with_overrides(self.port_names.clone())
    }

    /// 应用界面语言
    pub fn apply_locale(&self) {
        crate::i18n::set_locale(&self.locale);
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            sort: SortSpec::default(),
            customer_code: None,
            port_names: HashMap::new(),
        }
    }
}
