// ==========================================
// 集装箱货运看板 - 港口名称解析
// ==========================================
// 职责: 港口代码 → 展示名称
// 兜底: 未收录的代码原样返回
// ==========================================

use std::collections::HashMap;

/// 内置港口代码表 (UN/LOCODE → 城市名)
const PORT_NAMES: &[(&str, &str)] = &[
    ("AUADL", "Adelaide"),
    ("AUBNE", "Brisbane"),
    ("AUFRE", "Fremantle"),
    ("AUMEL", "Melbourne"),
    ("AUSYD", "Sydney"),
    ("CNDLC", "Dalian"),
    ("CNNBO", "Ningbo"),
    ("CNSHA", "Shanghai"),
    ("CNSHK", "Shekou"),
    ("CNTAO", "Qingdao"),
    ("CNTXG", "Tianjin"),
    ("CNXMN", "Xiamen"),
    ("CNYTN", "Yantian"),
    ("HKHKG", "Hong Kong"),
    ("IDJKT", "Jakarta"),
    ("INNSA", "Nhava Sheva"),
    ("JPTYO", "Tokyo"),
    ("KRPUS", "Busan"),
    ("MYPKG", "Port Klang"),
    ("NZAKL", "Auckland"),
    ("SGSIN", "Singapore"),
    ("THLCH", "Laem Chabang"),
    ("TWKHH", "Kaohsiung"),
    ("VNHPH", "Haiphong"),
    ("VNSGN", "Ho Chi Minh City"),
];

// ==========================================
// PortNameResolver - 港口名称解析器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PortNameResolver {
    overrides: HashMap<String, String>, // 配置覆写,优先于内置表
}

impl PortNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带覆写表创建（来自配置 port_names）
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// 解析港口展示名称
    ///
    /// 查找顺序: 配置覆写 → 内置表 → 代码本身
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        if let Some(name) = self.overrides.get(code) {
            return name;
        }

        PORT_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
            .unwrap_or(code)
    }

    /// 代码是否已收录
    pub fn is_known(&self, code: &str) -> bool {
        self.overrides.contains_key(code) || PORT_NAMES.iter().any(|(c, _)| *c == code)
    }
}
