// ==========================================
// 集装箱货运看板 - 配置层
// ==========================================
// 职责: 看板配置管理,支持文件覆写
// 存储: JSON 对象文件 (key-value)
// ==========================================

pub mod board_settings;
pub mod config_manager;

// 重导出核心配置管理器
pub use board_settings::BoardSettings;
pub use config_manager::{config_keys, ConfigError, ConfigManager, CONFIG_PATH_ENV};
