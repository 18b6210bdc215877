/*!
 * 配置类型定义
 */

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::history::CorruptHistoryPolicy;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: String,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

/// 命令历史配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// 是否持久化，关闭后历史只保存在内存中
    pub persist: bool,
    /// 持久化槽位键名
    pub storage_key: String,
    /// 槽位文件所在目录，未设置时使用应用数据目录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    /// 槽位内容损坏时的处理方式
    pub on_corrupt: CorruptHistoryPolicy,
    /// 最多保留的条目数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 默认日志级别，RUST_LOG 优先
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        defaults::create_default_config()
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        defaults::create_default_history_config()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::create_default_logging_config()
    }
}
