/*!
 * 配置系统默认值
 */

use crate::config::types::*;
use crate::config::CONFIG_VERSION;
use crate::history::{CorruptHistoryPolicy, HISTORY_STORAGE_KEY};

/// 创建默认配置
pub fn create_default_config() -> AppConfig {
    AppConfig {
        version: CONFIG_VERSION.to_string(),
        history: create_default_history_config(),
        logging: create_default_logging_config(),
    }
}

/// 创建默认历史配置
pub fn create_default_history_config() -> HistoryConfig {
    HistoryConfig {
        persist: true,
        storage_key: HISTORY_STORAGE_KEY.to_string(),
        storage_dir: None,
        on_corrupt: CorruptHistoryPolicy::Fail,
        max_entries: None,
    }
}

/// 创建默认日志配置
pub fn create_default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: "info".to_string(),
    }
}
