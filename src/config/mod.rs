/*!
 * 配置系统模块
 *
 * TOML 配置文件，缺失的字段使用默认值
 */

pub mod defaults;
pub mod loader;
pub mod paths;
pub mod types;

pub use loader::{load_config, save_config};
pub use paths::ConfigPaths;
pub use types::{AppConfig, HistoryConfig, LoggingConfig};

/// 配置版本
pub const CONFIG_VERSION: &str = "1.0.0";

/// 配置目录名称
pub const CONFIG_DIR_NAME: &str = "config";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// 历史存储目录名称
pub const HISTORY_DIR_NAME: &str = "history";
