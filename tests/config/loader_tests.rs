/*!
 * 配置读写测试
 */

use std::path::PathBuf;

use tempfile::TempDir;

use terminal_lib::config::{load_config, save_config, AppConfig, ConfigPaths, HistoryConfig};
use terminal_lib::history::CorruptHistoryPolicy;

/// 测试保存后重新读取得到相同配置
#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ConfigPaths::with_app_data_dir(temp_dir.path()).unwrap();

    let mut config = AppConfig::default();
    config.history = HistoryConfig {
        storage_dir: Some(PathBuf::from("/var/lib/svelterminal")),
        on_corrupt: CorruptHistoryPolicy::Reset,
        max_entries: Some(200),
        ..HistoryConfig::default()
    };
    config.logging.level = "debug".to_string();

    save_config(&paths.config_file(), &config).unwrap();
    let loaded = load_config(&paths.config_file()).unwrap();
    assert_eq!(loaded, config);
}

/// 测试解析失败时返回带文件路径的错误
#[test]
fn test_malformed_config_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[history\npersist = true").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}
