/*!
 * 命令历史持久化测试模块
 *
 * 验证槽位格式、重新初始化后的恢复、非持久环境以及配置驱动的创建
 */

use proptest::prelude::*;
use tempfile::TempDir;

use terminal_lib::config::{paths::ConfigPaths, types::HistoryConfig};
use terminal_lib::history::{
    decode_history, encode_history, open_history_store, CorruptHistoryPolicy, HistoryError,
    HistoryOptions, HistoryStore, Persistence, HISTORY_STORAGE_KEY,
};
use terminal_lib::storage::{FileStorage, KeyValueStorage};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// 在同一个目录上打开一个新的文件存储，模拟页面重新加载
fn reopen(dir: &TempDir) -> HistoryStore {
    let storage = FileStorage::new(dir.path()).unwrap();
    HistoryStore::initialize(Persistence::durable(storage), HistoryOptions::default()).unwrap()
}

/// 测试完整的槽位生命周期
#[test]
fn test_slot_lifecycle_scenario() {
    let temp_dir = TempDir::new().unwrap();

    let store = reopen(&temp_dir);
    assert_eq!(store.get(), Vec::<String>::new());

    store.set(strings(&["help"])).unwrap();
    let raw = std::fs::read_to_string(temp_dir.path().join(HISTORY_STORAGE_KEY)).unwrap();
    assert_eq!(raw, r#"["help"]"#);

    let reloaded = reopen(&temp_dir);
    assert_eq!(reloaded.get(), strings(&["help"]));

    reloaded.set(strings(&["help", "clear"])).unwrap();
    reloaded.set(Vec::new()).unwrap();
    let raw = std::fs::read_to_string(temp_dir.path().join(HISTORY_STORAGE_KEY)).unwrap();
    assert_eq!(raw, "[]");
    assert!(reopen(&temp_dir).is_empty());
}

/// 测试特殊字符在重新加载后保持不变
#[test]
fn test_durability_with_unusual_entries() {
    let temp_dir = TempDir::new().unwrap();
    let entries = strings(&["", "echo \"quoted\"", "路径 /tmp", "tab\tand\nnewline", "emoji 🚀"]);

    reopen(&temp_dir).set(entries.clone()).unwrap();
    assert_eq!(reopen(&temp_dir).get(), entries);
}

/// 测试两个存储共享同一槽位时最后一次写入生效
#[test]
fn test_shared_slot_last_write_wins() {
    let temp_dir = TempDir::new().unwrap();
    let first = reopen(&temp_dir);
    let second = reopen(&temp_dir);

    first.push("help").unwrap();
    second.push("about").unwrap();

    assert_eq!(reopen(&temp_dir).get(), strings(&["about"]));

    first.reload().unwrap();
    assert_eq!(first.get(), strings(&["about"]));
}

/// 测试损坏的槽位文件
#[test]
fn test_corrupt_file_slot() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(HISTORY_STORAGE_KEY), "not json").unwrap();

    let storage = FileStorage::new(temp_dir.path()).unwrap();
    let result = HistoryStore::initialize(
        Persistence::durable(storage.clone()),
        HistoryOptions::default(),
    );
    assert!(matches!(result, Err(HistoryError::Decode { .. })));

    let options = HistoryOptions {
        on_corrupt: CorruptHistoryPolicy::Reset,
        ..HistoryOptions::default()
    };
    let store = HistoryStore::initialize(Persistence::durable(storage), options).unwrap();
    assert!(store.is_empty());

    store.push("help").unwrap();
    assert_eq!(reopen(&temp_dir).get(), strings(&["help"]));
}

/// 测试非持久环境
#[test]
fn test_ephemeral_store_keeps_value_in_memory() {
    let store = HistoryStore::initialize(Persistence::Ephemeral, HistoryOptions::default()).unwrap();
    assert!(!store.is_persistent());

    store.set(strings(&["help"])).unwrap();
    assert_eq!(store.get(), strings(&["help"]));
    assert!(HistoryStore::ephemeral().is_empty());
}

/// 测试按配置创建历史存储
#[test]
fn test_open_history_store_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ConfigPaths::with_app_data_dir(temp_dir.path()).unwrap();

    let config = HistoryConfig::default();
    let store = open_history_store(&config, &paths).unwrap();
    assert!(store.is_persistent());
    store.push("clear").unwrap();
    assert!(paths.history_dir().join(HISTORY_STORAGE_KEY).exists());

    let reopened = open_history_store(&config, &paths).unwrap();
    assert_eq!(reopened.get(), strings(&["clear"]));
    assert_eq!(reopened.cursor().previous(), Some("clear"));
}

/// 测试自定义目录与关闭持久化
#[test]
fn test_open_history_store_variants() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ConfigPaths::with_app_data_dir(temp_dir.path().join("app")).unwrap();
    let custom_dir = temp_dir.path().join("custom");

    let config = HistoryConfig {
        storage_dir: Some(custom_dir.clone()),
        max_entries: Some(1),
        ..HistoryConfig::default()
    };
    let store = open_history_store(&config, &paths).unwrap();
    store.push("help").unwrap();
    store.push("about").unwrap();
    let storage = FileStorage::new(&custom_dir).unwrap();
    assert_eq!(
        storage.get_item(HISTORY_STORAGE_KEY).unwrap(),
        Some(r#"["about"]"#.to_string())
    );

    let config = HistoryConfig {
        persist: false,
        ..HistoryConfig::default()
    };
    let store = open_history_store(&config, &paths).unwrap();
    assert!(!store.is_persistent());
}

/// 测试损坏的槽位在默认配置下导致打开失败
#[test]
fn test_open_history_store_surfaces_corruption() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ConfigPaths::with_app_data_dir(temp_dir.path()).unwrap();
    std::fs::write(paths.history_dir().join(HISTORY_STORAGE_KEY), "{").unwrap();

    let err = open_history_store(&HistoryConfig::default(), &paths).unwrap_err();
    assert!(err.downcast_ref::<HistoryError>().is_some());
}

proptest! {
    /// 任意字符串序列经过编码再解码后保持不变
    #[test]
    fn prop_encoding_preserves_sequence(entries in prop::collection::vec(any::<String>(), 0..16)) {
        let encoded = encode_history(&entries).unwrap();
        let decoded = decode_history(HISTORY_STORAGE_KEY, &encoded).unwrap();
        prop_assert_eq!(decoded, entries);
    }
}
