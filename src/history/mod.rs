/*!
 * 命令历史模块
 *
 * 可观察的历史序列，镜像到单个键值槽位（JSON 字符串数组）
 */

pub mod cursor;
pub mod error;
pub mod observer;
pub mod store;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::{paths::ConfigPaths, types::HistoryConfig};
use crate::storage::FileStorage;
use crate::utils::error::AppResult;

// 重新导出核心类型
pub use cursor::HistoryCursor;
pub use error::{HistoryError, HistoryResult};
pub use observer::{ObserverList, SubscriptionId};
pub use store::{
    decode_history, encode_history, CorruptHistoryPolicy, HistoryOptions, HistoryStore,
    Persistence, HISTORY_STORAGE_KEY,
};

impl HistoryStore {
    /// 当前历史的游标
    pub fn cursor(&self) -> HistoryCursor {
        HistoryCursor::new(self.get())
    }
}

/// 按配置创建历史存储
///
/// `persist` 关闭时返回只在内存中的存储；否则使用 `storage_dir`，
/// 未配置时使用应用数据目录下的 history 目录。
pub fn open_history_store(config: &HistoryConfig, paths: &ConfigPaths) -> AppResult<HistoryStore> {
    let options = HistoryOptions {
        storage_key: config.storage_key.clone(),
        on_corrupt: config.on_corrupt,
        max_entries: config.max_entries,
    };

    let persistence = if config.persist {
        let dir = config
            .storage_dir
            .clone()
            .unwrap_or_else(|| paths.history_dir());
        let storage = FileStorage::new(&dir)
            .with_context(|| format!("无法创建历史存储目录: {}", dir.display()))?;
        info!("命令历史存储目录: {}", dir.display());
        Persistence::Durable(Arc::new(storage))
    } else {
        Persistence::Ephemeral
    };

    HistoryStore::initialize(persistence, options)
        .with_context(|| format!("无法加载命令历史: {}", config.storage_key))
}
