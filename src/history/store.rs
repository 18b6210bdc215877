/*!
 * 命令历史存储
 *
 * 内存中的有序输入序列，每次变更都会整体序列化并覆盖写入持久化槽位，
 * 创建时从槽位恢复
 */

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::history::error::{HistoryError, HistoryResult};
use crate::history::observer::{ObserverList, SubscriptionId};
use crate::storage::KeyValueStorage;

/// 持久化槽位的键名，属于对外约定
pub const HISTORY_STORAGE_KEY: &str = "svelterminal.history";

/// 持久化方式
#[derive(Clone)]
pub enum Persistence {
    /// 写入键值存储
    Durable(Arc<dyn KeyValueStorage>),
    /// 无持久化环境，只保留内存中的值
    Ephemeral,
}

impl Persistence {
    pub fn durable(storage: impl KeyValueStorage + 'static) -> Self {
        Persistence::Durable(Arc::new(storage))
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persistence::Durable(_) => f.write_str("Durable"),
            Persistence::Ephemeral => f.write_str("Ephemeral"),
        }
    }
}

/// 槽位内容损坏时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptHistoryPolicy {
    /// 初始化失败，错误返回给调用方
    #[default]
    Fail,
    /// 记录警告并以空历史启动
    Reset,
}

/// 历史存储选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryOptions {
    pub storage_key: String,
    pub on_corrupt: CorruptHistoryPolicy,
    /// 最多保留的条目数，超出时丢弃最旧的条目
    pub max_entries: Option<usize>,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            on_corrupt: CorruptHistoryPolicy::Fail,
            max_entries: None,
        }
    }
}

/// 序列化为 JSON 字符串数组
pub fn encode_history(entries: &[String]) -> HistoryResult<String> {
    serde_json::to_string(entries).map_err(HistoryError::Encode)
}

/// 从 JSON 字符串数组反序列化
pub fn decode_history(key: &str, raw: &str) -> HistoryResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|source| HistoryError::Decode {
        key: key.to_string(),
        source,
    })
}

/// 命令历史存储
pub struct HistoryStore {
    entries: Mutex<Vec<String>>,
    /// 读取当前值、写槽位、替换内存值在同一临界区内完成
    commit: Mutex<()>,
    observers: ObserverList<[String]>,
    persistence: Persistence,
    options: HistoryOptions,
}

impl HistoryStore {
    /// 创建历史存储并从持久化槽位恢复
    pub fn initialize(persistence: Persistence, options: HistoryOptions) -> HistoryResult<Self> {
        let entries = Self::read_slot(&persistence, &options)?;
        let entries = Self::apply_limit(entries, options.max_entries);
        info!(
            "命令历史初始化完成: {} 条记录, 持久化: {:?}",
            entries.len(),
            persistence
        );

        Ok(Self {
            entries: Mutex::new(entries),
            commit: Mutex::new(()),
            observers: ObserverList::new(),
            persistence,
            options,
        })
    }

    /// 创建不持久化的历史存储
    pub fn ephemeral() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            commit: Mutex::new(()),
            observers: ObserverList::new(),
            persistence: Persistence::Ephemeral,
            options: HistoryOptions::default(),
        }
    }

    pub fn get(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self.persistence, Persistence::Durable(_))
    }

    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// 订阅变更，回调会立即收到当前值
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        let current = self.get();
        observer(current.as_slice());
        self.observers.register(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unregister(id)
    }

    /// 替换整个历史序列
    ///
    /// 先写入槽位，写入失败时内存中的值和观察者都不会变化。
    pub fn set(&self, entries: Vec<String>) -> HistoryResult<()> {
        self.commit_with(|_| entries)
    }

    /// 基于当前值计算新值
    ///
    /// 计算期间持有提交锁，`f` 内部不能再调用本存储的修改方法。
    pub fn update<F>(&self, f: F) -> HistoryResult<()>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        self.commit_with(f)
    }

    /// 追加一条输入
    pub fn push(&self, line: impl Into<String>) -> HistoryResult<()> {
        let line = line.into();
        self.update(|mut entries| {
            entries.push(line);
            entries
        })
    }

    pub fn clear(&self) -> HistoryResult<()> {
        self.set(Vec::new())
    }

    /// 重新读取槽位
    ///
    /// 其他进程共享同一槽位时用于获取最后一次写入的内容，槽位不会被回写。
    pub fn reload(&self) -> HistoryResult<()> {
        {
            let _commit = self.commit.lock();
            let entries = Self::read_slot(&self.persistence, &self.options)?;
            let entries = Self::apply_limit(entries, self.options.max_entries);
            debug!("重新加载命令历史: {} 条记录", entries.len());
            self.replace(entries);
        }
        self.observers.drain();
        Ok(())
    }

    fn commit_with<F>(&self, f: F) -> HistoryResult<()>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        {
            let _commit = self.commit.lock();
            let next = Self::apply_limit(f(self.get()), self.options.max_entries);
            self.persist(&next)?;
            self.replace(next);
        }
        // 通知在提交锁外发送，观察者可以再次修改存储
        self.observers.drain();
        Ok(())
    }

    /// 替换内存值并排入通知，调用方需持有提交锁
    fn replace(&self, entries: Vec<String>) {
        let shared: Arc<[String]> = Arc::from(entries.as_slice());
        *self.entries.lock() = entries;
        self.observers.enqueue(shared);
    }

    fn persist(&self, entries: &[String]) -> HistoryResult<()> {
        let Persistence::Durable(storage) = &self.persistence else {
            return Ok(());
        };

        let serialized = encode_history(entries)?;
        storage.set_item(&self.options.storage_key, &serialized)?;
        debug!(
            "命令历史已写入槽位 {}: {} 条记录",
            self.options.storage_key,
            entries.len()
        );
        Ok(())
    }

    fn read_slot(persistence: &Persistence, options: &HistoryOptions) -> HistoryResult<Vec<String>> {
        let Persistence::Durable(storage) = persistence else {
            return Ok(Vec::new());
        };

        let Some(raw) = storage.get_item(&options.storage_key)? else {
            return Ok(Vec::new());
        };

        match decode_history(&options.storage_key, &raw) {
            Ok(entries) => Ok(entries),
            Err(e) => match options.on_corrupt {
                CorruptHistoryPolicy::Fail => Err(e),
                CorruptHistoryPolicy::Reset => {
                    warn!("命令历史已损坏，使用空历史: {}", e);
                    Ok(Vec::new())
                }
            },
        }
    }

    fn apply_limit(mut entries: Vec<String>, max_entries: Option<usize>) -> Vec<String> {
        if let Some(max) = max_entries {
            if entries.len() > max {
                let excess = entries.len() - max;
                entries.drain(..excess);
            }
        }
        entries
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.len())
            .field("observers", &self.observers)
            .field("persistence", &self.persistence)
            .field("options", &self.options)
            .finish()
    }
}
