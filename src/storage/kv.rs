/*!
 * 键值槽位接口与内存实现
 *
 * 与 localStorage 一致，内存实现接受任意字符串键
 */

use dashmap::DashMap;

use crate::storage::error::{StorageError, StorageResult};

/// 同步键值存储接口
///
/// 语义与 localStorage 保持一致：值均为字符串，读取不存在的键返回 `None`，
/// 写入总是整体覆盖。
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// 内存键值存储
///
/// 可选配额按所有条目的键长与值长之和计算，用于模拟浏览器存储配额。
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带字节配额的内存存储
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: DashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 当前占用的字节数
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {

        if let Some(quota) = self.quota {
            let others: usize = self
                .entries
                .iter()
                .filter(|entry| entry.key() != key)
                .map(|entry| entry.key().len() + entry.value().len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
