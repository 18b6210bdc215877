/*!
 * 键值持久化模块
 *
 * 对应浏览器 localStorage 的同步键值槽位接口，
 * 提供内存实现（测试与非持久环境）和文件实现（桌面环境）
 */

pub mod error;
pub mod filesystem;
pub mod kv;

// 重新导出核心类型
pub use error::{StorageError, StorageResult};
pub use filesystem::{validate_key, FileStorage, FileStorageOptions};
pub use kv::{KeyValueStorage, MemoryStorage};
