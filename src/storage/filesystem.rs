/*!
 * 文件键值存储
 *
 * 每个键对应根目录下的一个文件，写入采用临时文件加原子重命名，
 * 进程崩溃时槽位内容保持为上一次完整写入的值
 */

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::kv::KeyValueStorage;

/// 校验键名
///
/// 只允许 `[A-Za-z0-9._-]`，且不能以 `.` 开头，保证键名可以直接作为文件名使用，且不会与临时文件冲突。
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// 文件存储选项
#[derive(Debug, Clone)]
pub struct FileStorageOptions {
    /// 是否使用原子写入
    pub atomic_write: bool,
    /// 文件权限（Unix系统）
    pub file_permissions: Option<u32>,
}

impl Default for FileStorageOptions {
    fn default() -> Self {
        Self {
            atomic_write: true,
            file_permissions: Some(0o644),
        }
    }
}

/// 文件键值存储
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    options: FileStorageOptions,
}

impl FileStorage {
    /// 创建文件存储，根目录不存在时自动创建
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        Self::with_options(root, FileStorageOptions::default())
    }

    pub fn with_options(root: impl Into<PathBuf>, options: FileStorageOptions) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::io("creating storage directory", &root, e))?;
        debug!("文件存储根目录: {}", root.display());
        Ok(Self { root, options })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 获取键对应的文件路径
    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn atomic_write(&self, path: &Path, content: &[u8]) -> StorageResult<()> {
        let temp_path = self.get_temp_path(path);

        fs::write(&temp_path, content)
            .map_err(|e| StorageError::io("writing temporary file", &temp_path, e))?;

        self.apply_permissions(&temp_path)?;

        fs::rename(&temp_path, path).map_err(|e| {
            // 清理临时文件
            let _ = fs::remove_file(&temp_path);
            StorageError::io("renaming temporary file", path, e)
        })
    }

    fn direct_write(&self, path: &Path, content: &[u8]) -> StorageResult<()> {
        fs::write(path, content).map_err(|e| StorageError::io("writing file", path, e))?;
        self.apply_permissions(path)
    }

    #[cfg(unix)]
    fn apply_permissions(&self, path: &Path) -> StorageResult<()> {
        use std::os::unix::fs::PermissionsExt;

        if let Some(permissions) = self.options.file_permissions {
            let perms = fs::Permissions::from_mode(permissions);
            fs::set_permissions(path, perms)
                .map_err(|e| StorageError::io("setting file permissions", path, e))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn apply_permissions(&self, _path: &Path) -> StorageResult<()> {
        Ok(())
    }

    /// 临时文件以 `.` 开头，不会与任何合法键名冲突
    fn get_temp_path(&self, path: &Path) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.root.join(format!(
            ".{}.tmp.{}.{}",
            filename,
            std::process::id(),
            timestamp
        ))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io("reading slot", path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        if self.options.atomic_write {
            self.atomic_write(&path, value.as_bytes())
        } else {
            self.direct_write(&path, value.as_bytes())
        }
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io("removing slot", path, e)),
        }
    }
}
