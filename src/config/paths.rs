/*!
 * 配置系统路径管理模块
 *
 * 提供配置文件与历史存储目录的跨平台路径解析和目录创建。
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::utils::error::{app_error, AppResult};

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 应用程序数据目录
    app_data_dir: PathBuf,

    /// 配置目录
    config_dir: PathBuf,

    /// 历史存储目录
    history_dir: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// 根据当前平台自动确定应用数据目录位置。
    ///
    /// # 错误
    ///
    /// 如果无法确定用户目录或创建必要的目录，将返回错误。
    pub fn new() -> AppResult<Self> {
        let app_data_dir = Self::get_app_data_dir()?;
        Self::with_app_data_dir(app_data_dir)
    }

    /// 使用自定义应用数据目录创建配置路径管理器
    pub fn with_app_data_dir<P: AsRef<Path>>(app_data_dir: P) -> AppResult<Self> {
        let app_data_dir = app_data_dir.as_ref().to_path_buf();
        let config_dir = app_data_dir.join(crate::config::CONFIG_DIR_NAME);
        let history_dir = app_data_dir.join(crate::config::HISTORY_DIR_NAME);

        let paths = Self {
            app_data_dir,
            config_dir,
            history_dir,
        };
        paths.ensure_directories_exist()?;

        Ok(paths)
    }

    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(crate::config::CONFIG_FILE_NAME)
    }

    /// 获取历史存储目录
    pub fn history_dir(&self) -> PathBuf {
        self.history_dir.clone()
    }

    fn ensure_directories_exist(&self) -> AppResult<()> {
        for dir in [&self.app_data_dir, &self.config_dir, &self.history_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("无法创建目录: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    fn get_app_data_dir() -> AppResult<PathBuf> {
        let app_name = "svelterminal";

        #[cfg(target_os = "macos")]
        {
            let home = dirs::home_dir().ok_or_else(|| app_error("无法获取用户主目录"))?;
            Ok(home
                .join("Library")
                .join("Application Support")
                .join(app_name))
        }

        #[cfg(not(target_os = "macos"))]
        {
            let data_dir = dirs::data_dir().ok_or_else(|| app_error("无法获取应用数据目录"))?;
            Ok(data_dir.join(app_name))
        }
    }
}
