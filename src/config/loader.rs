/*!
 * TOML配置读写
 */

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::types::AppConfig;
use crate::utils::error::{app_error_with_context, AppResult};

/// 读取配置文件
///
/// 文件不存在时返回默认配置，解析失败时返回错误，由调用方决定是否回退。
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    debug!("开始加载TOML配置: {}", path.display());

    if !path.exists() {
        info!("配置文件不存在，使用默认配置");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("配置文件解析失败: {}", path.display()))?;

    info!("配置文件解析成功");
    Ok(config)
}

/// 写入配置文件
pub fn save_config(path: &Path, config: &AppConfig) -> AppResult<()> {
    let content =
        toml::to_string_pretty(config).map_err(app_error_with_context("配置序列化失败"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("无法创建配置目录: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("无法写入配置文件: {}", path.display()))?;

    debug!("配置已保存: {}", path.display());
    Ok(())
}
