/*!
 * 错误处理模块
 *
 * 应用层统一使用 anyhow，模块内部使用 thiserror 定义的类型化错误，
 * 通过 context 在边界处补充错误信息。
 */

use anyhow::{anyhow, Result as AnyhowResult};

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;

/// 创建简单的应用程序错误
pub fn app_error(msg: impl Into<String>) -> AppError {
    anyhow!(msg.into())
}

/// 创建带上下文的错误转换函数
///
/// 返回一个闭包，将任意可显示的错误转换为带有上下文信息的 AppError。
pub fn app_error_with_context<T>(msg: &str) -> impl FnOnce(T) -> AppError + '_
where
    T: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    move |err| anyhow!("{}: {}", msg, err)
}
