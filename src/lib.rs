//! svelterminal 终端组件核心数据
//!
//! 为浏览器终端组件提供两块互不依赖的数据：
//! - 内置命令元数据（名称、别名、描述、参数定义）
//! - 持久化的命令历史存储

// 模块声明
pub mod commands; // 内置命令注册表模块
pub mod config; // 配置系统模块
pub mod history; // 命令历史存储模块
pub mod storage; // 键值持久化模块
pub mod utils; // 工具和错误处理模块

pub use commands::{
    builtin_commands, ArgumentType, CommandArgument, CommandDescriptor, CommandRegistry,
    ABOUT_COMMAND, CLEAR_COMMAND, HELP_COMMAND,
};
pub use history::{HistoryStore, Persistence, HISTORY_STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
