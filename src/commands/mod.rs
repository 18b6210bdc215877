/*!
 * 内置命令模块
 *
 * 命令以纯数据描述（名称、别名、描述、参数定义），
 * 可执行行为作为可选能力挂载在描述符上，不参与序列化
 */

pub mod builtin;
pub mod error;
pub mod registry;
pub mod types;
pub mod validator;

// 重新导出核心类型
pub use builtin::{builtin_commands, ABOUT_COMMAND, CLEAR_COMMAND, HELP_COMMAND};
pub use error::{CommandError, CommandResult};
pub use registry::{CommandRegistry, Invocation};
pub use types::{ArgumentType, CommandAction, CommandArgument, CommandDescriptor};
pub use validator::{validate_arguments, ArgumentValue};
