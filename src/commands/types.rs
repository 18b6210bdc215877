/*!
 * 命令描述符类型定义
 */

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::commands::error::CommandError;

/// 参数声明类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
    Number,
    Boolean,
}

impl ArgumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentType::String => "string",
            ArgumentType::Number => "number",
            ArgumentType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgumentType {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ArgumentType::String),
            "number" => Ok(ArgumentType::Number),
            "boolean" => Ok(ArgumentType::Boolean),
            other => Err(CommandError::UnknownArgumentType(other.to_string())),
        }
    }
}

/// 命令参数定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgument {
    pub name: String,
    pub description: String,
    /// 是否必填，由调用方负责校验
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: ArgumentType,
}

impl CommandArgument {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ArgumentType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            kind,
        }
    }
}

/// 命令可执行能力
pub trait CommandAction: Send + Sync {
    fn execute(&self, args: &[String]);
}

impl<F> CommandAction for F
where
    F: Fn(&[String]) + Send + Sync,
{
    fn execute(&self, args: &[String]) {
        self(args)
    }
}

/// 命令描述符
///
/// 序列化时只包含数据字段，`action` 永远不会被写出，反序列化得到的描述符不带行为。
#[derive(Clone, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<CommandArgument>,
    #[serde(skip)]
    action: Option<Arc<dyn CommandAction>>,
}

impl CommandDescriptor {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            aliases: Vec::new(),
            description: description.into(),
            arguments: Vec::new(),
            action: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn with_argument(mut self, argument: CommandArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_action(mut self, action: impl CommandAction + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// 命令名在前，随后按声明顺序给出别名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.command.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn action(&self) -> Option<&Arc<dyn CommandAction>> {
        self.action.as_ref()
    }

    /// 执行挂载的行为，返回是否实际执行
    pub fn execute(&self, args: &[String]) -> bool {
        match &self.action {
            Some(action) => {
                action.execute(args);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("command", &self.command)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("has_action", &self.has_action())
            .finish()
    }
}

impl PartialEq for CommandDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command
            && self.aliases == other.aliases
            && self.description == other.description
            && self.arguments == other.arguments
            && self.has_action() == other.has_action()
    }
}
