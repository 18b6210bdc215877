/*!
 * 命令参数校验
 *
 * 按位置把输入参数与描述符的参数定义对应，并转换为声明的类型
 */

use serde::Serialize;

use crate::commands::error::{CommandError, CommandResult};
use crate::commands::types::{ArgumentType, CommandDescriptor};

/// 转换后的参数值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl ArgumentType {
    /// 把原始字符串转换为该类型的值
    pub fn coerce(&self, raw: &str) -> Option<ArgumentValue> {
        match self {
            ArgumentType::String => Some(ArgumentValue::String(raw.to_string())),
            ArgumentType::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(ArgumentValue::Number),
            ArgumentType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(ArgumentValue::Boolean(true)),
                "false" | "no" | "off" | "0" => Some(ArgumentValue::Boolean(false)),
                _ => None,
            },
        }
    }
}

/// 校验并转换参数
///
/// 返回值与实际提供的参数一一对应，未提供的可选参数不出现在结果中。
pub fn validate_arguments(
    descriptor: &CommandDescriptor,
    args: &[String],
) -> CommandResult<Vec<ArgumentValue>> {
    if args.len() > descriptor.arguments.len() {
        return Err(CommandError::TooManyArguments {
            command: descriptor.command.clone(),
            expected: descriptor.arguments.len(),
            actual: args.len(),
        });
    }

    if let Some(missing) = descriptor
        .arguments
        .iter()
        .skip(args.len())
        .find(|argument| argument.required)
    {
        return Err(CommandError::MissingArgument {
            command: descriptor.command.clone(),
            argument: missing.name.clone(),
        });
    }

    descriptor
        .arguments
        .iter()
        .zip(args)
        .map(|(argument, raw)| {
            argument
                .kind
                .coerce(raw)
                .ok_or_else(|| CommandError::InvalidArgument {
                    command: descriptor.command.clone(),
                    argument: argument.name.clone(),
                    expected: argument.kind,
                    value: raw.clone(),
                })
        })
        .collect()
}
