/*!
 * CommandRegistry - 命令注册表
 * 负责：注册、按名称或别名查找、把输入行解析为调用
 */

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::commands::builtin::builtin_commands;
use crate::commands::error::{CommandError, CommandResult};
use crate::commands::types::CommandDescriptor;
use crate::commands::validator::{validate_arguments, ArgumentValue};

/// 命令注册表
///
/// 命令名与别名共享同一个命名空间，任何重名都会使注册失败。
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    names: HashMap<String, usize>,
}

/// 一次解析后的命令调用
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub descriptor: &'a CommandDescriptor,
    /// 用户实际输入的名称，可能是别名
    pub invoked_as: String,
    pub args: Vec<String>,
}

impl Invocation<'_> {
    pub fn validate(&self) -> CommandResult<Vec<ArgumentValue>> {
        validate_arguments(self.descriptor, &self.args)
    }

    /// 执行描述符上挂载的行为，返回是否实际执行
    pub fn execute(&self) -> bool {
        self.descriptor.execute(&self.args)
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含内置命令的注册表
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in builtin_commands() {
            // 内置命令之间不存在重名
            if let Err(e) = registry.register(descriptor) {
                tracing::error!("内置命令注册失败: {}", e);
            }
        }
        registry
    }

    /// 注册命令，失败时注册表保持不变
    pub fn register(&mut self, descriptor: CommandDescriptor) -> CommandResult<()> {
        self.check_conflicts(&descriptor)?;

        let index = self.commands.len();
        for name in descriptor.names() {
            self.names.insert(name.to_string(), index);
        }
        info!("成功注册命令: {}", descriptor.command);
        self.commands.push(descriptor);
        Ok(())
    }

    pub fn unregister(&mut self, command: &str) -> Option<CommandDescriptor> {
        let index = self
            .commands
            .iter()
            .position(|descriptor| descriptor.command == command)?;
        let removed = self.commands.remove(index);
        self.rebuild_index();
        debug!("移除命令: {}", command);
        Some(removed)
    }

    /// 按命令名或别名查找
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.names.get(name).map(|&index| &self.commands[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// 按注册顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 把一行输入解析为命令调用
    ///
    /// 按 shell 引号规则分词，空行返回 `None`。
    pub fn resolve(&self, line: &str) -> CommandResult<Option<Invocation<'_>>> {
        let mut tokens = shell_words::split(line)?.into_iter();
        let Some(invoked_as) = tokens.next() else {
            return Ok(None);
        };

        let descriptor = self
            .get(&invoked_as)
            .ok_or_else(|| CommandError::UnknownCommand(invoked_as.clone()))?;

        Ok(Some(Invocation {
            descriptor,
            invoked_as,
            args: tokens.collect(),
        }))
    }

    fn check_conflicts(&self, descriptor: &CommandDescriptor) -> CommandResult<()> {
        if let Some(&index) = self.names.get(&descriptor.command) {
            let existing = &self.commands[index].command;
            if existing == &descriptor.command {
                return Err(CommandError::DuplicateCommand(descriptor.command.clone()));
            }
            return Err(CommandError::AliasConflict {
                alias: descriptor.command.clone(),
                existing: existing.clone(),
            });
        }

        let mut local = HashSet::from([descriptor.command.as_str()]);
        for alias in &descriptor.aliases {
            if !local.insert(alias.as_str()) {
                return Err(CommandError::AliasConflict {
                    alias: alias.clone(),
                    existing: descriptor.command.clone(),
                });
            }
            if let Some(&index) = self.names.get(alias) {
                return Err(CommandError::AliasConflict {
                    alias: alias.clone(),
                    existing: self.commands[index].command.clone(),
                });
            }
        }

        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.names.clear();
        for (index, descriptor) in self.commands.iter().enumerate() {
            for name in descriptor.names() {
                self.names.insert(name.to_string(), index);
            }
        }
    }
}
