//! 内置命令定义

use once_cell::sync::Lazy;

use crate::commands::types::CommandDescriptor;

pub static HELP_COMMAND: Lazy<CommandDescriptor> = Lazy::new(|| {
    CommandDescriptor::new("help", "Show a list of all commands").with_aliases(["h", "wtf", "?"])
});

pub static CLEAR_COMMAND: Lazy<CommandDescriptor> = Lazy::new(|| {
    CommandDescriptor::new("clear", "Clear the terminal").with_aliases(["c", "clr", "cls"])
});

pub static ABOUT_COMMAND: Lazy<CommandDescriptor> =
    Lazy::new(|| CommandDescriptor::new("about", "Meet my maker").with_aliases(["shipbit"]));

/// 按 help、clear、about 的顺序返回内置命令
pub fn builtin_commands() -> Vec<CommandDescriptor> {
    vec![
        HELP_COMMAND.clone(),
        CLEAR_COMMAND.clone(),
        ABOUT_COMMAND.clone(),
    ]
}
