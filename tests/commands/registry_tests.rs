/*!
 * 命令注册表集成测试
 *
 * 从用户输入到参数校验、行为执行的完整查找流程
 */

use std::sync::Arc;

use parking_lot::Mutex;

use terminal_lib::commands::{
    builtin_commands, validate_arguments, ArgumentType, ArgumentValue, CommandArgument,
    CommandDescriptor, CommandError, CommandRegistry, HELP_COMMAND,
};

/// 测试所有内置命令都能通过名称和别名找到
#[test]
fn test_every_builtin_name_resolves() {
    let registry = CommandRegistry::with_builtins();
    for descriptor in builtin_commands() {
        for name in descriptor.names() {
            let invocation = registry.resolve(name).unwrap().unwrap();
            assert_eq!(invocation.descriptor.command, descriptor.command);
            assert!(invocation.args.is_empty());
        }
    }
}

/// 测试注册表中的命令名唯一
#[test]
fn test_registry_command_names_unique() {
    let mut registry = CommandRegistry::with_builtins();
    for descriptor in builtin_commands() {
        assert!(registry.register(descriptor).is_err());
    }

    let mut names: Vec<_> = registry.iter().map(|d| d.command.clone()).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

/// 测试自定义命令的解析、校验与执行
#[test]
fn test_custom_command_flow() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);

    let mut registry = CommandRegistry::with_builtins();
    registry
        .register(
            CommandDescriptor::new("theme", "Switch the colour theme")
                .with_aliases(["t"])
                .with_argument(CommandArgument::new(
                    "name",
                    "Theme name",
                    ArgumentType::String,
                    true,
                ))
                .with_argument(CommandArgument::new(
                    "animate",
                    "Animate the transition",
                    ArgumentType::Boolean,
                    false,
                ))
                .with_action(move |args: &[String]| sink.lock().extend_from_slice(args)),
        )
        .unwrap();

    let invocation = registry.resolve("t \"solarized dark\" off").unwrap().unwrap();
    assert_eq!(invocation.invoked_as, "t");
    assert_eq!(
        invocation.validate().unwrap(),
        vec![
            ArgumentValue::String("solarized dark".to_string()),
            ArgumentValue::Boolean(false),
        ]
    );
    assert!(invocation.execute());
    assert_eq!(
        *received.lock(),
        vec!["solarized dark".to_string(), "off".to_string()]
    );

    let invocation = registry.resolve("theme").unwrap().unwrap();
    assert!(matches!(
        invocation.validate(),
        Err(CommandError::MissingArgument { .. })
    ));
}

/// 测试内置命令没有行为
#[test]
fn test_builtin_has_no_action() {
    let registry = CommandRegistry::with_builtins();
    let invocation = registry.resolve("help").unwrap().unwrap();
    assert!(!invocation.execute());
    assert!(validate_arguments(&HELP_COMMAND, &[]).unwrap().is_empty());
}

/// 测试描述符的 JSON 形状
#[test]
fn test_descriptor_json_shape() {
    let json = serde_json::to_value(builtin_commands()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "command": "help", "aliases": ["h", "wtf", "?"], "description": "Show a list of all commands" },
            { "command": "clear", "aliases": ["c", "clr", "cls"], "description": "Clear the terminal" },
            { "command": "about", "aliases": ["shipbit"], "description": "Meet my maker" }
        ])
    );

    let restored: Vec<CommandDescriptor> = serde_json::from_value(json).unwrap();
    assert_eq!(restored, builtin_commands());
}
