use thiserror::Error;

use crate::commands::types::ArgumentType;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),
    #[error("Alias {alias:?} conflicts with command {existing:?}")]
    AliasConflict { alias: String, existing: String },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Failed to parse command line: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error("Missing required argument {argument:?} for {command}")]
    MissingArgument { command: String, argument: String },
    #[error("{command} takes at most {expected} arguments, got {actual}")]
    TooManyArguments {
        command: String,
        expected: usize,
        actual: usize,
    },
    #[error("Argument {argument:?} of {command} expects a {expected}, got {value:?}")]
    InvalidArgument {
        command: String,
        argument: String,
        expected: ArgumentType,
        value: String,
    },
    #[error("Unknown argument type: {0}")]
    UnknownArgumentType(String),
}
