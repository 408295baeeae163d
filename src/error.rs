use thiserror::Error;

use crate::ValueKind;

/// Why a value parser rejected the tokens in front of the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected a value")]
    MissingArguments,
    #[error("`{token}` is not a valid {expected}")]
    ParsingError { token: String, expected: String },
    #[error("`{token}` has an invalid format")]
    InvalidStringFormat { token: String },
    #[error("unknown choice `{token}`, use one of `{}`", .choices.join(" | "))]
    UnknownChoice { token: String, choices: Vec<String> },
}

/// A failed evaluation.
///
/// Value parser failures always arrive wrapped in the option or argument
/// that ran the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown option: `{token}`. Use `--help` for more information")]
    UnknownOption { token: String, remaining: Vec<String> },
    #[error("Option is required: `{identifier}`. Use `--help` for more information")]
    MissingRequiredOption { option: String, identifier: String },
    #[error("Can't parse option `{option}`, {cause}")]
    OptionParsingError { option: String, cause: ValueError },
    #[error("Can't parse argument `{argument}`, {cause}")]
    ArgumentParsingError { argument: String, cause: ValueError },
    #[error("Unexpected argument: `{token}`. Use `--help` for more information")]
    UnexpectedArgument { token: String, remaining: Vec<String> },
    /// A process argument that can't be represented as a `String`.
    /// `position` excludes the program name.
    #[error("Argument {position} is not valid UTF-8: `{lossy}`")]
    InvalidUtf8 { position: usize, lossy: String },
}

impl ParseError {
    pub fn cause(&self) -> Option<&ValueError> {
        match self {
            ParseError::OptionParsingError { cause, .. }
            | ParseError::ArgumentParsingError { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// A command tree that breaks one of the construction rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("invalid command name `{name}`")]
    InvalidName { name: String },
    #[error("option `{option}` of `{command}` has no identifiers")]
    MissingIdentifiers { command: String, option: String },
    #[error("identifier `{identifier}` of option `{option}` must start with `-`")]
    InvalidIdentifier { option: String, identifier: String },
    #[error("flag `{option}` can't be required")]
    RequiredFlag { option: String },
    #[error("flag `{option}` must default to `false`")]
    FlagDefault { option: String },
    #[error("option `{option}` needs a default value")]
    MissingDefault { option: String },
    #[error("default of `{id}` is a {found}, but its parser produces a {expected}")]
    DefaultKindMismatch { id: String, expected: ValueKind, found: ValueKind },
    #[error("radix {radix} of `{id}` is out of range 2..=36")]
    InvalidRadix { id: String, radix: u32 },
    #[error("`{command}` can't have both an argument and subcommands")]
    ArgumentWithSubcommands { command: String },
    #[error("id `{id}` is declared twice on the path to `{command}`")]
    DuplicateId { command: String, id: String },
}
