use log::trace;

use crate::{Cursor, DefinitionError, ParseError, Value, ValueParser, Vars};

/// A dash-prefixed switch of a command.
///
/// An option without a value parser is a flag: it defaults to `false` and
/// becomes `true` when any of its identifiers is given.
#[derive(Debug, Clone)]
pub struct Opt {
    pub(crate) id: String,
    pub(crate) identifiers: Vec<String>,
    pub(crate) parser: Option<ValueParser>,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) help: String,
    pub(crate) slot: usize,
}

impl Opt {
    pub fn new<I, S>(id: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            parser: None,
            required: false,
            default: None,
            help: String::new(),
            slot: 0,
        }
    }

    /// A flag with a short and a long identifier, named after the long one
    /// (`--dry-run` becomes `dry-run`).
    pub fn flag(short: &str, long: &str, help: impl Into<String>) -> Self {
        Opt::new(long.trim_start_matches('-'), [short, long]).help(help)
    }

    /// A flag with a single identifier, named after it.
    pub fn short_flag(short: &str, help: impl Into<String>) -> Self {
        Opt::new(short.trim_start_matches('-'), [short]).help(help)
    }

    pub(crate) fn help_flag() -> Self {
        Opt::flag("-h", "--help", "Shows this help text")
    }

    pub fn value(mut self, parser: ValueParser) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn parser(&self) -> Option<&ValueParser> {
        self.parser.as_ref()
    }

    pub fn is_flag(&self) -> bool {
        self.parser.is_none()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// The value an evaluation starts with, if any.
    pub fn default_value(&self) -> Option<Value> {
        match &self.default {
            None if self.is_flag() => Some(Value::Bool(false)),
            default => default.clone(),
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        self.identifiers.iter().any(|it| it == token)
    }

    /// Applies the option after one of its identifiers was taken from the
    /// cursor.
    pub(crate) fn evaluate(&self, p: &mut Cursor, vars: &mut Vars) -> Result<(), ParseError> {
        let value = match &self.parser {
            None => Value::Bool(true),
            Some(parser) => parser.parse(p).map_err(|cause| ParseError::OptionParsingError {
                option: self.id.clone(),
                cause,
            })?,
        };
        trace!("option `{}` = {:?}", self.id, value);
        vars.insert(&self.id, value);
        Ok(())
    }

    /// The identifier without its leading dash, as listed in a synopsis.
    pub(crate) fn short(&self) -> &str {
        self.identifiers.first().map_or("", |it| it.strip_prefix('-').unwrap_or(it))
    }

    /// The identifier quoted in a missing-option error.
    pub(crate) fn display_identifier(&self) -> &str {
        self.identifiers.last().map_or(self.id.as_str(), String::as_str)
    }

    pub(crate) fn validate(&self, command: &str) -> Result<(), DefinitionError> {
        if self.identifiers.is_empty() {
            return Err(DefinitionError::MissingIdentifiers {
                command: command.to_string(),
                option: self.id.clone(),
            });
        }
        if let Some(it) = self.identifiers.iter().find(|it| !it.starts_with('-')) {
            return Err(DefinitionError::InvalidIdentifier {
                option: self.id.clone(),
                identifier: it.clone(),
            });
        }
        match &self.parser {
            None => {
                if self.required {
                    return Err(DefinitionError::RequiredFlag { option: self.id.clone() });
                }
                if matches!(&self.default, Some(it) if *it != Value::Bool(false)) {
                    return Err(DefinitionError::FlagDefault { option: self.id.clone() });
                }
            }
            Some(parser) => {
                parser.validate(&self.id)?;
                match &self.default {
                    None if !self.required => {
                        return Err(DefinitionError::MissingDefault { option: self.id.clone() })
                    }
                    Some(it) if it.kind() != parser.produces() => {
                        return Err(DefinitionError::DefaultKindMismatch {
                            id: self.id.clone(),
                            expected: parser.produces(),
                            found: it.kind(),
                        })
                    }
                    _ => (),
                }
            }
        }
        Ok(())
    }
}
