use regex::Regex;

use crate::{Cursor, DefinitionError, Value, ValueError, ValueKind};

/// Turns a prefix of the cursor into a [`Value`].
///
/// A parser only takes tokens from the cursor when it succeeds. On failure
/// the cursor is left where it was, which is what lets [`ValueParser::optional`]
/// fall back to its default.
#[derive(Debug, Clone)]
pub struct ValueParser {
    kind: Kind,
    descriptor: Option<String>,
}

#[derive(Debug, Clone)]
enum Kind {
    String,
    Path,
    Integer { radix: u32 },
    Float,
    Regex(Regex),
    Choice(Vec<String>),
    Optional { inner: Box<ValueParser>, default: Value },
    Sequence(Box<ValueParser>),
    Tuple(Vec<ValueParser>),
}

impl ValueParser {
    fn from_kind(kind: Kind) -> Self {
        Self { kind, descriptor: None }
    }

    /// Any single token, verbatim.
    pub fn string() -> Self {
        Self::from_kind(Kind::String)
    }

    /// Any single token. The path is not checked for existence.
    pub fn path() -> Self {
        Self::from_kind(Kind::Path)
    }

    /// An integer in the given radix, without prefix (`ff`, not `0xff`).
    pub fn integer(radix: u32) -> Self {
        Self::from_kind(Kind::Integer { radix })
    }

    pub fn float() -> Self {
        Self::from_kind(Kind::Float)
    }

    /// A token that `regex` matches starting at its first character.
    pub fn regex(regex: Regex) -> Self {
        Self::from_kind(Kind::Regex(regex))
    }

    pub fn choice<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_kind(Kind::Choice(choices.into_iter().map(Into::into).collect()))
    }

    /// Falls back to `default` when there is nothing left to parse.
    ///
    /// Malformed input is still an error.
    pub fn optional(inner: ValueParser, default: impl Into<Value>) -> Self {
        Self::from_kind(Kind::Optional { inner: Box::new(inner), default: default.into() })
    }

    /// Repeats `inner` until the cursor is empty or `inner` rejects the next
    /// token, which is left on the cursor.
    pub fn sequence(inner: ValueParser) -> Self {
        Self::from_kind(Kind::Sequence(Box::new(inner)))
    }

    /// Runs every part in order, all or nothing.
    pub fn tuple(parts: Vec<ValueParser>) -> Self {
        Self::from_kind(Kind::Tuple(parts))
    }

    /// Overrides the name shown in help output.
    pub fn describe(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    pub fn descriptor(&self) -> String {
        if let Some(it) = &self.descriptor {
            return it.clone();
        }
        match &self.kind {
            Kind::String | Kind::Regex(_) => "string".to_string(),
            Kind::Path => "path".to_string(),
            Kind::Integer { .. } => "int".to_string(),
            Kind::Float => "float".to_string(),
            Kind::Choice(choices) => choices.join(" | "),
            Kind::Optional { inner, .. } => format!("{}?", inner.descriptor()),
            Kind::Sequence(inner) => format!("{}...", inner.descriptor()),
            Kind::Tuple(parts) => {
                parts.iter().map(ValueParser::descriptor).collect::<Vec<_>>().join(" ")
            }
        }
    }

    pub fn produces(&self) -> ValueKind {
        match &self.kind {
            Kind::String | Kind::Path | Kind::Regex(_) | Kind::Choice(_) => ValueKind::Str,
            Kind::Integer { .. } => ValueKind::Int,
            Kind::Float => ValueKind::Float,
            Kind::Optional { inner, .. } => inner.produces(),
            Kind::Sequence(_) | Kind::Tuple(_) => ValueKind::List,
        }
    }

    /// The wrapped parser, if this one was built with [`ValueParser::optional`].
    pub(crate) fn optional_inner(&self) -> Option<&ValueParser> {
        match &self.kind {
            Kind::Optional { inner, .. } if self.descriptor.is_none() => Some(inner),
            _ => None,
        }
    }

    pub fn parse(&self, p: &mut Cursor) -> Result<Value, ValueError> {
        match &self.kind {
            Kind::String | Kind::Path => {
                p.next().map(Value::Str).ok_or(ValueError::MissingArguments)
            }
            Kind::Integer { radix } => {
                let token = p.peek().ok_or(ValueError::MissingArguments)?;
                if !(2..=36).contains(radix) {
                    return Err(self.malformed(token));
                }
                let value = i64::from_str_radix(token, *radix).map_err(|_| self.malformed(token))?;
                p.next();
                Ok(Value::Int(value))
            }
            Kind::Float => {
                let token = p.peek().ok_or(ValueError::MissingArguments)?;
                let value = token.parse::<f64>().map_err(|_| self.malformed(token))?;
                p.next();
                Ok(Value::Float(value))
            }
            Kind::Regex(regex) => {
                let token = p.peek().ok_or(ValueError::MissingArguments)?;
                if !regex.find(token).is_some_and(|m| m.start() == 0) {
                    return Err(ValueError::InvalidStringFormat { token: token.to_string() });
                }
                p.next().map(Value::Str).ok_or(ValueError::MissingArguments)
            }
            Kind::Choice(choices) => {
                let token = p.peek().ok_or(ValueError::MissingArguments)?;
                if !choices.iter().any(|it| it == token) {
                    return Err(ValueError::UnknownChoice {
                        token: token.to_string(),
                        choices: choices.clone(),
                    });
                }
                p.next().map(Value::Str).ok_or(ValueError::MissingArguments)
            }
            Kind::Optional { inner, default } => match inner.parse(p) {
                Err(ValueError::MissingArguments) => Ok(default.clone()),
                res => res,
            },
            Kind::Sequence(inner) => {
                let mut values = Vec::new();
                while !p.is_empty() {
                    let before = p.position();
                    match inner.parse(p) {
                        Ok(value) if p.position() > before => values.push(value),
                        _ => break,
                    }
                }
                Ok(Value::List(values))
            }
            Kind::Tuple(parts) => {
                let start = p.position();
                let mut values = Vec::with_capacity(parts.len());
                for part in parts {
                    match part.parse(p) {
                        Ok(value) => values.push(value),
                        Err(err) => {
                            p.rewind(start);
                            return Err(err);
                        }
                    }
                }
                Ok(Value::List(values))
            }
        }
    }

    fn malformed(&self, token: &str) -> ValueError {
        ValueError::ParsingError { token: token.to_string(), expected: self.descriptor() }
    }

    /// Checks the parts of the parser that can't be checked by the type
    /// system. `id` names the option or argument in errors.
    pub(crate) fn validate(&self, id: &str) -> Result<(), DefinitionError> {
        match &self.kind {
            Kind::Integer { radix } if !(2..=36).contains(radix) => {
                Err(DefinitionError::InvalidRadix { id: id.to_string(), radix: *radix })
            }
            Kind::Optional { inner, default } => {
                inner.validate(id)?;
                if default.kind() != inner.produces() {
                    return Err(DefinitionError::DefaultKindMismatch {
                        id: id.to_string(),
                        expected: inner.produces(),
                        found: default.kind(),
                    });
                }
                Ok(())
            }
            Kind::Sequence(inner) => inner.validate(id),
            Kind::Tuple(parts) => parts.iter().try_for_each(|it| it.validate(id)),
            _ => Ok(()),
        }
    }
}
