use std::{collections::BTreeMap, fmt};

/// A parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

/// The shape of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    List,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(it) => Some(*it),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(it) => Some(*it),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(it) => Some(*it),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(it) => Some(it),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(it) => Some(it),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(it) => fmt::Display::fmt(it, f),
            Value::Int(it) => fmt::Display::fmt(it, f),
            Value::Float(it) => fmt::Display::fmt(it, f),
            Value::Str(it) => fmt::Display::fmt(it, f),
            Value::List(items) => {
                let mut sep = "";
                for item in items {
                    write!(f, "{sep}{item}")?;
                    sep = " ";
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

impl From<bool> for Value {
    fn from(it: bool) -> Self {
        Value::Bool(it)
    }
}

impl From<i32> for Value {
    fn from(it: i32) -> Self {
        Value::Int(it.into())
    }
}

impl From<i64> for Value {
    fn from(it: i64) -> Self {
        Value::Int(it)
    }
}

impl From<f64> for Value {
    fn from(it: f64) -> Self {
        Value::Float(it)
    }
}

impl From<&str> for Value {
    fn from(it: &str) -> Self {
        Value::Str(it.to_string())
    }
}

impl From<String> for Value {
    fn from(it: String) -> Self {
        Value::Str(it)
    }
}

impl From<Vec<Value>> for Value {
    fn from(it: Vec<Value>) -> Self {
        Value::List(it)
    }
}

/// The result of an evaluation: option and argument ids mapped to their
/// values.
///
/// Ids are shared by every command along the evaluated path, so a tree
/// must not reuse an id between a command and any of its descendants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars {
    inner: BTreeMap<String, Value>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.inner.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    /// `true` only if `id` is a flag that was given.
    pub fn flag(&self, id: &str) -> bool {
        self.get(id).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn get_str(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Value::as_str)
    }

    pub fn get_int(&self, id: &str) -> Option<i64> {
        self.get(id).and_then(Value::as_int)
    }

    pub fn get_float(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(Value::as_float)
    }

    pub fn get_list(&self, id: &str) -> Option<&[Value]> {
        self.get(id).and_then(Value::as_list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub(crate) fn insert(&mut self, id: &str, value: Value) {
        self.inner.insert(id.to_string(), value);
    }

    pub(crate) fn seed(&mut self, id: &str, value: &Value) {
        if !self.inner.contains_key(id) {
            self.inner.insert(id.to_string(), value.clone());
        }
    }
}

impl fmt::Display for Vars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, value) in self.iter() {
            writeln!(f, "{id}: {value}")?;
        }
        Ok(())
    }
}
