use std::ffi::OsString;

use crate::{ParseError, Result};

/// The not-yet-consumed suffix of an argument list.
///
/// Tokens are only ever taken from the front. Parsers that need to back out
/// of a partial match record a [`Cursor::position`] and rewind to it.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    args: Vec<String>,
    pos: usize,
}

impl Cursor {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect(), pos: 0 }
    }

    /// Arguments of the current process, without the program name.
    pub fn new_from_env() -> Result<Self> {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Fails on the first argument that is not valid UTF-8.
    pub fn from_os_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .enumerate()
            .map(|(position, arg)| {
                arg.into_string().map_err(|arg| ParseError::InvalidUtf8 {
                    position,
                    lossy: arg.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { args, pos: 0 })
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.args.len()
    }

    pub fn peek(&self) -> Option<&str> {
        self.args.get(self.pos).map(String::as_str)
    }

    /// The next token, if it looks like an option.
    pub fn peek_flag(&self) -> Option<&str> {
        self.peek().filter(|it| it.starts_with('-'))
    }

    pub fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos).cloned()?;
        self.pos += 1;
        Some(arg)
    }

    pub fn remaining(&self) -> &[String] {
        &self.args[self.pos.min(self.args.len())..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }
}
