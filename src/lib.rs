//! Declarative command line parsing over a tree of commands.
//!
//! A [`Command`] owns options, at most one positional argument and any
//! number of subcommands. Evaluating a list of tokens walks the tree and
//! collects every option and argument into [`Vars`]:
//!
//! ```
//! use cmdtree::{Command, Opt, Value, ValueParser};
//!
//! let cmd = Command::builder("test")
//!     .flag("-v", "--verbose", "Print more")
//!     .option(Opt::new("cache", ["-c", "--cache"]).value(ValueParser::path()).default(""))
//!     .argument("files", ValueParser::sequence(ValueParser::path()))
//!     .build()
//!     .unwrap();
//!
//! let vars = cmd.parse(["-c", "./.cache", "--verbose", "a.txt"]).unwrap();
//! assert!(vars.flag("verbose"));
//! assert_eq!(vars.get_str("cache"), Some("./.cache"));
//! assert_eq!(vars.get_list("files"), Some(&[Value::from("a.txt")][..]));
//! ```
//!
//! Values are produced by [`ValueParser`]s, built from a few primitives and
//! the [`ValueParser::optional`], [`ValueParser::sequence`] and
//! [`ValueParser::tuple`] combinators.

mod command;
mod cursor;
mod error;
mod help;
mod opt;
mod parser;
pub mod style;
mod value;

pub use crate::{
    command::{Argument, Callback, Command, CommandBuilder, Outcome},
    cursor::Cursor,
    error::{DefinitionError, ParseError, ValueError},
    opt::Opt,
    parser::ValueParser,
    value::{Value, ValueKind, Vars},
};

pub type Result<T, E = ParseError> = std::result::Result<T, E>;
