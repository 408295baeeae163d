use std::{collections::HashSet, fmt};

use log::{debug, trace};

use crate::{
    style::{style, Color, Weight},
    Cursor, DefinitionError, Opt, ParseError, Result, ValueParser, Vars,
};

pub type Callback = Box<dyn Fn(&Vars) + Send + Sync>;

/// The positional argument of an endpoint command.
#[derive(Debug, Clone)]
pub struct Argument {
    pub(crate) id: String,
    pub(crate) parser: ValueParser,
}

impl Argument {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parser(&self) -> &ValueParser {
        &self.parser
    }
}

/// Declares a [`Command`] and its subcommands.
pub struct CommandBuilder {
    names: Vec<String>,
    about: Option<String>,
    options: Vec<Opt>,
    argument: Option<Argument>,
    subcommands: Vec<CommandBuilder>,
    callback: Option<Callback>,
}

/// A node of a validated command tree.
///
/// The tree is immutable. Every evaluation works on its own state, so one
/// tree can serve any number of evaluations, including concurrent ones.
pub struct Command {
    names: Vec<String>,
    complete_name: String,
    about: Option<String>,
    options: Vec<Opt>,
    argument: Option<Argument>,
    subcommands: Vec<Command>,
    callback: Option<Callback>,
}

/// A successful evaluation.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// All tokens were consumed by `command`, the last command on the path.
    Resolved { command: &'a Command, vars: Vars },
    /// `command` was given `--help`; nothing after it was evaluated.
    Help { command: &'a Command, vars: Vars },
}

impl<'a> Outcome<'a> {
    pub fn command(&self) -> &'a Command {
        match self {
            Outcome::Resolved { command, .. } | Outcome::Help { command, .. } => command,
        }
    }

    pub fn vars(&self) -> &Vars {
        match self {
            Outcome::Resolved { vars, .. } | Outcome::Help { vars, .. } => vars,
        }
    }

    pub fn into_vars(self) -> Vars {
        match self {
            Outcome::Resolved { vars, .. } | Outcome::Help { vars, .. } => vars,
        }
    }

    pub fn is_help(&self) -> bool {
        matches!(self, Outcome::Help { .. })
    }
}

impl Command {
    pub fn builder(name: impl Into<String>) -> CommandBuilder {
        CommandBuilder {
            names: vec![name.into()],
            about: None,
            options: vec![Opt::help_flag()],
            argument: None,
            subcommands: Vec::new(),
            callback: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Canonical names of every command from the root down to this one.
    pub fn complete_name(&self) -> &str {
        &self.complete_name
    }

    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    pub fn argument(&self) -> Option<&Argument> {
        self.argument.as_ref()
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub fn subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|it| it.names.iter().any(|n| n == name))
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn evaluate<I, S>(&self, args: I) -> Result<Outcome<'_>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evaluate_cursor(&mut Cursor::new(args))
    }

    pub fn evaluate_cursor(&self, p: &mut Cursor) -> Result<Outcome<'_>> {
        let mut cx = Context::default();
        let step = self.evaluate_rec(p, &mut cx)?;
        let vars = cx.vars;
        Ok(match step {
            Step::Resolved(command) => Outcome::Resolved { command, vars },
            Step::Help(command) => Outcome::Help { command, vars },
        })
    }

    /// Evaluates `args` and returns the variables, whether or not help was
    /// requested.
    pub fn parse<I, S>(&self, args: I) -> Result<Vars>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evaluate(args).map(Outcome::into_vars)
    }

    /// Evaluates `args` and invokes the callback of the resolved command.
    ///
    /// Help is printed instead when it was requested, or when the resolved
    /// command has no callback.
    pub fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_cursor(&mut Cursor::new(args))
    }

    pub fn run_from_env(&self) -> Result<()> {
        self.run_cursor(&mut Cursor::new_from_env()?)
    }

    /// Like [`Command::run_from_env`], but reports errors on stderr and exits.
    pub fn run_from_env_or_exit(&self) {
        if let Err(err) = self.run_from_env() {
            eprintln!("{}", self.render_error(&err));
            std::process::exit(2)
        }
    }

    fn run_cursor(&self, p: &mut Cursor) -> Result<()> {
        match self.evaluate_cursor(p)? {
            Outcome::Resolved { command, vars } => match &command.callback {
                Some(callback) => callback(&vars),
                None => print!("{}", command.help()),
            },
            Outcome::Help { command, .. } => print!("{}", command.help()),
        }
        Ok(())
    }

    pub fn render_error(&self, err: &ParseError) -> String {
        let prefix = style("Error", Weight::Bold, Some(Color::Red));
        format!("{}: {} {}", self.complete_name, prefix, err)
    }

    fn evaluate_rec<'a>(&'a self, p: &mut Cursor, cx: &mut Context) -> Result<Step<'a>> {
        for opt in &self.options {
            if let Some(default) = opt.default_value() {
                cx.vars.seed(&opt.id, &default);
            }
        }

        self.parse_options(p, cx)?;

        if cx.vars.flag("help") {
            debug!("help requested for `{}`", self.complete_name);
            return Ok(Step::Help(self));
        }

        if let Some(opt) = self.options.iter().find(|it| it.required && !cx.seen.contains(&it.slot))
        {
            return Err(ParseError::MissingRequiredOption {
                option: opt.id.clone(),
                identifier: opt.display_identifier().to_string(),
            });
        }

        if let Some(sub) = p.peek().and_then(|it| self.subcommand(it)) {
            p.next();
            debug!("`{}` dispatches to `{}`", self.complete_name, sub.name());
            return sub.evaluate_rec(p, cx);
        }

        if let Some(arg) = &self.argument {
            let value = arg.parser.parse(p).map_err(|cause| ParseError::ArgumentParsingError {
                argument: arg.id.clone(),
                cause,
            })?;
            trace!("argument `{}` = {:?}", arg.id, value);
            cx.vars.insert(&arg.id, value);
        }

        self.parse_options(p, cx)?;

        if let Some(token) = p.peek() {
            return Err(ParseError::UnexpectedArgument {
                token: token.to_string(),
                remaining: p.remaining().to_vec(),
            });
        }

        debug!("resolved `{}`", self.complete_name);
        Ok(Step::Resolved(self))
    }

    fn parse_options(&self, p: &mut Cursor, cx: &mut Context) -> Result<()> {
        while let Some(flag) = p.peek_flag() {
            let opt = match self.options.iter().find(|it| it.matches(flag)) {
                Some(it) => it,
                None => {
                    return Err(ParseError::UnknownOption {
                        token: flag.to_string(),
                        remaining: p.remaining().to_vec(),
                    })
                }
            };
            p.next();
            cx.seen.insert(opt.slot);
            opt.evaluate(p, &mut cx.vars)?;
        }
        Ok(())
    }
}

/// State of a single evaluation, threaded through the recursive descent.
#[derive(Default)]
struct Context {
    vars: Vars,
    /// Slots of the options given so far.
    seen: HashSet<usize>,
}

enum Step<'a> {
    Resolved(&'a Command),
    Help(&'a Command),
}

impl CommandBuilder {
    /// Another name the command can be called by.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    pub fn option(mut self, opt: Opt) -> Self {
        self.options.push(opt);
        self
    }

    pub fn flag(self, short: &str, long: &str, help: impl Into<String>) -> Self {
        self.option(Opt::flag(short, long, help))
    }

    pub fn short_flag(self, short: &str, help: impl Into<String>) -> Self {
        self.option(Opt::short_flag(short, help))
    }

    pub fn argument(mut self, id: impl Into<String>, parser: ValueParser) -> Self {
        self.argument = Some(Argument { id: id.into(), parser });
        self
    }

    pub fn subcommand(mut self, sub: CommandBuilder) -> Self {
        self.subcommands.push(sub);
        self
    }

    pub fn callback(mut self, callback: impl Fn(&Vars) + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Validates the whole tree.
    pub fn build(self) -> Result<Command, DefinitionError> {
        let mut slot = 0;
        self.build_rec(None, &[], &mut slot)
    }

    fn build_rec(
        self,
        parent: Option<&str>,
        ids_on_path: &[String],
        slot: &mut usize,
    ) -> Result<Command, DefinitionError> {
        if let Some(name) = self.names.iter().find(|it| it.is_empty() || it.starts_with('-')) {
            return Err(DefinitionError::InvalidName { name: name.clone() });
        }
        let complete_name = match parent {
            Some(parent) => format!("{parent} {}", self.names[0]),
            None => self.names[0].clone(),
        };

        if self.argument.is_some() && !self.subcommands.is_empty() {
            return Err(DefinitionError::ArgumentWithSubcommands { command: complete_name });
        }

        let mut ids = ids_on_path.to_vec();
        let mut options = self.options;
        for (i, opt) in options.iter_mut().enumerate() {
            opt.validate(&complete_name)?;
            // The implicit help flag is always first and shared by the whole path.
            if i > 0 {
                if opt.id == "help" || ids.contains(&opt.id) {
                    return Err(DefinitionError::DuplicateId {
                        command: complete_name,
                        id: opt.id.clone(),
                    });
                }
                ids.push(opt.id.clone());
            }
            opt.slot = *slot;
            *slot += 1;
        }

        if let Some(arg) = &self.argument {
            arg.parser.validate(&arg.id)?;
            if arg.id == "help" || ids.contains(&arg.id) {
                return Err(DefinitionError::DuplicateId {
                    command: complete_name,
                    id: arg.id.clone(),
                });
            }
        }

        let subcommands = self
            .subcommands
            .into_iter()
            .map(|sub| sub.build_rec(Some(&complete_name), &ids, slot))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Command {
            names: self.names,
            complete_name,
            about: self.about,
            options,
            argument: self.argument,
            subcommands,
            callback: self.callback,
        })
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Command<{}> {{", self.complete_name)?;
        for sub in &self.subcommands {
            writeln!(f, " + Command<{}>", sub.names.join(" | "))?;
        }
        for opt in &self.options {
            let mut traits = Vec::new();
            match &opt.parser {
                Some(parser) => traits.push(format!("{}: {}", opt.id, parser.descriptor())),
                None => traits.push("flag".to_string()),
            }
            if opt.required {
                traits.push("required".to_string());
            }
            writeln!(f, " - Option<{}>({})", opt.identifiers.join(", "), traits.join(" "))?;
        }
        if let Some(arg) = &self.argument {
            writeln!(f, " > Argument<{}: {}>", arg.id, arg.parser.descriptor())?;
        }
        write!(f, "}}")
    }
}
