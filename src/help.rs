use std::fmt::Write;

use crate::{Argument, Command, Opt};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

impl Command {
    /// One line describing how the command is called, e.g.
    /// `test [-hvc] <files: path...>`.
    pub fn synopsis(&self) -> String {
        let mut buf = String::new();
        let shorts = self.options().iter().map(Opt::short).collect::<String>();
        w!(buf, "{} [-{}]", self.complete_name(), shorts);
        if !self.subcommands().is_empty() {
            let names = self.subcommands().iter().map(Command::name).collect::<Vec<_>>();
            w!(buf, " [{}]", names.join(" "));
        }
        if let Some(arg) = self.argument() {
            w!(buf, " {}", arg.export());
        }
        buf
    }

    pub fn help(&self) -> String {
        let mut buf = String::new();

        w!(buf, "SYNOPSIS:\n");
        w!(buf, "    {}\n", self.synopsis());
        if let Some(about) = self.about() {
            w!(buf, "      {}\n", about);
        }

        if !self.subcommands().is_empty() {
            blank_line(&mut buf);
            w!(buf, "SUBCOMMANDS:\n");
            for sub in self.subcommands() {
                w!(buf, "    {}\n", sub.synopsis());
                if let Some(about) = sub.about() {
                    w!(buf, "      {}\n", about);
                }
            }
        }

        blank_line(&mut buf);
        w!(buf, "OPTIONS:\n");
        let mut blank = "";
        for opt in self.options() {
            w!(buf, "{}", blank);
            blank = "\n";

            w!(buf, "    {}", opt.identifiers().join(", "));
            if let Some(parser) = opt.parser() {
                w!(buf, " <{}: {}>", opt.id(), parser.descriptor());
            }
            if opt.is_required() {
                w!(buf, " (required)");
            }
            w!(buf, "\n");
            if !opt.help_text().is_empty() {
                w!(buf, "      {}\n", opt.help_text());
            }
        }

        buf
    }
}

impl Argument {
    /// `<id: type>`, with the `?` of an optional parser moved outside.
    pub fn export(&self) -> String {
        match self.parser().optional_inner() {
            Some(inner) => format!("<{}: {}>?", self.id(), inner.descriptor()),
            None => format!("<{}: {}>", self.id(), self.parser().descriptor()),
        }
    }
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
