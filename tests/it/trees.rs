use cmdtree::{Command, Opt, ValueParser};
use regex::Regex;

pub fn test_command() -> Command {
    Command::builder("test")
        .alias("test-command")
        .about("A test command")
        .flag("-v", "--verbose", "help(verbose)")
        .flag("-u", "--unsafe", "help(unsafe)")
        .option(
            Opt::new("cache", ["-c", "--cache"])
                .value(ValueParser::path())
                .default("")
                .help("help(cache)"),
        )
        .argument("files", ValueParser::sequence(ValueParser::path()))
        .build()
        .unwrap()
}

pub fn parent_command() -> Command {
    Command::builder("parent")
        .flag("-p", "--parent", "help(parent)")
        .subcommand(
            Command::builder("child1")
                .flag("-c1", "--child1", "help(child1)")
                .argument("files", ValueParser::sequence(ValueParser::path())),
        )
        .subcommand(
            Command::builder("child2").alias("c2").option(
                Opt::new("cache", ["-c"])
                    .value(ValueParser::path())
                    .default("./.cache")
                    .help("help(cache)"),
            ),
        )
        .build()
        .unwrap()
}

pub fn flags_command() -> Command {
    Command::builder("test")
        .short_flag("-ha", "<>")
        .short_flag("-geh", "<>")
        .short_flag("-g", "<>")
        .flag("-c", "--current", "<>")
        .build()
        .unwrap()
}

pub fn params_command() -> Command {
    Command::builder("test")
        .option(Opt::new("t1", ["-t1", "--teh1"]).value(ValueParser::string()).default("t1:default"))
        .option(Opt::new("t2", ["-t2", "--teh2"]).value(ValueParser::integer(10)).default(0))
        .option(Opt::new("t3", ["-t3"]).value(ValueParser::choice(["a", "b", "c"])).default("none"))
        .option(
            Opt::new("version", ["-V"])
                .value(ValueParser::regex(Regex::new("v[0-9]+").unwrap()))
                .default("v0"),
        )
        .option(Opt::new("ratio", ["-r", "--ratio"]).value(ValueParser::float()).default(1.0))
        .build()
        .unwrap()
}

pub fn deploy_command() -> Command {
    Command::builder("deploy")
        .option(
            Opt::new("token", ["-t", "--token"])
                .value(ValueParser::string())
                .required()
                .help("API token"),
        )
        .subcommand(
            Command::builder("app")
                .about("Deploys a single app")
                .option(Opt::new("replicas", ["-n"]).value(ValueParser::integer(10)).default(1))
                .argument("name", ValueParser::string()),
        )
        .subcommand(
            Command::builder("scale")
                .argument("count", ValueParser::optional(ValueParser::integer(10), 1)),
        )
        .subcommand(
            Command::builder("move").argument(
                "point",
                ValueParser::tuple(vec![ValueParser::integer(10), ValueParser::integer(10)]),
            ),
        )
        .build()
        .unwrap()
}
