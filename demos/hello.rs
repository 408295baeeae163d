use cmdtree::{Command, Opt, ValueParser};

fn main() {
    env_logger::init();

    let cmd = Command::builder("hello")
        .about("Greets people")
        .flag("-e", "--emoji", "Use an emoji instead of a bang")
        .option(
            Opt::new("times", ["-n", "--times"])
                .value(ValueParser::integer(10))
                .default(1)
                .help("How many times to greet"),
        )
        .argument("names", ValueParser::sequence(ValueParser::string()))
        .callback(|vars| {
            let bang = if vars.flag("emoji") { "❣️" } else { "!" };
            let times = vars.get_int("times").unwrap_or(1);
            for name in vars.get_list("names").unwrap_or_default() {
                for _ in 0..times {
                    println!("Hello {name}{bang}");
                }
            }
        })
        .build();

    match cmd {
        Ok(cmd) => cmd.run_from_env_or_exit(),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1)
        }
    }
}
