use expect_test::expect;

use crate::trees;

#[test]
fn synopsis() {
    let cmd = trees::test_command();
    assert_eq!(cmd.complete_name(), "test");
    assert_eq!(cmd.names(), ["test", "test-command"]);
    assert_eq!(cmd.synopsis(), "test [-hvuc] <files: path...>");

    let parent = trees::parent_command();
    assert_eq!(parent.synopsis(), "parent [-hp] [child1 child2]");
    let child1 = parent.subcommand("child1").unwrap();
    assert_eq!(child1.synopsis(), "parent child1 [-hc1] <files: path...>");
    let child2 = parent.subcommand("c2").unwrap();
    assert_eq!(child2.synopsis(), "parent child2 [-hc]");

    let deploy = trees::deploy_command();
    assert_eq!(deploy.subcommand("scale").unwrap().synopsis(), "deploy scale [-h] <count: int>?");
    assert_eq!(deploy.subcommand("move").unwrap().synopsis(), "deploy move [-h] <point: int int>");
}

#[test]
fn help_endpoint() {
    let cmd = trees::test_command();
    expect![[r#"
        SYNOPSIS:
            test [-hvuc] <files: path...>
              A test command

        OPTIONS:
            -h, --help
              Shows this help text

            -v, --verbose
              help(verbose)

            -u, --unsafe
              help(unsafe)

            -c, --cache <cache: path>
              help(cache)
    "#]]
    .assert_eq(&cmd.help());
}

#[test]
fn help_intermediate() {
    let cmd = trees::deploy_command();
    expect![[r#"
        SYNOPSIS:
            deploy [-ht] [app scale move]

        SUBCOMMANDS:
            deploy app [-hn] <name: string>
              Deploys a single app
            deploy scale [-h] <count: int>?
            deploy move [-h] <point: int int>

        OPTIONS:
            -h, --help
              Shows this help text

            -t, --token <token: string> (required)
              API token
    "#]]
    .assert_eq(&cmd.help());
}

#[test]
fn debug_description() {
    expect![[r#"
        Command<test> {
         - Option<-h, --help>(flag)
         - Option<-v, --verbose>(flag)
         - Option<-u, --unsafe>(flag)
         - Option<-c, --cache>(cache: path)
         > Argument<files: path...>
        }
    "#]]
    .assert_debug_eq(&trees::test_command());

    expect![[r#"
        Command<parent> {
         + Command<child1>
         + Command<child2 | c2>
         - Option<-h, --help>(flag)
         - Option<-p, --parent>(flag)
        }
    "#]]
    .assert_debug_eq(&trees::parent_command());
}
