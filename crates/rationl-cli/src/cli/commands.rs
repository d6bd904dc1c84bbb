//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Input and engine args shared by match/find/trace.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(input_text_arg())
        .arg(strategy_arg())
        .arg(cache_capacity_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rationl")
        .about("Pattern matching on finite automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(match_command())
        .subcommand(find_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .override_usage("  rationl check <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  rationl check 'a(b|c)*'             # silent when the pattern compiles
  rationl check 'a(b'                 # reports the unclosed group"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Show the syntax tree of a pattern.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a pattern")
        .override_usage("  rationl ast <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  rationl ast 'a(b|c)*d'"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Test whether a whole input belongs to the pattern's language.
pub fn match_command() -> Command {
    let cmd = Command::new("match")
        .about("Test whether the whole input matches")
        .override_usage(
            "\
  rationl match <PATTERN> <FILE>
  rationl match <PATTERN> -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rationl match '[0-9]+' -t 12345     # true
  rationl match '[0-9]+' -t 12a45     # false
  cat input | rationl match 'a*' -    # read stdin"#,
        )
        .arg(pattern_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// List every match in an input.
pub fn find_command() -> Command {
    let cmd = Command::new("find")
        .about("List non-overlapping longest matches")
        .override_usage(
            "\
  rationl find <PATTERN> <FILE> [--json]
  rationl find <PATTERN> -t <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  rationl find '[a-z]+' app.log              # start, end and text per line
  rationl find '[a-z]+' app.log --json       # one JSON record per match
  rationl find 'ab|abc' -t xabcx --strategy nfa"#,
        )
        .arg(pattern_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Trace automaton execution for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace automaton execution for debugging")
        .override_usage(
            "\
  rationl trace <PATTERN> <FILE> [-v|-vv]
  rationl trace <PATTERN> -t <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  rationl trace 'ab' -t xab            # matches only
  rationl trace 'ab' -t xab -vv        # every transition
  rationl trace 'ab' -t ab --whole -v  # whole-input match"#,
        )
        .arg(pattern_arg())
        .arg(verbose_arg())
        .arg(whole_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
