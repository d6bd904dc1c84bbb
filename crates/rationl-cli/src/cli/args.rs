//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern to compile (positional, required).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern to compile")
}

/// Input file to search (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file, or - for stdin")
}

/// Inline input text (-t/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline input text")
}

/// Execution engine (--strategy).
pub fn strategy_arg() -> Arg {
    Arg::new("strategy")
        .long("strategy")
        .value_name("ENGINE")
        .default_value("eager")
        .value_parser(["eager", "lazy", "nfa"])
        .help("Execution engine")
}

/// Lazy DFA cache size (--cache-capacity).
pub fn cache_capacity_arg() -> Arg {
    Arg::new("cache_capacity")
        .long("cache-capacity")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("States the lazy engine caches before flushing")
}

/// Emit JSON records (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print matches as JSON")
}

/// Anchor the trace at both ends of the input (--whole).
pub fn whole_arg() -> Arg {
    Arg::new("whole")
        .long("whole")
        .action(ArgAction::SetTrue)
        .help("Trace a whole-input match instead of a search")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
