//! Whole-input membership test.

use std::path::PathBuf;

use super::input::load_input_or_exit;
use super::{EngineArgs, compile_or_exit};

pub struct MatchArgs {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub engine: EngineArgs,
    pub color: bool,
}

/// Prints `true` or `false` and exits 0 either way.
pub fn run(args: MatchArgs) {
    let automaton = compile_or_exit(&args.pattern, &args.engine.builder(), args.color);
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    println!("{}", automaton.matches(&input));
}
