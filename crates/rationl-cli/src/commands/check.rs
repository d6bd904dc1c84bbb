//! Validate a pattern.

use rationl_lib::Automaton;

use super::compile_or_exit;

pub struct CheckArgs {
    pub pattern: String,
    pub color: bool,
}

/// Silent on success, like a compiler with nothing to report.
pub fn run(args: CheckArgs) {
    compile_or_exit(&args.pattern, &Automaton::builder(), args.color);
}
