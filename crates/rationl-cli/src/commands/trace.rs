//! Trace automaton execution for debugging.

use std::path::PathBuf;

use rationl_lib::{Colors, PrintTracer, Verbosity};

use super::input::load_input_or_exit;
use super::{EngineArgs, compile_or_exit};

pub struct TraceArgs {
    pub pattern: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub engine: EngineArgs,
    pub verbosity: Verbosity,
    pub whole: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton = compile_or_exit(&args.pattern, &args.engine.builder(), args.color);
    let input = load_input_or_exit(args.input_path.as_deref(), args.input_text.as_deref());
    let mut tracer = PrintTracer::new(args.verbosity, Colors::new(args.color));

    if args.whole {
        let matched = automaton.matches_traced(&input, &mut tracer);
        tracer.print();
        println!("{}", matched);
        return;
    }

    automaton.find_all_traced(&input, &mut tracer);
    tracer.print();
}
