pub mod ast;
pub mod check;
pub mod find;
pub mod input;
pub mod matching;
pub mod trace;

#[cfg(test)]
mod find_tests;

use rationl_lib::{Automaton, AutomatonBuilder, Strategy};

/// Engine selection shared by match/find/trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineArgs {
    pub strategy: Strategy,
    pub cache_capacity: Option<usize>,
}

impl EngineArgs {
    pub fn builder(&self) -> AutomatonBuilder {
        let builder = Automaton::builder().strategy(self.strategy);
        match self.cache_capacity {
            Some(capacity) => builder.cache_capacity(capacity),
            None => builder,
        }
    }
}

/// Compile `pattern`, or render the error to stderr and exit with status 1.
pub fn compile_or_exit(pattern: &str, builder: &AutomatonBuilder, color: bool) -> Automaton {
    match builder.build(pattern) {
        Ok(automaton) => automaton,
        Err(e) => {
            eprintln!("{}", e.printer(pattern).path("<pattern>").colored(color).render());
            std::process::exit(1);
        }
    }
}
