use rationl_automata::{Dfa, Nfa};
use rationl_compiler::compile::{CompileOptions, build_nfa, compile_dfa};

use crate::engine::{LazyDfa, Matcher, NoopTracer};

pub fn nfa(pattern: &str) -> Nfa {
    build_nfa(pattern, &CompileOptions::default()).unwrap()
}

pub fn dfa(pattern: &str) -> Dfa {
    compile_dfa(pattern, &CompileOptions::default()).unwrap()
}

/// The same pattern behind each engine: eager, lazy, simulated.
pub fn engines(pattern: &str, cache_capacity: usize) -> [Matcher; 3] {
    [
        Matcher::Dfa(dfa(pattern)),
        Matcher::Lazy(LazyDfa::new(nfa(pattern), cache_capacity)),
        Matcher::Nfa(nfa(pattern)),
    ]
}

pub fn spans(matcher: &Matcher, input: &str) -> Vec<(usize, usize)> {
    matcher
        .find_iter(input.as_bytes(), NoopTracer)
        .map(|s| (s.start, s.end))
        .collect()
}

/// Every string over `alphabet` of length at most `max_len`.
pub fn strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|s| alphabet.iter().map(move |c| format!("{s}{c}")))
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}
