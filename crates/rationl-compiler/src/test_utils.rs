//! Test helpers shared by the parser and pass tests.

use rationl_automata::closure::{contains_match, epsilon_closure, reclose, step};
use rationl_automata::{Boundary, Dfa, Nfa, SparseSet};

use crate::compile::{self, CompileOptions};
use crate::{PatternError, parse};

/// AST dump of a pattern that must parse.
pub fn ast(pattern: &str) -> String {
    match parse(pattern) {
        Ok(ast) => ast.dump(),
        Err(e) => panic!("expected `{pattern}` to parse, got: {e}"),
    }
}

/// The parse error of a pattern that must fail.
pub fn parse_error(pattern: &str) -> PatternError {
    match parse(pattern) {
        Ok(ast) => panic!("expected `{pattern}` to fail, got:\n{}", ast.dump()),
        Err(e) => e,
    }
}

/// One-line summary: kind, position and message.
pub fn error_line(pattern: &str) -> String {
    let e = parse_error(pattern);
    format!("{:?} at {}: {}", e.kind, e.position, e.message())
}

/// Rendered report, uncolored.
pub fn rendered(pattern: &str) -> String {
    parse_error(pattern).printer(pattern).render()
}

pub fn nfa(pattern: &str) -> Nfa {
    let ast = parse(pattern).expect("pattern should parse");
    compile::compile_nfa(&ast, CompileOptions::default().nfa_size_limit).expect("nfa should build")
}

/// Fully optimized DFA with default limits.
pub fn dfa(pattern: &str) -> Dfa {
    compile::compile_dfa(pattern, &CompileOptions::default()).expect("dfa should build")
}

/// Whole-input acceptance by walking the DFA table.
pub fn dfa_accepts(dfa: &Dfa, input: &str) -> bool {
    let state = input
        .bytes()
        .fold(dfa.start(true), |state, b| dfa.next_state(state, b));
    dfa.is_accepting_at_eof(state)
}

/// Whole-input acceptance by simulating the NFA directly.
pub fn nfa_accepts(nfa: &Nfa, input: &str) -> bool {
    let mut current = SparseSet::new(nfa.len());
    let mut next = SparseSet::new(nfa.len());
    let mut stack = Vec::new();
    let start = Boundary::start(true);
    epsilon_closure(nfa, nfa.start(), start, &mut current, &mut stack);
    let mut boundary = start;
    for b in input.bytes() {
        next.clear();
        step(nfa, current.as_slice(), b, Boundary::INTERIOR, &mut next, &mut stack);
        std::mem::swap(&mut current, &mut next);
        boundary = Boundary::INTERIOR;
    }
    next.clear();
    reclose(nfa, current.as_slice(), boundary.with_end(), &mut next, &mut stack);
    contains_match(nfa, next.as_slice())
}

/// Every string over `alphabet` up to `max_len` characters, shortest first.
pub fn strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}
