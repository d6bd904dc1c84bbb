//! Thompson construction over the arena AST.
//!
//! Every node becomes a fragment with one entry and one exit state. Exits are
//! always split states so that later wiring can add epsilon edges to them.
//! Traversal uses an explicit task stack, so deeply nested or very long
//! patterns never grow the call stack.
//!
//! Counted repetition is expanded into copies of the child: `a{2,4}` is
//! `aa` followed by two optional `a`s, each with an edge to the common exit.

use rationl_automata::{Nfa, NfaBuilder, StateId, TooManyStates, Transition};
use rationl_core::ByteRange;
use regex_syntax::utf8::Utf8Sequences;

use super::invariants;
use crate::diagnostics::{ErrorKind, PatternError};
use crate::parser::class_set::ClassSet;
use crate::parser::{Ast, Node, NodeId};

#[derive(Clone, Copy, Debug)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

#[derive(Clone, Copy, Debug)]
enum Task {
    /// Build the fragment of a node, scheduling its children first.
    Visit(NodeId),
    /// Children are on the fragment stack; combine them.
    Finish(NodeId),
}

struct Thompson<'a> {
    ast: &'a Ast,
    builder: NfaBuilder,
    tasks: Vec<Task>,
    fragments: Vec<Fragment>,
}

/// Builds the NFA of `ast`, failing once more than `state_limit` states are needed.
pub fn compile_nfa(ast: &Ast, state_limit: usize) -> Result<Nfa, PatternError> {
    let mut thompson = Thompson {
        ast,
        builder: NfaBuilder::new(state_limit),
        tasks: vec![Task::Visit(ast.root())],
        fragments: Vec::new(),
    };

    while let Some(task) = thompson.tasks.pop() {
        let id = match task {
            Task::Visit(id) | Task::Finish(id) => id,
        };
        thompson.run(task).map_err(|e| too_large(ast, id, e.limit))?;
    }

    let root = ast.root();
    let Thompson {
        mut builder,
        mut fragments,
        ..
    } = thompson;
    let fragment = invariants::root_fragment(fragments.pop());
    let accept = builder
        .add_match()
        .map_err(|e| too_large(ast, root, e.limit))?;
    builder.add_epsilon(fragment.exit, accept);
    Ok(builder.build(fragment.entry))
}

fn too_large(ast: &Ast, id: NodeId, limit: usize) -> PatternError {
    PatternError::at(ErrorKind::AutomatonTooLarge, ast.range(id))
        .with_message(format!("pattern needs more than {limit} NFA states"))
}

impl Thompson<'_> {
    fn run(&mut self, task: Task) -> Result<(), TooManyStates> {
        match task {
            Task::Visit(id) => self.visit(id),
            Task::Finish(id) => self.finish(id),
        }
    }

    fn visit(&mut self, id: NodeId) -> Result<(), TooManyStates> {
        let ast = self.ast;
        match ast.node(id) {
            Node::Empty => {
                let s = self.builder.add_empty()?;
                self.fragments.push(Fragment { entry: s, exit: s });
            }
            Node::Literal(c) => {
                let mut buf = [0u8; 4];
                let bytes = c.encode_utf8(&mut buf).as_bytes();
                let exit = self.builder.add_empty()?;
                let mut next = exit;
                for &b in bytes.iter().rev() {
                    next = self
                        .builder
                        .add_bytes(vec![Transition::new(ByteRange::single(b), next)])?;
                }
                self.fragments.push(Fragment { entry: next, exit });
            }
            Node::Class(set) => {
                let fragment = self.class(set)?;
                self.fragments.push(fragment);
            }
            Node::Anchor(look) => {
                let exit = self.builder.add_empty()?;
                let entry = self.builder.add_look(*look, exit)?;
                self.fragments.push(Fragment { entry, exit });
            }
            Node::Group { child, .. } => self.tasks.push(Task::Visit(*child)),
            Node::Concat(children) | Node::Alternate(children) => {
                self.tasks.push(Task::Finish(id));
                self.tasks
                    .extend(children.iter().rev().map(|&c| Task::Visit(c)));
            }
            Node::Repeat { child, min, max } => {
                let copies = repeat_copies(*min, *max);
                // Every copy costs at least one state.
                if copies > self.builder.limit() {
                    return Err(TooManyStates {
                        limit: self.builder.limit(),
                    });
                }
                self.tasks.push(Task::Finish(id));
                self.tasks
                    .extend(std::iter::repeat_n(Task::Visit(*child), copies));
            }
        }
        Ok(())
    }

    fn finish(&mut self, id: NodeId) -> Result<(), TooManyStates> {
        let ast = self.ast;
        let fragment = match ast.node(id) {
            Node::Concat(children) => {
                let parts = self.take(children.len());
                for pair in parts.windows(2) {
                    self.builder.add_epsilon(pair[0].exit, pair[1].entry);
                }
                Fragment {
                    entry: parts[0].entry,
                    exit: parts[parts.len() - 1].exit,
                }
            }
            Node::Alternate(children) => {
                let parts = self.take(children.len());
                let entry = self.builder.add_empty()?;
                let exit = self.builder.add_empty()?;
                for part in &parts {
                    self.builder.add_epsilon(entry, part.entry);
                    self.builder.add_epsilon(part.exit, exit);
                }
                Fragment { entry, exit }
            }
            Node::Repeat { min, max, .. } => {
                let parts = self.take(repeat_copies(*min, *max));
                self.repeat(&parts, *min as usize, *max)?
            }
            other => invariants::no_finish_step(other),
        };
        self.fragments.push(fragment);
        Ok(())
    }

    /// Pops the last `n` fragments, in build order.
    fn take(&mut self, n: usize) -> Vec<Fragment> {
        let at = self.fragments.len() - n;
        self.fragments.split_off(at)
    }

    fn repeat(
        &mut self,
        parts: &[Fragment],
        min: usize,
        max: Option<u32>,
    ) -> Result<Fragment, TooManyStates> {
        if parts.is_empty() {
            // `x{0}` and `x{0,0}` match only the empty string.
            let s = self.builder.add_empty()?;
            return Ok(Fragment { entry: s, exit: s });
        }

        let exit = self.builder.add_empty()?;

        if max.is_none() && min == 0 {
            // x*: the entry either enters x or skips to the exit; x loops back.
            let part = parts[0];
            let entry = self.builder.add_empty()?;
            self.builder.add_epsilon(entry, part.entry);
            self.builder.add_epsilon(entry, exit);
            self.builder.add_epsilon(part.exit, entry);
            return Ok(Fragment { entry, exit });
        }

        let mandatory = &parts[..min];
        for pair in mandatory.windows(2) {
            self.builder.add_epsilon(pair[0].exit, pair[1].entry);
        }

        if max.is_none() {
            // x{m,}: the last mandatory copy repeats itself.
            let last = mandatory[min - 1];
            self.builder.add_epsilon(last.exit, last.entry);
            self.builder.add_epsilon(last.exit, exit);
            return Ok(Fragment {
                entry: mandatory[0].entry,
                exit,
            });
        }

        let (entry, mut cursor) = match mandatory {
            [] => {
                let entry = self.builder.add_empty()?;
                (entry, entry)
            }
            [first, .., last] => (first.entry, last.exit),
            [only] => (only.entry, only.exit),
        };
        for part in &parts[min..] {
            self.builder.add_epsilon(cursor, part.entry);
            self.builder.add_epsilon(cursor, exit);
            cursor = part.exit;
        }
        self.builder.add_epsilon(cursor, exit);
        Ok(Fragment { entry, exit })
    }

    /// One byte-consuming entry state per class; non-ASCII ranges become
    /// chains of continuation-byte states.
    fn class(&mut self, set: &ClassSet) -> Result<Fragment, TooManyStates> {
        let exit = self.builder.add_empty()?;
        let mut transitions = Vec::new();
        for range in set.ranges() {
            for seq in Utf8Sequences::new(range.start, range.end) {
                let seq = seq.as_slice();
                let mut next = exit;
                for r in seq[1..].iter().rev() {
                    next = self
                        .builder
                        .add_bytes(vec![Transition::new(ByteRange::new(r.start, r.end), next)])?;
                }
                transitions.push(Transition::new(ByteRange::new(seq[0].start, seq[0].end), next));
            }
        }
        let entry = self.builder.add_bytes(transitions)?;
        Ok(Fragment { entry, exit })
    }
}

/// How many copies of the child a repetition expands to.
fn repeat_copies(min: u32, max: Option<u32>) -> usize {
    match max {
        Some(max) => max as usize,
        None => min.max(1) as usize,
    }
}
