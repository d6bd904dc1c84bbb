//! Dead state elimination.
//!
//! A state is useful when it is reachable from a start state and can still
//! reach acceptance. NFA pruning drops every other state and renumbers the
//! rest densely. DFA pruning folds hopeless states into `DEAD` so a scan can
//! stop as soon as no match is possible.

use rationl_automata::{DEAD, Dfa, DfaBuilder, Nfa, NfaBuilder, State, StateId, Transition};
use smallvec::SmallVec;

use super::invariants;

/// Forward reachability from `roots` over a successor function, by worklist.
fn reachable<I>(len: usize, roots: &[StateId], successors: impl Fn(StateId) -> I) -> Vec<bool>
where
    I: IntoIterator<Item = StateId>,
{
    let mut seen = vec![false; len];
    let mut queue: Vec<StateId> = roots.to_vec();
    while let Some(id) = queue.pop() {
        if std::mem::replace(&mut seen[id.as_usize()], true) {
            continue;
        }
        queue.extend(successors(id));
    }
    seen
}

/// States that can reach one of `targets`, computed on reversed edges.
fn co_reachable(edges: &[(StateId, StateId)], len: usize, targets: &[StateId]) -> Vec<bool> {
    let mut preds: Vec<Vec<StateId>> = vec![Vec::new(); len];
    for &(from, to) in edges {
        preds[to.as_usize()].push(from);
    }
    reachable(len, targets, |id| preds[id.as_usize()].clone())
}

/// Removes NFA states that lie on no path from the start to a match.
///
/// The start state always survives, so an NFA whose language is empty keeps
/// a start state without any way out.
pub fn prune_nfa(nfa: &Nfa) -> Nfa {
    let len = nfa.len();
    let forward = reachable(len, &[nfa.start()], |id| {
        nfa.state(id).successors().collect::<Vec<_>>()
    });

    let mut edges = Vec::new();
    let mut matches = Vec::new();
    for (i, state) in nfa.states().iter().enumerate() {
        let from = StateId::from_usize(i);
        edges.extend(state.successors().map(|to| (from, to)));
        if matches!(state, State::Match) {
            matches.push(from);
        }
    }
    let backward = co_reachable(&edges, len, &matches);

    let mut remap: Vec<Option<StateId>> = vec![None; len];
    let mut kept = 0usize;
    for i in 0..len {
        if (forward[i] && backward[i]) || i == nfa.start().as_usize() {
            remap[i] = Some(StateId::from_usize(kept));
            kept += 1;
        }
    }

    let mut builder = NfaBuilder::new(kept.max(1));
    for (i, state) in nfa.states().iter().enumerate() {
        if remap[i].is_none() {
            continue;
        }
        let state = match state {
            State::Bytes { transitions } => State::Bytes {
                transitions: transitions
                    .iter()
                    .filter_map(|t| {
                        remap[t.next.as_usize()].map(|next| Transition::new(t.range, next))
                    })
                    .collect(),
            },
            State::Split { targets } => State::Split {
                targets: targets
                    .iter()
                    .filter_map(|t| remap[t.as_usize()])
                    .collect::<SmallVec<_>>(),
            },
            State::Look { look, next } => match remap[next.as_usize()] {
                Some(next) => State::Look { look: *look, next },
                // Only the forced start can point nowhere.
                None => State::Split {
                    targets: SmallVec::new(),
                },
            },
            State::Match => State::Match,
        };
        invariants::push_kept(&mut builder, state);
    }

    let start = remap[nfa.start().as_usize()].unwrap_or(StateId::new(0));
    builder.build(start)
}

/// Folds states that can never accept into `DEAD` and drops unreachable ones.
pub fn prune_dfa(dfa: &Dfa) -> Dfa {
    let len = dfa.state_count();
    let starts = [dfa.start(true), dfa.start(false)];
    let forward = reachable(len, &starts, |id| dfa.row(id).to_vec());

    let edges: Vec<(StateId, StateId)> = dfa
        .state_ids()
        .flat_map(|from| dfa.row(from).iter().map(move |&to| (from, to)))
        .collect();
    let accepting: Vec<StateId> = dfa
        .state_ids()
        .filter(|&id| dfa.flags(id).can_accept())
        .collect();
    let live = co_reachable(&edges, len, &accepting);

    let mut builder = DfaBuilder::new(dfa.classes().clone());
    let mut remap = vec![DEAD; len];
    for id in dfa.state_ids().skip(1) {
        let i = id.as_usize();
        if forward[i] && live[i] {
            remap[i] = builder.add_state(dfa.flags(id));
        }
    }
    for id in dfa.state_ids().skip(1) {
        let from = remap[id.as_usize()];
        if from == DEAD {
            continue;
        }
        for (class, &to) in dfa.row(id).iter().enumerate() {
            builder.set_transition(from, class, remap[to.as_usize()]);
        }
    }

    builder.build(remap[starts[0].as_usize()], remap[starts[1].as_usize()])
}
