//! Moore partition refinement.
//!
//! States start out grouped by their acceptance flags. Each round splits a
//! block when its members disagree on which blocks their transitions lead
//! to, until a round leaves the block count unchanged.

use indexmap::IndexMap;
use rationl_automata::{DEAD, Dfa, DfaBuilder, StateFlags, StateId};

pub fn minimize(dfa: &Dfa) -> Dfa {
    let len = dfa.state_count();

    let mut seeds: IndexMap<StateFlags, u32> = IndexMap::new();
    let mut block: Vec<u32> = dfa
        .state_ids()
        .map(|id| {
            let next = seeds.len() as u32;
            *seeds.entry(dfa.flags(id)).or_insert(next)
        })
        .collect();
    let mut count = seeds.len();

    loop {
        let mut signatures: IndexMap<(u32, Vec<u32>), u32> = IndexMap::new();
        let refined: Vec<u32> = dfa
            .state_ids()
            .map(|id| {
                let row = dfa.row(id).iter().map(|to| block[to.as_usize()]).collect();
                let next = signatures.len() as u32;
                *signatures
                    .entry((block[id.as_usize()], row))
                    .or_insert(next)
            })
            .collect();
        block = refined;
        if signatures.len() == count {
            break;
        }
        count = signatures.len();
    }

    // One state per block, numbered by first member; DEAD's block stays 0.
    let dead_block = block[DEAD.as_usize()];
    let mut builder = DfaBuilder::new(dfa.classes().clone());
    let mut ids: Vec<Option<StateId>> = vec![None; count];
    let mut representative: Vec<StateId> = Vec::with_capacity(count);
    ids[dead_block as usize] = Some(DEAD);
    for id in dfa.state_ids() {
        let b = block[id.as_usize()] as usize;
        if ids[b].is_none() {
            ids[b] = Some(builder.add_state(dfa.flags(id)));
            representative.push(id);
        }
    }

    let resolve = |id: StateId| ids[block[id.as_usize()] as usize].unwrap_or(DEAD);
    for &old in &representative {
        let new = resolve(old);
        for (class, &to) in dfa.row(old).iter().enumerate() {
            builder.set_transition(new, class, resolve(to));
        }
    }

    debug_assert!(len >= builder.state_count());
    builder.build(resolve(dfa.start(true)), resolve(dfa.start(false)))
}
