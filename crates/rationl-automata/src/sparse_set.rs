//! Sparse set of state ids with O(1) insert, membership and clear.
//!
//! See <https://research.swtch.com/sparse>. Iteration follows insertion
//! order, which keeps epsilon closures deterministic.

use crate::StateId;

#[derive(Clone, Debug)]
pub struct SparseSet {
    len: usize,
    /// Members in insertion order.
    dense: Vec<StateId>,
    /// `sparse[id]` is the position of `id` in `dense` when it is a member.
    sparse: Vec<u32>,
}

impl SparseSet {
    /// Ids must be below `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            len: 0,
            dense: vec![StateId::default(); capacity],
            sparse: vec![0; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `id` was not already present.
    #[inline]
    pub fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        debug_assert!(
            self.len < self.capacity(),
            "SparseSet overflow: len={}, capacity={}",
            self.len,
            self.capacity()
        );
        self.dense[self.len] = id;
        self.sparse[id.as_usize()] = self.len as u32;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, id: StateId) -> bool {
        let Some(&slot) = self.sparse.get(id.as_usize()) else {
            return false;
        };
        let slot = slot as usize;
        slot < self.len && self.dense[slot] == id
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.dense[..self.len].iter().copied()
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.dense[..self.len]
    }
}
