use bitvec::prelude::*;
use std::mem;
use std::ops::Index;

/// Fixed size set of visited marks over `0..size`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
    bit_vec: BitVec,
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            bit_vec: bitvec![0; size],
        }
    }

    /// Sets the bit and reports whether it was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if self.bit_vec[idx] {
            return true;
        }
        self.bit_vec.set(idx, true);
        false
    }
}

impl Index<usize> for BitSet {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.bit_vec.index(index)
    }
}

/// Disjoint-set forest over `0..n` with union by rank and path compression.
/// Tracks the size of every root's component.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
        }
    }

    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets of `left` and `right` and returns the size of the
    /// resulting set.
    pub fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return self.size[left];
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.size[left] += self.size[right];
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.size[left]
    }
}
