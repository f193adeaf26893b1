//! Disjoint-set forest (union-find) over integer indices
//!
//! Backs the clustering engine: records become indices, shared field
//! values become unions, and connected components fall out of `find`.

/// Array-backed union-find with path compression and union by size
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Create `n` singleton sets over indices `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Number of elements in the forest
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest has no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of the set containing `i`.
    ///
    /// Two iterative passes: walk to the root, then re-parent every node
    /// on the walked path directly to it. Recursion would overflow the
    /// stack on long uncompressed chains.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `i` and `j`.
    ///
    /// Attaches the smaller set's root under the larger's; on equal sizes
    /// `i`'s root survives. No-op when already in the same set.
    pub fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return;
        }

        if self.size[root_i] < self.size[root_j] {
            self.parent[root_i] = root_j;
            self.size[root_j] += self.size[root_i];
        } else {
            self.parent[root_j] = root_i;
            self.size[root_i] += self.size[root_j];
        }
    }

    /// Number of elements in the set containing `i`
    pub fn set_size(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_singletons() {
        let mut dsu = DisjointSet::new(4);
        assert_eq!(dsu.len(), 4);
        for i in 0..4 {
            assert_eq!(dsu.find(i), i);
            assert_eq!(dsu.set_size(i), 1);
        }
    }

    #[test]
    fn test_union_merges_sets() {
        let mut dsu = DisjointSet::new(4);
        dsu.union(0, 1);
        assert_eq!(dsu.find(0), dsu.find(1));
        assert_ne!(dsu.find(0), dsu.find(2));
        assert_eq!(dsu.set_size(1), 2);
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut dsu = DisjointSet::new(3);
        dsu.union(0, 1);
        dsu.union(1, 0);
        dsu.union(0, 1);
        assert_eq!(dsu.set_size(0), 2);
        assert_eq!(dsu.set_size(2), 1);
    }

    #[test]
    fn test_transitive_merge() {
        let mut dsu = DisjointSet::new(5);
        dsu.union(0, 1);
        dsu.union(2, 3);
        dsu.union(1, 3);
        let root = dsu.find(0);
        for i in 1..4 {
            assert_eq!(dsu.find(i), root);
        }
        assert_eq!(dsu.set_size(0), 4);
        assert_eq!(dsu.find(4), 4);
    }

    #[test]
    fn test_equal_size_tie_keeps_first_root() {
        let mut dsu = DisjointSet::new(2);
        dsu.union(0, 1);
        assert_eq!(dsu.find(1), 0);
    }

    #[test]
    fn test_smaller_set_attaches_under_larger() {
        let mut dsu = DisjointSet::new(4);
        dsu.union(0, 1);
        dsu.union(0, 2);
        // {0,1,2} has size 3, {3} has size 1: 3's root must move
        dsu.union(3, 0);
        assert_eq!(dsu.find(3), 0);
        assert_eq!(dsu.set_size(0), 4);
    }

    #[test]
    fn test_find_compresses_walked_path() {
        let mut dsu = DisjointSet::new(4);
        // Build the chain 3 -> 2 -> 1 -> 0 by hand
        dsu.parent[3] = 2;
        dsu.parent[2] = 1;
        dsu.parent[1] = 0;
        dsu.size[0] = 4;

        assert_eq!(dsu.find(3), 0);
        assert_eq!(dsu.parent[3], 0);
        assert_eq!(dsu.parent[2], 0);
        assert_eq!(dsu.parent[1], 0);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let n = 200_000;
        let mut dsu = DisjointSet::new(n);
        // Worst-case chain before any compression
        for i in (1..n).rev() {
            dsu.parent[i] = i - 1;
        }
        dsu.size[0] = n;

        assert_eq!(dsu.find(n - 1), 0);
        assert_eq!(dsu.set_size(n - 1), n);
    }
}
