//! Union-find over the dense ids `0..n`, with union by rank and path compression.

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets, each element its own leader with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Rank of the tree rooted at `v`. Only meaningful for leaders.
    ///
    /// Panics when `v` is out of range.
    pub fn rank(&self, v: usize) -> u32 {
        self.rank[v]
    }

    /// Leader of the set containing `v`.
    ///
    /// Panics when `v` is out of range.
    pub fn find(&mut self, v: usize) -> usize {
        let parent = self.parent[v];
        if parent == v || self.parent[parent] == parent {
            return parent;
        }

        let mut path = Vec::new();
        let mut root = v;
        while self.parent[root] != root {
            path.push(root);
            root = self.parent[root];
        }
        for node in path {
            self.parent[node] = root;
        }
        root
    }

    /// Merges the sets of `u` and `v`. Returns `false` when they already share a leader.
    ///
    /// On a rank tie `u`'s leader is kept and promoted.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let lu = self.find(u);
        let lv = self.find(v);
        if lu == lv {
            return false;
        }
        match self.rank[lu].cmp(&self.rank[lv]) {
            std::cmp::Ordering::Less => self.parent[lu] = lv,
            std::cmp::Ordering::Greater => self.parent[lv] = lu,
            std::cmp::Ordering::Equal => {
                self.parent[lv] = lu;
                self.rank[lu] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }
}
