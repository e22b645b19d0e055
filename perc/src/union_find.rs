/// Weighted quick-union with path compression over the indices `0..len`.
///
/// `find` and `union` run in amortized near-constant time: trees are linked
/// by size, and every `find` halves the path it walks.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `len` singleton components, each element its own root.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the canonical root of the component containing `p`.
    ///
    /// # Panics
    ///
    /// If `p` >= `len`. Callers validate indices before touching the
    /// structure.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            // path halving: point p one level higher up the tree
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Merges the components containing `p` and `q`, linking the smaller
    /// tree under the larger. No-op if they are already one component.
    pub fn union(&mut self, p: usize, q: usize) {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }
}

////////////////////////////////////////////////////////////////////////////////
