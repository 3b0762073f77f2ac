pub mod builder;
pub mod hamiltonian;

use crate::error::{GraphError, Result};

/// A simple unweighted graph with vertices labeled `1..=n`.
///
/// Adjacency lists are kept sorted ascending by neighbor label, and duplicate
/// edges are preserved as duplicate entries. For undirected graphs each edge
/// is stored in both endpoint lists; for directed graphs only `u -> v` is
/// recorded. Once built (see [`builder`]) a graph is never mutated.
#[derive(Clone, Debug)]
pub struct Graph {
    /// `adj[v]` lists the neighbors of `v`; index 0 is unused.
    adj: Vec<Vec<usize>>,
    n: usize,
    directed: bool,
}

impl Graph {
    /// Create a graph with `n` isolated vertices labeled `1..=n`.
    pub fn new(n: usize, directed: bool) -> Self {
        Graph {
            adj: vec![Vec::new(); n + 1],
            n,
            directed,
        }
    }

    /// Add an edge `u -> v` (and `v -> u` when undirected).
    ///
    /// Both endpoints must lie in `1..=n`. Neighbor lists stay sorted; a
    /// repeated edge adds a second entry rather than being deduplicated.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Self::insert_sorted(&mut self.adj[u], v);
        if !self.directed {
            Self::insert_sorted(&mut self.adj[v], u);
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Neighbors of `v`, sorted ascending by label.
    ///
    /// # Panics
    /// Panics if `v` is not in `1..=n`.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        assert!(v >= 1 && v <= self.n, "vertex label out of range");
        &self.adj[v]
    }

    /// Out-degree of `v` (neighbor-list length).
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < 1 || v > self.n {
            return Err(GraphError::VertexOutOfRange {
                vertex: v as i64,
                n: self.n,
            });
        }
        Ok(())
    }

    fn insert_sorted(list: &mut Vec<usize>, v: usize) {
        let pos = list.partition_point(|&w| w <= v);
        list.insert(pos, v);
    }
}
