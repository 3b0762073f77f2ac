use log::{debug, trace};

use crate::graph::Graph;

/// Mutable search bookkeeping, owned by one `find_path` invocation.
/// `visited[v]` is true iff `v` appears in `path`.
struct SearchState {
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl SearchState {
    fn new(n: usize) -> Self {
        SearchState {
            visited: vec![false; n + 1],
            path: Vec::with_capacity(n),
        }
    }

    fn reset(&mut self) {
        self.visited.iter_mut().for_each(|v| *v = false);
        self.path.clear();
    }
}

/// Finds a Hamiltonian path in `graph` — an ordering of all vertices in
/// which every consecutive pair is joined by an edge (respecting direction
/// for directed graphs) — or returns `None` if no such path exists. A `None`
/// result is a definite answer, not a failure: the search runs to exhaustion
/// over every start vertex.
///
/// The search is exhaustive depth-first backtracking with a
/// most-constrained-vertex heuristic: start vertices are tried in
/// ascending-degree order, and at each step unvisited neighbors are explored
/// lowest-degree first. Low-degree vertices constrain the search tree
/// earliest, so dead branches are pruned sooner. The first complete path
/// found is returned; the problem is NP-complete and the worst case is
/// exponential, so this is only suitable for small graphs.
///
/// The result is deterministic: the same graph always yields the same path,
/// since every tie in the degree ordering is broken by ascending label.
/// The input graph is never mutated.
///
/// # Example
/// ```
/// use hampath::Graph;
/// use hampath::graph::hamiltonian;
///
/// // A 4-cycle: 1-2, 2-3, 3-4, 4-1.
/// let mut g = Graph::new(4, false);
/// g.add_edge(1, 2).unwrap();
/// g.add_edge(2, 3).unwrap();
/// g.add_edge(3, 4).unwrap();
/// g.add_edge(4, 1).unwrap();
///
/// assert_eq!(hamiltonian::find_path(&g), Some(vec![1, 2, 3, 4]));
/// ```
pub fn find_path(graph: &Graph) -> Option<Vec<usize>> {
    let n = graph.vertex_count();
    if n == 0 {
        return Some(Vec::new());
    }

    // Degree table, computed once and reused for every ordering decision.
    let mut degree = vec![0usize; n + 1];
    for v in 1..=n {
        degree[v] = graph.degree(v);
    }

    // Neighbor lists re-ordered lowest-degree first. Adjacency is stored
    // sorted by label, so the stable sort breaks degree ties by label.
    let mut ordered: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
    for v in 1..=n {
        let mut nb = graph.neighbors(v).to_vec();
        nb.sort_by_key(|&w| degree[w]);
        ordered[v] = nb;
    }

    let mut starts: Vec<usize> = (1..=n).collect();
    starts.sort_by_key(|&v| degree[v]);

    debug!("searching for Hamiltonian path: n={}, directed={}", n, graph.is_directed());

    let mut state = SearchState::new(n);
    for &start in &starts {
        trace!("attempting start vertex {}", start);
        state.reset();
        if backtrack(start, n, &ordered, &mut state) {
            debug!("found path from start vertex {}", start);
            return Some(state.path.clone());
        }
    }
    debug!("search exhausted: no Hamiltonian path");
    None
}

/// One step of the depth-first search. Commits `u` to the path, recurses into
/// each unvisited neighbor in heuristic order, and undoes the commitment if
/// no extension completes the path.
fn backtrack(u: usize, n: usize, ordered: &[Vec<usize>], state: &mut SearchState) -> bool {
    state.visited[u] = true;
    state.path.push(u);
    if state.path.len() == n {
        return true;
    }
    for &v in &ordered[u] {
        if !state.visited[v] && backtrack(v, n, ordered, state) {
            return true;
        }
    }
    state.visited[u] = false;
    state.path.pop();
    false
}
