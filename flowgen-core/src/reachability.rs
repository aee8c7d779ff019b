//! Depth-first reachability over a [`CandidateGraph`].
//!
//! The search keeps an explicit frontier of `(vertex, cursor)` frames instead
//! of recursing, so its depth is bounded by heap memory rather than the call
//! stack. Frames resume their successor list where they left off, which keeps
//! the visitation order identical to the recursive formulation.

use tracing::debug;

use crate::graph::CandidateGraph;

/// A suspended vertex on the DFS frontier.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Scratch state for answering reachability queries against one graph.
///
/// The visited markers and the frontier are owned by the search and reset at
/// the start of every query.
///
/// # Examples
/// ```
/// use flowgen_core::{CandidateGraph, DirectedArc, PathSearch};
///
/// let graph = CandidateGraph::from_arcs(4, [DirectedArc::new(1, 2), DirectedArc::new(2, 4)]);
/// let mut search = PathSearch::new(&graph);
/// assert!(search.reaches(1, 4));
/// assert!(!search.reaches(1, 3));
/// ```
#[derive(Debug)]
pub struct PathSearch<'a> {
    graph: &'a CandidateGraph,
    visited: Vec<bool>,
    frontier: Vec<Frame>,
}

impl<'a> PathSearch<'a> {
    /// Prepares a search over `graph`.
    #[must_use]
    pub fn new(graph: &'a CandidateGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_count().saturating_add(1)],
            frontier: Vec::new(),
        }
    }

    /// Returns `true` when `target` can be reached from `source` by following
    /// arcs forward.
    ///
    /// `target` matches as soon as the search enters it, before the visited
    /// marker is consulted. A query with `source == target` therefore succeeds
    /// without marking anything, even when the vertex has no arcs at all.
    /// Entering an already-visited vertex is a dead end, not an error.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{CandidateGraph, PathSearch};
    ///
    /// let graph = CandidateGraph::from_arcs(1, []);
    /// assert!(PathSearch::new(&graph).reaches(1, 1));
    /// ```
    pub fn reaches(&mut self, source: usize, target: usize) -> bool {
        self.visited.fill(false);
        self.frontier.clear();

        if self.enter(source, target) {
            return true;
        }
        while let Some(frame) = self.frontier.last_mut() {
            let Some(&next) = self.graph.successors(frame.vertex).get(frame.cursor) else {
                self.frontier.pop();
                continue;
            };
            frame.cursor += 1;
            if self.enter(next, target) {
                return true;
            }
        }
        false
    }

    /// Number of vertices marked during the most recent query.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|seen| **seen).count()
    }

    fn enter(&mut self, vertex: usize, target: usize) -> bool {
        if vertex == target {
            return true;
        }
        if let Some(seen) = self.visited.get_mut(vertex)
            && !*seen
        {
            *seen = true;
            self.frontier.push(Frame { vertex, cursor: 0 });
        }
        false
    }
}

/// Returns `true` when vertex `n` is reachable from vertex `1`.
///
/// # Examples
/// ```
/// use flowgen_core::{CandidateGraph, DirectedArc, is_sink_reachable};
///
/// let feasible = CandidateGraph::from_arcs(3, [DirectedArc::new(1, 2), DirectedArc::new(2, 3)]);
/// assert!(is_sink_reachable(&feasible));
///
/// let infeasible = CandidateGraph::from_arcs(3, [DirectedArc::new(2, 3)]);
/// assert!(!is_sink_reachable(&infeasible));
/// ```
#[must_use]
pub fn is_sink_reachable(graph: &CandidateGraph) -> bool {
    let mut search = PathSearch::new(graph);
    let reachable = search.reaches(1, graph.vertex_count());
    debug!(
        vertices = graph.vertex_count(),
        visited = search.visited_count(),
        reachable,
        "reachability check finished"
    );
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::graph::DirectedArc;

    fn graph(vertex_count: usize, arcs: &[(usize, usize)]) -> CandidateGraph {
        CandidateGraph::from_arcs(
            vertex_count,
            arcs.iter()
                .map(|&(source, target)| DirectedArc::new(source, target)),
        )
    }

    #[rstest]
    #[case::single_arc(2, &[(1, 2)], true)]
    #[case::no_arcs(2, &[], false)]
    #[case::chain(4, &[(1, 2), (2, 3), (3, 4)], true)]
    #[case::broken_chain(4, &[(1, 2), (3, 4)], false)]
    #[case::sink_only_reachable_from_middle(3, &[(2, 3)], false)]
    #[case::detour(5, &[(1, 3), (1, 2), (2, 5)], true)]
    fn reaches_matches_expected(
        #[case] vertex_count: usize,
        #[case] arcs: &[(usize, usize)],
        #[case] expected: bool,
    ) {
        assert_eq!(is_sink_reachable(&graph(vertex_count, arcs)), expected);
    }

    #[rstest]
    fn single_vertex_graph_reaches_itself_without_visiting() {
        let single = graph(1, &[]);
        let mut search = PathSearch::new(&single);
        assert!(search.reaches(1, 1));
        assert_eq!(search.visited_count(), 0);
    }

    #[rstest]
    fn search_stops_at_first_path_in_adjacency_order() {
        // 1 -> 2 -> 3 is exhausted before 1 -> 4 is tried.
        let detour = graph(4, &[(1, 2), (1, 4), (2, 3)]);
        let mut search = PathSearch::new(&detour);
        assert!(search.reaches(1, 4));
        assert_eq!(search.visited_count(), 3);

        let direct = graph(4, &[(1, 4), (1, 2), (2, 3)]);
        let mut search = PathSearch::new(&direct);
        assert!(search.reaches(1, 4));
        assert_eq!(search.visited_count(), 1);
    }

    #[rstest]
    fn shared_successors_are_expanded_once() {
        let diamond = graph(5, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let mut search = PathSearch::new(&diamond);
        assert!(!search.reaches(1, 5));
        assert_eq!(search.visited_count(), 4);
    }

    #[rstest]
    fn queries_reset_visited_markers() {
        let chain = graph(3, &[(1, 2), (2, 3)]);
        let mut search = PathSearch::new(&chain);
        assert!(search.reaches(2, 3));
        assert!(search.reaches(1, 3));
        assert!(!search.reaches(3, 1));
        assert_eq!(search.visited_count(), 1);
    }

    #[rstest]
    fn out_of_range_source_reaches_nothing() {
        let chain = graph(3, &[(1, 2), (2, 3)]);
        assert!(!PathSearch::new(&chain).reaches(7, 3));
    }

    #[rstest]
    fn long_chains_do_not_exhaust_the_stack() {
        let vertex_count = 200_000;
        let chain = CandidateGraph::from_arcs(
            vertex_count,
            (1..vertex_count).map(|source| DirectedArc::new(source, source + 1)),
        );
        assert!(is_sink_reachable(&chain));
    }
}
