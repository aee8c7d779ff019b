//! Random arc sampling over a fixed topological order.
//!
//! Vertices are numbered `1..=n` and arcs only ever point from a lower to a
//! higher number, so every sampled graph is acyclic by construction.

use rand::{Rng, distributions::Standard};

/// A sampled arc without a capacity.
///
/// # Examples
/// ```
/// use flowgen_core::DirectedArc;
///
/// let arc = DirectedArc::new(1, 3);
/// assert_eq!((arc.source(), arc.target()), (1, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedArc {
    source: usize,
    target: usize,
}

impl DirectedArc {
    /// Creates an arc from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the tail vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the head vertex.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }
}

/// Number of candidate pairs `(i, j)` with `1 <= i < j <= n`.
///
/// This is also the exact number of uniform draws [`CandidateGraph::sample`]
/// consumes. Returns `None` when the count does not fit in `usize`.
///
/// # Examples
/// ```
/// use flowgen_core::candidate_pairs;
///
/// assert_eq!(candidate_pairs(0), Some(0));
/// assert_eq!(candidate_pairs(1), Some(0));
/// assert_eq!(candidate_pairs(4), Some(6));
/// assert_eq!(candidate_pairs(usize::MAX), None);
/// ```
#[must_use]
pub const fn candidate_pairs(vertex_count: usize) -> Option<usize> {
    let predecessor = vertex_count.saturating_sub(1);
    // One of n and n - 1 is even, so halve that one first.
    if vertex_count % 2 == 0 {
        (vertex_count / 2).checked_mul(predecessor)
    } else {
        vertex_count.checked_mul(predecessor / 2)
    }
}

/// A random DAG over vertices `1..=n` before capacities are assigned.
///
/// Arcs are kept twice: once as a flat list in sampling order and once as a
/// successor list per vertex. Both orders are ascending, so the flat list is
/// sorted lexicographically by `(source, target)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateGraph {
    vertex_count: usize,
    arcs: Vec<DirectedArc>,
    // Indexed by vertex id; slot 0 is unused.
    successors: Vec<Vec<usize>>,
}

impl CandidateGraph {
    /// Samples each pair `(i, j)` with `i < j` independently with probability
    /// `arc_probability`.
    ///
    /// Pairs are visited with `i` ascending in the outer loop and `j`
    /// ascending in the inner loop. Exactly one uniform `[0, 1)` value is
    /// drawn per pair whatever the probability, so a given seed always
    /// advances `rng` by the same amount for the same `vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{CandidateGraph, DirectedArc};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let graph = CandidateGraph::sample(3, 1.0, &mut rng);
    /// assert_eq!(
    ///     graph.arcs(),
    ///     &[DirectedArc::new(1, 2), DirectedArc::new(1, 3), DirectedArc::new(2, 3)]
    /// );
    /// assert_eq!(graph.successors(1), &[2, 3]);
    /// ```
    pub fn sample<R: Rng>(vertex_count: usize, arc_probability: f64, rng: &mut R) -> Self {
        let mut arcs = Vec::new();
        let mut successors = vec![Vec::new(); vertex_count.saturating_add(1)];

        for (source, targets) in successors.iter_mut().enumerate().skip(1) {
            for target in (source + 1)..=vertex_count {
                let draw: f64 = rng.sample(Standard);
                if draw < arc_probability {
                    arcs.push(DirectedArc::new(source, target));
                    targets.push(target);
                }
            }
        }

        Self {
            vertex_count,
            arcs,
            successors,
        }
    }

    /// Builds a graph from an explicit arc list.
    ///
    /// Arcs that do not point forward within `1..=vertex_count` are ignored.
    /// The flat list keeps the given order and successor lists follow it.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{CandidateGraph, DirectedArc};
    ///
    /// let graph = CandidateGraph::from_arcs(3, [DirectedArc::new(1, 3), DirectedArc::new(3, 1)]);
    /// assert_eq!(graph.arc_count(), 1);
    /// assert_eq!(graph.successors(1), &[3]);
    /// ```
    #[must_use]
    pub fn from_arcs(vertex_count: usize, arcs: impl IntoIterator<Item = DirectedArc>) -> Self {
        let mut successors = vec![Vec::new(); vertex_count.saturating_add(1)];
        let arcs = arcs
            .into_iter()
            .filter(|arc| {
                let forward = arc.source >= 1 && arc.source < arc.target;
                forward && arc.target <= vertex_count
            })
            .inspect(|arc| {
                if let Some(targets) = successors.get_mut(arc.source) {
                    targets.push(arc.target);
                }
            })
            .collect();

        Self {
            vertex_count,
            arcs,
            successors,
        }
    }

    /// Returns `n`, the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the sampled arcs in sampling order.
    #[must_use]
    pub fn arcs(&self) -> &[DirectedArc] {
        &self.arcs
    }

    /// Returns `m`, the number of sampled arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the heads of all arcs leaving `vertex`, ascending.
    ///
    /// Vertices outside `1..=n` have no successors.
    #[must_use]
    pub fn successors(&self, vertex: usize) -> &[usize] {
        self.successors.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }
}
