//! Generated max-flow instances.
//!
//! An instance is either a capacitated network in which vertex `n` is
//! reachable from vertex `1`, or the infeasible marker.

/// An arc with its sampled capacity.
///
/// # Examples
/// ```
/// use flowgen_core::CapacitatedArc;
///
/// let arc = CapacitatedArc::new(1, 2, 7);
/// assert_eq!(arc.capacity(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapacitatedArc {
    source: usize,
    target: usize,
    capacity: u64,
}

impl CapacitatedArc {
    /// Creates an arc from `source` to `target` carrying `capacity`.
    #[must_use]
    pub const fn new(source: usize, target: usize, capacity: u64) -> Self {
        Self {
            source,
            target,
            capacity,
        }
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

    /// Returns the arc capacity.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }
}

/// A feasible network: vertices `1..=n` and capacitated arcs in sampling
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowNetwork {
    vertex_count: usize,
    arcs: Vec<CapacitatedArc>,
}

impl FlowNetwork {
    /// Wraps an arc list for a graph with `vertex_count` vertices.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{CapacitatedArc, FlowNetwork};
    ///
    /// let network = FlowNetwork::new(2, vec![CapacitatedArc::new(1, 2, 3)]);
    /// assert_eq!(network.arc_count(), 1);
    /// ```
    #[must_use]
    pub const fn new(vertex_count: usize, arcs: Vec<CapacitatedArc>) -> Self {
        Self { vertex_count, arcs }
    }

    /// Returns `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the arcs in sampling order.
    #[must_use]
    pub fn arcs(&self) -> &[CapacitatedArc] {
        &self.arcs
    }

    /// Returns `m`.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
}

/// Outcome of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowInstance {
    /// Vertex `n` is reachable from vertex `1`; capacities were assigned.
    Feasible(FlowNetwork),
    /// No path from vertex `1` to vertex `n` exists.
    Infeasible,
}

impl FlowInstance {
    /// Returns `true` for [`FlowInstance::Feasible`].
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// Returns the network when the instance is feasible.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::FlowInstance;
    ///
    /// assert!(FlowInstance::Infeasible.network().is_none());
    /// ```
    #[must_use]
    pub const fn network(&self) -> Option<&FlowNetwork> {
        match self {
            Self::Feasible(network) => Some(network),
            Self::Infeasible => None,
        }
    }

    /// Number of emitted arcs; zero for infeasible instances.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.network().map_or(0, FlowNetwork::arc_count)
    }
}
