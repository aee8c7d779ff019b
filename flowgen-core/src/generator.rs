//! Instance generation pipeline.
//!
//! Samples a candidate graph, checks that the sink is reachable, and only then
//! draws capacities. Every random value comes from one explicitly passed
//! source, in a fixed order: arc draws first, capacity draws second.

use std::num::{NonZeroU64, NonZeroUsize};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    graph::CandidateGraph,
    instance::{CapacitatedArc, FlowInstance, FlowNetwork},
    reachability::is_sink_reachable,
};

/// Entry point for generating max-flow instances.
///
/// # Examples
/// ```
/// use flowgen_core::{FlowInstance, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(3)
///     .with_arc_probability(1.0)
///     .with_max_capacity(5)
///     .with_seed(42)
///     .build()
///     .expect("builder must succeed");
/// let FlowInstance::Feasible(network) = generator.generate() else {
///     panic!("a complete DAG is always feasible");
/// };
/// assert_eq!(network.arc_count(), 3);
/// assert!(network.arcs().iter().all(|arc| (1..=5).contains(&arc.capacity())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    vertex_count: NonZeroUsize,
    arc_probability: f64,
    max_capacity: NonZeroU64,
    seed: u64,
}

impl Generator {
    pub(crate) const fn new(
        vertex_count: NonZeroUsize,
        arc_probability: f64,
        max_capacity: NonZeroU64,
        seed: u64,
    ) -> Self {
        Self {
            vertex_count,
            arc_probability,
            max_capacity,
            seed,
        }
    }

    /// Returns `n`.
    #[must_use]
    pub const fn vertex_count(&self) -> NonZeroUsize {
        self.vertex_count
    }

    /// Returns `p`.
    #[must_use]
    pub const fn arc_probability(&self) -> f64 {
        self.arc_probability
    }

    /// Returns `r`.
    #[must_use]
    pub const fn max_capacity(&self) -> NonZeroU64 {
        self.max_capacity
    }

    /// Returns the seed used by [`Self::generate`].
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates an instance from a [`SmallRng`] seeded with [`Self::seed`].
    ///
    /// Repeated calls return identical instances.
    #[must_use]
    #[instrument(
        name = "core.generate",
        skip(self),
        fields(
            vertices = self.vertex_count.get(),
            arc_probability = self.arc_probability,
            max_capacity = self.max_capacity.get(),
            seed = self.seed,
        ),
    )]
    pub fn generate(&self) -> FlowInstance {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates an instance drawing every random value from `rng`.
    ///
    /// Arc sampling consumes exactly `n(n-1)/2` uniform draws. Capacities are
    /// drawn afterwards, in arc order, only when vertex `n` is reachable from
    /// vertex `1`; an infeasible graph leaves `rng` right after the arc draws.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{FlowInstance, GeneratorBuilder};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_vertex_count(2)
    ///     .with_arc_probability(0.0)
    ///     .build()
    ///     .expect("builder must succeed");
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// assert_eq!(generator.generate_with(&mut rng), FlowInstance::Infeasible);
    /// ```
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> FlowInstance {
        let graph = CandidateGraph::sample(self.vertex_count.get(), self.arc_probability, rng);

        if !is_sink_reachable(&graph) {
            info!(
                arcs = graph.arc_count(),
                feasible = false,
                "sink unreachable from source; emitting infeasible marker"
            );
            return FlowInstance::Infeasible;
        }

        let network = assign_capacities(&graph, self.max_capacity, rng);
        info!(
            arcs = network.arc_count(),
            feasible = true,
            "generated feasible instance"
        );
        FlowInstance::Feasible(network)
    }
}

/// Draws one capacity in `[1, max_capacity]` per arc of `graph`, in arc order.
///
/// # Examples
/// ```
/// use std::num::NonZeroU64;
///
/// use flowgen_core::{CandidateGraph, DirectedArc, assign_capacities};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = CandidateGraph::from_arcs(2, [DirectedArc::new(1, 2)]);
/// let mut rng = SmallRng::seed_from_u64(0);
/// let network = assign_capacities(&graph, NonZeroU64::MIN, &mut rng);
/// assert_eq!(network.arcs()[0].capacity(), 1);
/// ```
pub fn assign_capacities<R: Rng>(
    graph: &CandidateGraph,
    max_capacity: NonZeroU64,
    rng: &mut R,
) -> FlowNetwork {
    let arcs = graph
        .arcs()
        .iter()
        .map(|arc| {
            let capacity = rng.gen_range(1..=max_capacity.get());
            CapacitatedArc::new(arc.source(), arc.target(), capacity)
        })
        .collect();
    FlowNetwork::new(graph.vertex_count(), arcs)
}
