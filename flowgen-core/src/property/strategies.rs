//! Strategy builders for generation property tests.

use proptest::prelude::*;

use crate::{Generator, GeneratorBuilder};

/// Largest vertex count sampled by the strategies. Kept small so the
/// quadratic candidate enumeration stays cheap per case.
const MAX_VERTICES: usize = 40;

/// Raw parameters for one generation run.
#[derive(Clone, Debug)]
pub(super) struct GenerationCase {
    pub vertex_count: usize,
    pub arc_probability: f64,
    pub max_capacity: u64,
    pub seed: u64,
}

impl GenerationCase {
    pub(super) fn generator(&self) -> Generator {
        match GeneratorBuilder::new()
            .with_vertex_count(self.vertex_count)
            .with_arc_probability(self.arc_probability)
            .with_max_capacity(self.max_capacity)
            .with_seed(self.seed)
            .build()
        {
            Ok(generator) => generator,
            Err(err) => panic!("strategy produced invalid parameters {self:?}: {err}"),
        }
    }
}

/// Probabilities biased towards the boundary values `0` and `1`, which
/// decide feasibility outright for `n > 1`.
fn arc_probability_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        1 => Just(1.0),
        6 => 0.0..=1.0_f64,
    ]
}

pub(super) fn generation_case_strategy() -> impl Strategy<Value = GenerationCase> {
    (
        1..=MAX_VERTICES,
        arc_probability_strategy(),
        1..=1_000_u64,
        any::<u64>(),
    )
        .prop_map(
            |(vertex_count, arc_probability, max_capacity, seed)| GenerationCase {
                vertex_count,
                arc_probability,
                max_capacity,
                seed,
            },
        )
}
