//! Builder utilities for configuring instance generation.
//!
//! Collects raw parameters and validates them before constructing a
//! [`Generator`], so nothing is sampled from an invalid configuration.

use std::num::{NonZeroU64, NonZeroUsize};

use crate::{Result, error::GeneratorError, generator::Generator, graph::candidate_pairs};

const DEFAULT_VERTEX_COUNT: usize = 2;
const DEFAULT_ARC_PROBABILITY: f64 = 0.5;
const DEFAULT_MAX_CAPACITY: u64 = 100;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use flowgen_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(10)
///     .with_arc_probability(0.4)
///     .with_max_capacity(100)
///     .with_seed(1234)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.vertex_count().get(), 10);
/// assert_eq!(generator.seed(), 1234);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    arc_probability: f64,
    max_capacity: u64,
    seed: u64,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            arc_probability: DEFAULT_ARC_PROBABILITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
            seed: 0,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 2);
    /// assert_eq!(builder.max_capacity(), 100);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices `n`.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the arc-inclusion probability `p`.
    #[must_use]
    pub const fn with_arc_probability(mut self, arc_probability: f64) -> Self {
        self.arc_probability = arc_probability;
        self
    }

    /// Returns the configured arc-inclusion probability.
    #[must_use]
    pub const fn arc_probability(&self) -> f64 {
        self.arc_probability
    }

    /// Overrides the upper capacity bound `r`.
    #[must_use]
    pub const fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Returns the configured upper capacity bound.
    #[must_use]
    pub const fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Overrides the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured random seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidVertexCount`] for `n = 0`,
    /// [`GeneratorError::CandidateOverflow`] when `n(n-1)/2` does not fit in
    /// `usize`, [`GeneratorError::InvalidArcProbability`] when `p` is not a
    /// finite value in `[0, 1]`, and [`GeneratorError::InvalidMaxCapacity`]
    /// for `r = 0`.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_arc_probability(1.5)
    ///     .build()
    ///     .expect_err("probability above one is rejected");
    /// assert!(matches!(err, GeneratorError::InvalidArcProbability { .. }));
    /// ```
    pub fn build(self) -> Result<Generator> {
        let vertex_count =
            NonZeroUsize::new(self.vertex_count).ok_or(GeneratorError::InvalidVertexCount {
                got: self.vertex_count,
            })?;
        if candidate_pairs(self.vertex_count).is_none() {
            return Err(GeneratorError::CandidateOverflow {
                vertex_count: self.vertex_count,
            });
        }
        if !(0.0..=1.0).contains(&self.arc_probability) {
            return Err(GeneratorError::InvalidArcProbability {
                got: self.arc_probability,
            });
        }
        let max_capacity =
            NonZeroU64::new(self.max_capacity).ok_or(GeneratorError::InvalidMaxCapacity {
                got: self.max_capacity,
            })?;

        Ok(Generator::new(
            vertex_count,
            self.arc_probability,
            max_capacity,
            self.seed,
        ))
    }
}
