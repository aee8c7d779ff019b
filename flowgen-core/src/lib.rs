//! Flowgen core library.
//!
//! Generates random max-flow instances: a DAG over vertices `1..=n` whose arcs
//! are sampled independently under a fixed topological order, checked for a
//! path from vertex `1` to vertex `n`, and given random integer capacities
//! when such a path exists.
//!
//! ```
//! use flowgen_core::{GeneratorBuilder, write_instance};
//!
//! let generator = GeneratorBuilder::new()
//!     .with_vertex_count(3)
//!     .with_arc_probability(1.0)
//!     .with_max_capacity(5)
//!     .with_seed(42)
//!     .build()?;
//! let mut buffer = Vec::new();
//! write_instance(&generator.generate(), &mut buffer)?;
//! assert!(buffer.starts_with(b"3 3\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod error;
mod format;
mod generator;
mod graph;
mod instance;
mod reachability;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GeneratorBuilder,
    error::{FormatError, FormatErrorCode, GeneratorError, GeneratorErrorCode, Result},
    format::{INFEASIBLE_SENTINEL, parse_instance, write_instance},
    generator::{Generator, assign_capacities},
    graph::{CandidateGraph, DirectedArc, candidate_pairs},
    instance::{CapacitatedArc, FlowInstance, FlowNetwork},
    reachability::{PathSearch, is_sink_reachable},
};
