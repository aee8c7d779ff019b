//! Property-based tests for the generation pipeline.
//!
//! Checks determinism under a fixed seed, arc ordering and capacity bounds,
//! agreement between the depth-first reachability check and a breadth-first
//! oracle, and that arc sampling consumes a draw count fixed by `n` alone.

mod invariants;
mod strategies;
