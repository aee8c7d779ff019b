//! Support library for the flowgen CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can run them without spawning a subprocess.

pub mod cli;
pub mod logging;
