//! Plain-text encoding of [`FlowInstance`] values.
//!
//! A feasible instance is written as a `"<n> <m>"` header followed by one
//! `"<source> <target> <capacity>"` line per arc, every line terminated by a
//! newline. An infeasible instance is the bare sentinel `-1` with no trailing
//! newline. This is the layout max-flow solvers read their input from.

use std::io::{self, Write};
use std::str::{FromStr, SplitAsciiWhitespace};

use crate::{
    error::FormatError,
    instance::{CapacitatedArc, FlowInstance, FlowNetwork},
};

/// Text written for an infeasible instance.
pub const INFEASIBLE_SENTINEL: &str = "-1";

/// Writes `instance` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use flowgen_core::{CapacitatedArc, FlowInstance, FlowNetwork, write_instance};
///
/// let network = FlowNetwork::new(2, vec![CapacitatedArc::new(1, 2, 9)]);
/// let mut buffer = Vec::new();
/// write_instance(&FlowInstance::Feasible(network), &mut buffer)?;
/// assert_eq!(buffer, b"2 1\n1 2 9\n");
///
/// let mut buffer = Vec::new();
/// write_instance(&FlowInstance::Infeasible, &mut buffer)?;
/// assert_eq!(buffer, b"-1");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_instance(instance: &FlowInstance, mut writer: impl Write) -> io::Result<()> {
    match instance {
        FlowInstance::Feasible(network) => {
            writeln!(writer, "{} {}", network.vertex_count(), network.arc_count())?;
            for arc in network.arcs() {
                writeln!(
                    writer,
                    "{} {} {}",
                    arc.source(),
                    arc.target(),
                    arc.capacity()
                )?;
            }
        }
        FlowInstance::Infeasible => writer.write_all(INFEASIBLE_SENTINEL.as_bytes())?,
    }
    Ok(())
}

/// Reads an instance previously produced by [`write_instance`].
///
/// Tokens may be separated by any ASCII whitespace. Every arc must point
/// forward within `1..=n` and carry a positive capacity, and nothing may
/// follow the declared arc list.
///
/// # Errors
/// Returns [`FormatError`] when the input is truncated, contains
/// non-numeric tokens, declares invalid arcs, or has trailing data.
///
/// # Examples
/// ```
/// use flowgen_core::{FlowInstance, parse_instance};
///
/// let instance = parse_instance("3 2\n1 2 4\n2 3 5\n")?;
/// assert_eq!(instance.arc_count(), 2);
/// assert_eq!(parse_instance("-1")?, FlowInstance::Infeasible);
/// # Ok::<(), flowgen_core::FormatError>(())
/// ```
pub fn parse_instance(input: &str) -> Result<FlowInstance, FormatError> {
    let mut tokens = input.split_ascii_whitespace();

    let first = tokens.next().ok_or(FormatError::UnexpectedEnd {
        expected: "vertex count",
    })?;
    if first == INFEASIBLE_SENTINEL {
        ensure_exhausted(&mut tokens, 0)?;
        return Ok(FlowInstance::Infeasible);
    }

    let vertex_count: usize = parse_token(first, "vertex count")?;
    let arc_count: usize = next_number(&mut tokens, "arc count")?;
    let mut arcs = Vec::with_capacity(arc_count.min(input.len()));
    for index in 0..arc_count {
        let from: usize = next_number(&mut tokens, "arc source")?;
        let to: usize = next_number(&mut tokens, "arc target")?;
        let capacity: u64 = next_number(&mut tokens, "arc capacity")?;
        if from == 0 || from >= to || to > vertex_count {
            return Err(FormatError::InvalidArc {
                index,
                from,
                to,
                vertex_count,
            });
        }
        if capacity == 0 {
            return Err(FormatError::ZeroCapacity { index });
        }
        arcs.push(CapacitatedArc::new(from, to, capacity));
    }
    ensure_exhausted(&mut tokens, arc_count)?;

    Ok(FlowInstance::Feasible(FlowNetwork::new(vertex_count, arcs)))
}

fn next_number<T: FromStr>(
    tokens: &mut SplitAsciiWhitespace<'_>,
    field: &'static str,
) -> Result<T, FormatError> {
    let token = tokens
        .next()
        .ok_or(FormatError::UnexpectedEnd { expected: field })?;
    parse_token(token, field)
}

fn parse_token<T: FromStr>(token: &str, field: &'static str) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        field,
        token: token.to_owned(),
    })
}

fn ensure_exhausted(
    tokens: &mut SplitAsciiWhitespace<'_>,
    arc_count: usize,
) -> Result<(), FormatError> {
    match tokens.next() {
        None => Ok(()),
        Some(token) => Err(FormatError::TrailingData {
            arc_count,
            token: token.to_owned(),
        }),
    }
}
