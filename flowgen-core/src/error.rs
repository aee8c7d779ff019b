//! Error types for the flowgen core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when validating generation parameters.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The graph must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The invalid vertex count supplied by the caller.
        got: usize,
    },
    /// The number of candidate pairs `n(n-1)/2` does not fit in `usize`.
    #[error("vertex count {vertex_count} yields more candidate arcs than fit in usize")]
    CandidateOverflow {
        /// The vertex count that overflowed.
        vertex_count: usize,
    },
    /// The arc probability was not a finite value in `[0, 1]`.
    #[error("arc probability must be a finite value in [0, 1] (got {got})")]
    InvalidArcProbability {
        /// The rejected probability.
        got: f64,
    },
    /// Capacities are drawn from `[1, r]`, so `r` must be positive.
    #[error("max capacity must be at least 1 (got {got})")]
    InvalidMaxCapacity {
        /// The rejected capacity bound.
        got: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The graph must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "FLOWGEN_INVALID_VERTEX_COUNT",
        /// The number of candidate pairs overflowed.
        CandidateOverflow => CandidateOverflow { .. } => "FLOWGEN_CANDIDATE_OVERFLOW",
        /// The arc probability was outside `[0, 1]` or not finite.
        InvalidArcProbability => InvalidArcProbability { .. } => "FLOWGEN_INVALID_ARC_PROBABILITY",
        /// The maximum capacity was zero.
        InvalidMaxCapacity => InvalidMaxCapacity { .. } => "FLOWGEN_INVALID_MAX_CAPACITY",
    }
}

/// An error produced while reading an instance back from its text form.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FormatError {
    /// The input ended before the named field could be read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEnd {
        /// Description of the field that was expected next.
        expected: &'static str,
    },
    /// A token could not be parsed as a non-negative integer.
    #[error("invalid {field} `{token}`")]
    InvalidNumber {
        /// Description of the field being parsed.
        field: &'static str,
        /// Raw token found in the input.
        token: String,
    },
    /// An arc referenced a vertex outside `[1, n]` or did not go forward.
    #[error("arc {index} ({from} -> {to}) is not a forward arc within 1..={vertex_count}")]
    InvalidArc {
        /// Zero-based position of the arc in the arc list.
        index: usize,
        /// Declared tail vertex.
        from: usize,
        /// Declared head vertex.
        to: usize,
        /// Vertex count from the header.
        vertex_count: usize,
    },
    /// An arc carried a zero capacity.
    #[error("arc {index} has zero capacity")]
    ZeroCapacity {
        /// Zero-based position of the arc in the arc list.
        index: usize,
    },
    /// Input continued after the declared arc list.
    #[error("trailing data after {arc_count} arcs: `{token}`")]
    TrailingData {
        /// Declared number of arcs.
        arc_count: usize,
        /// First unexpected token.
        token: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`FormatError`] variants.
    enum FormatErrorCode for FormatError {
        /// The input ended early.
        UnexpectedEnd => UnexpectedEnd { .. } => "FORMAT_UNEXPECTED_END",
        /// A token was not a valid number.
        InvalidNumber => InvalidNumber { .. } => "FORMAT_INVALID_NUMBER",
        /// An arc was not a forward arc within the vertex range.
        InvalidArc => InvalidArc { .. } => "FORMAT_INVALID_ARC",
        /// An arc carried a zero capacity.
        ZeroCapacity => ZeroCapacity { .. } => "FORMAT_ZERO_CAPACITY",
        /// Data followed the declared arc list.
        TrailingData => TrailingData { .. } => "FORMAT_TRAILING_DATA",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
