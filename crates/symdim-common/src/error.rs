//! Error types for hybrid scalar construction, guards and arithmetic.
//!
//! - **`RangeError`** : a literal fell outside the concrete sub-range
//! - **`SymIntError`**: everything a `SymInt` operation can report,
//!   with `RangeError` folded in as one variant
//!
//! Comparisons never produce errors. An ordering query that cannot be
//! proven answers `false`, which callers must read as "not proven".

use thiserror::Error;

use crate::scalar::{MAX_CONCRETE, MIN_CONCRETE};

/// A literal could not be stored as a concrete `SymInt`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("value {value} is outside the concrete range [{}, {}]", MIN_CONCRETE, MAX_CONCRETE)]
pub struct RangeError {
    pub value: i64,
}

impl RangeError {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

/// Arithmetic operations a node may be asked to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum SymIntError {
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A concrete value was required but the scalar is symbolic.
    #[error("cannot extract a concrete value from symbolic node {node}")]
    DataDependent { node: String },

    /// The node kind has no hook for the requested arithmetic.
    #[error("symbolic node {node} does not support {op}")]
    Unsupported { op: ArithOp, node: String },

    /// Native `i64` overflow on the concrete path.
    #[error("{op} overflowed: {lhs} {op} {rhs}")]
    Overflow { op: ArithOp, lhs: i64, rhs: i64 },
}
