//! Hybrid concrete/symbolic integer used for tensor sizes and strides.
//!
//! A `SymInt` is either a concrete `i64` inside the reserved sub-range
//! `[-2^62, 2^62 - 1]` or a shared handle to a symbolic node. The
//! concrete path is plain integer arithmetic with no allocation; the
//! symbolic path dispatches through [`SymNodeImpl`].
//!
//! Ordering is exposed as explicit `ge`/`lt`/`le`/`gt` methods rather
//! than `PartialOrd`: a `false` answer means "not proven", and the node
//! predicates are not required to form a partial order.

use core::fmt;

use crate::error::{ArithOp, RangeError, SymIntError};
use crate::min_bound::MinBoundNode;
use crate::node::{Operand, SymNode, SymNodeImpl};

const CONCRETE_BITS: u32 = 63;

/// Largest value representable as a concrete `SymInt` (`2^62 - 1`).
pub const MAX_CONCRETE: i64 = (1 << (CONCRETE_BITS - 1)) - 1;
/// Smallest value representable as a concrete `SymInt` (`-2^62`).
pub const MIN_CONCRETE: i64 = -(1 << (CONCRETE_BITS - 1));

/// True when `value` can be stored as a concrete `SymInt`.
#[inline(always)]
pub const fn check_range(value: i64) -> bool {
    value >= MIN_CONCRETE && value <= MAX_CONCRETE
}

#[derive(Clone)]
enum Repr {
    Int(i64),
    Sym(SymNode),
}

#[derive(Clone)]
pub struct SymInt(Repr);

impl SymInt {
    pub const MAX_CONCRETE: i64 = MAX_CONCRETE;
    pub const MIN_CONCRETE: i64 = MIN_CONCRETE;

    pub const ZERO: Self = Self(Repr::Int(0));
    pub const ONE: Self = Self(Repr::Int(1));

    /// Build a concrete scalar, rejecting literals outside the sub-range.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        if !check_range(value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(value, "literal outside concrete range");
            return Err(RangeError::new(value));
        }
        Ok(Self(Repr::Int(value)))
    }

    /// Wrap an existing node handle. Never validated.
    pub fn from_node(node: SymNode) -> Self {
        Self(Repr::Sym(node))
    }

    /// Wrap a fresh minimum-bound node with the given id.
    pub fn from_min_bound(id: i64) -> Self {
        Self::from_node(MinBoundNode::new(id).into_node())
    }

    #[inline(always)]
    pub const fn check_range(value: i64) -> bool {
        check_range(value)
    }

    #[inline(always)]
    pub fn maybe_as_int(&self) -> Option<i64> {
        match &self.0 {
            Repr::Int(v) => Some(*v),
            Repr::Sym(_) => None,
        }
    }

    #[inline(always)]
    pub fn is_symbolic(&self) -> bool {
        matches!(self.0, Repr::Sym(_))
    }

    pub fn as_node(&self) -> Option<&SymNode> {
        match &self.0 {
            Repr::Int(_) => None,
            Repr::Sym(n) => Some(n),
        }
    }

    pub fn to_node(&self) -> Option<SymNode> {
        self.as_node().cloned()
    }

    /// Id of the underlying minimum-bound node, if that is what this is.
    pub fn min_bound_id(&self) -> Option<i64> {
        self.as_node().and_then(|n| n.min_bound_id())
    }

    #[inline]
    pub fn as_operand(&self) -> Operand<'_> {
        match &self.0 {
            Repr::Int(v) => Operand::Int(*v),
            Repr::Sym(n) => Operand::Node(n.as_dyn()),
        }
    }

    /// Concrete value, or `DataDependent` when symbolic.
    pub fn expect_int(&self) -> Result<i64, SymIntError> {
        match &self.0 {
            Repr::Int(v) => Ok(*v),
            Repr::Sym(n) => Err(data_dependent(n)),
        }
    }

    /// Like [`expect_int`](Self::expect_int) but accepts nodes that have
    /// been specialised to a constant.
    pub fn guard_int(&self) -> Result<i64, SymIntError> {
        match &self.0 {
            Repr::Int(v) => Ok(*v),
            Repr::Sym(n) => n.constant_int().ok_or_else(|| data_dependent(n)),
        }
    }

    /* ───────────────────────── ordering ───────────────────────── */

    /// `self >= other` if provable.
    pub fn ge<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match (&self.0, other.into()) {
            (Repr::Int(a), Operand::Int(b)) => *a >= b,
            (Repr::Sym(n), rhs) => n.sym_ge(&rhs),
            (Repr::Int(a), Operand::Node(m)) => m.sym_le(&Operand::Int(*a)),
        }
    }

    /// `self < other` if provable.
    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match (&self.0, other.into()) {
            (Repr::Int(a), Operand::Int(b)) => *a < b,
            (Repr::Sym(n), rhs) => n.sym_lt(&rhs),
            (Repr::Int(a), Operand::Node(m)) => m.sym_gt(&Operand::Int(*a)),
        }
    }

    /// `self <= other` if provable.
    pub fn le<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match (&self.0, other.into()) {
            (Repr::Int(a), Operand::Int(b)) => *a <= b,
            (Repr::Sym(n), rhs) => n.sym_le(&rhs),
            (Repr::Int(a), Operand::Node(m)) => m.sym_ge(&Operand::Int(*a)),
        }
    }

    /// `self > other` if provable.
    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match (&self.0, other.into()) {
            (Repr::Int(a), Operand::Int(b)) => *a > b,
            (Repr::Sym(n), rhs) => n.sym_gt(&rhs),
            (Repr::Int(a), Operand::Node(m)) => m.sym_lt(&Operand::Int(*a)),
        }
    }

    fn sym_eq(&self, other: &Operand<'_>) -> bool {
        match (&self.0, other) {
            (Repr::Int(a), Operand::Int(b)) => a == b,
            (Repr::Sym(n), rhs) => n.sym_eq(rhs),
            (Repr::Int(a), Operand::Node(m)) => m.sym_eq(&Operand::Int(*a)),
        }
    }

    /* ──────────────────────── arithmetic ──────────────────────── */

    pub fn checked_add(&self, other: &SymInt) -> Result<SymInt, SymIntError> {
        self.arith(other, ArithOp::Add, i64::checked_add)
    }

    pub fn checked_sub(&self, other: &SymInt) -> Result<SymInt, SymIntError> {
        self.arith(other, ArithOp::Sub, i64::checked_sub)
    }

    pub fn checked_mul(&self, other: &SymInt) -> Result<SymInt, SymIntError> {
        self.arith(other, ArithOp::Mul, i64::checked_mul)
    }

    fn arith(
        &self,
        other: &SymInt,
        op: ArithOp,
        native: fn(i64, i64) -> Option<i64>,
    ) -> Result<SymInt, SymIntError> {
        match (&self.0, &other.0) {
            (Repr::Int(a), Repr::Int(b)) => {
                let out = native(*a, *b).ok_or(SymIntError::Overflow {
                    op,
                    lhs: *a,
                    rhs: *b,
                })?;
                Ok(SymInt::new(out)?)
            }
            (Repr::Sym(n), _) => node_arith(n, op, &other.as_operand()),
            // Only addition and multiplication commute; `a - n` has no
            // mirrored hook.
            (Repr::Int(a), Repr::Sym(m)) => match op {
                ArithOp::Add | ArithOp::Mul => node_arith(m, op, &Operand::Int(*a)),
                ArithOp::Sub => Err(unsupported(m, op)),
            },
        }
    }
}

fn node_arith(node: &SymNode, op: ArithOp, rhs: &Operand<'_>) -> Result<SymInt, SymIntError> {
    let out = match op {
        ArithOp::Add => node.add(rhs),
        ArithOp::Sub => node.sub(rhs),
        ArithOp::Mul => node.mul(rhs),
    };
    out.map(SymInt::from_node)
        .ok_or_else(|| unsupported(node, op))
}

fn unsupported(node: &SymNode, op: ArithOp) -> SymIntError {
    #[cfg(feature = "tracing")]
    tracing::debug!(node = %node, %op, "symbolic node has no arithmetic hook");
    SymIntError::Unsupported {
        op,
        node: node.str(),
    }
}

fn data_dependent(node: &SymNode) -> SymIntError {
    #[cfg(feature = "tracing")]
    tracing::debug!(node = %node, "guard on symbolic value");
    SymIntError::DataDependent { node: node.str() }
}

/* ─────────────────────────── conversions ─────────────────────────── */

impl TryFrom<i64> for SymInt {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SymNode> for SymInt {
    fn from(node: SymNode) -> Self {
        Self::from_node(node)
    }
}

impl From<MinBoundNode> for SymInt {
    fn from(node: MinBoundNode) -> Self {
        Self::from_node(node.into_node())
    }
}

impl Default for SymInt {
    fn default() -> Self {
        Self::ZERO
    }
}

/* ─────────────────────────── equality ─────────────────────────── */

impl PartialEq for SymInt {
    fn eq(&self, other: &Self) -> bool {
        self.sym_eq(&other.as_operand())
    }
}

impl PartialEq<i64> for SymInt {
    fn eq(&self, other: &i64) -> bool {
        self.sym_eq(&Operand::Int(*other))
    }
}

impl PartialEq<SymInt> for i64 {
    fn eq(&self, other: &SymInt) -> bool {
        other == self
    }
}

/* ─────────────────────────── formatting ─────────────────────────── */

impl fmt::Debug for SymInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Int(v) => f.debug_tuple("SymInt").field(v).finish(),
            Repr::Sym(n) => f.debug_tuple("SymInt").field(n).finish(),
        }
    }
}

impl fmt::Display for SymInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Int(v) => write!(f, "{v}"),
            Repr::Sym(n) => write!(f, "{n}"),
        }
    }
}
