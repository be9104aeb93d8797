//! Symbolic node contract (object-safe) and the shared handle that
//! `SymInt` stores when a dimension is not yet known.
//!
//! Every predicate here is conservative: `true` means proven, `false`
//! means "not proven". Node kinds that do not recognise the other
//! operand must answer `false` rather than fail.

use std::any::Any;
use std::fmt::{self, Debug};
use std::ops::Deref;
use std::sync::Arc;

use crate::scalar::SymInt;

/* ───────────────────────────── Operand ───────────────────────────── */

/// Right-hand side of a node predicate.
///
/// Literals are passed through as-is and are *not* range-checked, so
/// `n < i64::MAX` is a legal query even though `i64::MAX` can never be
/// a concrete `SymInt`.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Int(i64),
    Node(&'a dyn SymNodeImpl),
}

impl<'a> Operand<'a> {
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Operand::Int(v) => Some(*v),
            Operand::Node(_) => None,
        }
    }

    #[inline]
    pub fn as_node(&self) -> Option<&'a dyn SymNodeImpl> {
        match self {
            Operand::Int(_) => None,
            Operand::Node(n) => Some(*n),
        }
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl<'a> From<&'a SymInt> for Operand<'a> {
    fn from(value: &'a SymInt) -> Self {
        value.as_operand()
    }
}

impl<'a> From<&'a SymNode> for Operand<'a> {
    fn from(value: &'a SymNode) -> Self {
        Operand::Node(value.as_dyn())
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{v}"),
            Operand::Node(n) => f.write_str(&n.str()),
        }
    }
}

/* ─────────────────────────── SymNodeImpl ─────────────────────────── */

/// Capability set every symbolic node kind implements.
///
/// Nodes are immutable once built and shared across threads through
/// [`SymNode`], hence the `Send + Sync` bound.
pub trait SymNodeImpl: Debug + Send + Sync + 'static {
    fn sym_eq(&self, other: &Operand<'_>) -> bool;

    fn sym_ne(&self, other: &Operand<'_>) -> bool {
        !self.sym_eq(other)
    }

    /// `self >= other`, if provable.
    fn sym_ge(&self, other: &Operand<'_>) -> bool;

    /// `self < other`, if provable.
    fn sym_lt(&self, other: &Operand<'_>) -> bool;

    /// `self <= other`, if provable.
    fn sym_le(&self, _other: &Operand<'_>) -> bool {
        false
    }

    /// `self > other`, if provable.
    fn sym_gt(&self, _other: &Operand<'_>) -> bool {
        false
    }

    /// Id of a minimum-bound node, `None` for every other kind.
    fn min_bound_id(&self) -> Option<i64> {
        None
    }

    fn is_minimum_bound_kind(&self) -> bool {
        self.min_bound_id().is_some()
    }

    /// A node that has been specialised to a known literal may report it.
    fn constant_int(&self) -> Option<i64> {
        None
    }

    /* arithmetic hooks; `None` means the kind cannot build a result */

    fn add(&self, _other: &Operand<'_>) -> Option<SymNode> {
        None
    }

    fn sub(&self, _other: &Operand<'_>) -> Option<SymNode> {
        None
    }

    fn mul(&self, _other: &Operand<'_>) -> Option<SymNode> {
        None
    }

    /// Diagnostic text. Must be non-empty and stable for a given node.
    fn str(&self) -> String;

    /* down-cast hook */
    fn as_any(&self) -> &dyn Any;
}

/* ───────────────────────────── SymNode ───────────────────────────── */

/// Shared, atomically reference-counted handle to a node.
#[derive(Clone)]
pub struct SymNode(Arc<dyn SymNodeImpl>);

impl SymNode {
    pub fn new<N: SymNodeImpl>(node: N) -> Self {
        Self(Arc::new(node))
    }

    pub fn from_arc(node: Arc<dyn SymNodeImpl>) -> Self {
        Self(node)
    }

    #[inline]
    pub fn as_dyn(&self) -> &dyn SymNodeImpl {
        &*self.0
    }

    /// Borrow the node as a concrete kind.
    pub fn downcast_ref<N: SymNodeImpl>(&self) -> Option<&N> {
        self.0.as_any().downcast_ref::<N>()
    }

    /// Number of live handles sharing this node.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// True when both handles point at the same allocation. This is
    /// object identity; value equality goes through `sym_eq`.
    pub fn ptr_eq(&self, other: &SymNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SymNode {
    type Target = dyn SymNodeImpl;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl Debug for SymNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for SymNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.str())
    }
}

impl From<Arc<dyn SymNodeImpl>> for SymNode {
    fn from(node: Arc<dyn SymNodeImpl>) -> Self {
        Self(node)
    }
}
