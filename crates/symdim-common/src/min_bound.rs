//! Minimum-bound symbolic node.
//!
//! Models a ragged or grouped dimension whose exact size is unknown but
//! is structurally guaranteed to be at least 2. The id is assigned by
//! the tracing layer; two nodes with the same id denote the same
//! quantity even when they are separate allocations.

use std::any::Any;

use crate::node::{Operand, SymNode, SymNodeImpl};

/// Lower bound every minimum-bound node satisfies.
pub const MIN_BOUND: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinBoundNode {
    id: i64,
}

impl MinBoundNode {
    /// The caller vouches that the value behind `id` is `>= 2`; this is
    /// not checked and ids are not deduplicated.
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    #[inline(always)]
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn into_node(self) -> SymNode {
        SymNode::new(self)
    }
}

impl SymNodeImpl for MinBoundNode {
    fn sym_eq(&self, other: &Operand<'_>) -> bool {
        match other {
            Operand::Node(n) => n.min_bound_id() == Some(self.id),
            Operand::Int(_) => false,
        }
    }

    // Only literals the bound dominates are provable. Node operands,
    // this node included, are never provable.
    fn sym_ge(&self, other: &Operand<'_>) -> bool {
        matches!(other, Operand::Int(1 | MIN_BOUND))
    }

    fn sym_lt(&self, _other: &Operand<'_>) -> bool {
        false
    }

    fn sym_le(&self, _other: &Operand<'_>) -> bool {
        false
    }

    fn sym_gt(&self, other: &Operand<'_>) -> bool {
        matches!(other, Operand::Int(1))
    }

    fn min_bound_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn str(&self) -> String {
        format!("j{}", self.id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<MinBoundNode> for SymNode {
    fn from(node: MinBoundNode) -> Self {
        node.into_node()
    }
}
