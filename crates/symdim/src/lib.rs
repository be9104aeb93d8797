//! Meta crate that re-exports the symdim building blocks. Downstream
//! tracers and operator libraries can depend on this crate and opt into
//! logging through the `tracing` feature.

#[cfg(feature = "common")]
pub use symdim_common as common;

#[cfg(feature = "common")]
pub use symdim_common::{
    ArithOp, MAX_CONCRETE, MIN_BOUND, MIN_CONCRETE, MinBoundNode, Operand, RangeError, SymInt,
    SymIntError, SymNode, SymNodeImpl, check_range, shape,
};

#[cfg(all(test, feature = "common"))]
mod tests {
    use super::*;

    #[test]
    fn reexports_cover_the_tracer_surface() {
        assert!(check_range(MIN_CONCRETE));
        let j = SymInt::from_node(SymNode::new(MinBoundNode::new(11)));
        assert_eq!(j.min_bound_id(), Some(11));
        assert!(j.ge(MIN_BOUND));
        assert!(common::SymInt::new(MAX_CONCRETE).is_ok());
    }
}
