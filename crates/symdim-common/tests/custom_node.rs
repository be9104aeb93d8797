//! Node kinds defined outside this crate plug into `SymInt` through the
//! trait alone.

use std::any::Any;

use symdim_common::{
    ArithOp, MinBoundNode, Operand, SymInt, SymIntError, SymNode, SymNodeImpl, shape,
};

/// A named free variable with no known facts.
#[derive(Debug)]
struct Free(&'static str);

impl SymNodeImpl for Free {
    fn sym_eq(&self, other: &Operand<'_>) -> bool {
        other
            .as_node()
            .and_then(|n| n.as_any().downcast_ref::<Free>())
            .is_some_and(|f| f.0 == self.0)
    }

    fn sym_ge(&self, _other: &Operand<'_>) -> bool {
        false
    }

    fn sym_lt(&self, _other: &Operand<'_>) -> bool {
        false
    }

    fn str(&self) -> String {
        self.0.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A node the tracer has already specialised to a literal.
#[derive(Debug)]
struct Pinned(i64);

impl SymNodeImpl for Pinned {
    fn sym_eq(&self, other: &Operand<'_>) -> bool {
        other.as_int() == Some(self.0)
    }

    fn sym_ge(&self, other: &Operand<'_>) -> bool {
        other.as_int().is_some_and(|v| self.0 >= v)
    }

    fn sym_lt(&self, other: &Operand<'_>) -> bool {
        other.as_int().is_some_and(|v| self.0 < v)
    }

    fn constant_int(&self) -> Option<i64> {
        Some(self.0)
    }

    fn mul(&self, other: &Operand<'_>) -> Option<SymNode> {
        let v = other.as_int()?;
        Some(SymNode::new(Pinned(self.0.checked_mul(v)?)))
    }

    fn str(&self) -> String {
        format!("pinned({})", self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn unknown_kinds_are_unequal_and_unprovable() {
    let j = SymInt::from(MinBoundNode::new(1));
    let s = SymInt::from_node(SymNode::new(Free("s0")));

    assert!(j != s);
    assert!(s != j);
    assert!(!j.ge(&s));
    assert!(!s.ge(&j));
    assert!(!j.lt(&s));
    assert!(!s.lt(&j));
    assert!(!s.le(&j));
    assert!(!s.gt(&j));
    assert!(s.is_symbolic());
    assert_eq!(s.min_bound_id(), None);
    assert!(!s.as_node().unwrap().is_minimum_bound_kind());
}

#[test]
fn external_kind_defines_its_own_equality() {
    let a = SymInt::from_node(SymNode::new(Free("s0")));
    let b = SymInt::from_node(SymNode::new(Free("s0")));
    let c = SymInt::from_node(SymNode::new(Free("s1")));
    assert!(a == b);
    assert!(a != c);
    assert_eq!(a.to_string(), "s0");
}

#[test]
fn guard_consults_constant_int() {
    let p = SymInt::from_node(SymNode::new(Pinned(6)));
    assert_eq!(p.guard_int(), Ok(6));
    assert_eq!(
        p.expect_int(),
        Err(SymIntError::DataDependent {
            node: "pinned(6)".to_string()
        })
    );
    assert!(p == 6);
    assert!(6 == p);
    assert!(p.ge(6) && !p.ge(7));
    assert!(SymInt::new(7).unwrap().gt(&p));
    assert!(!SymInt::new(6).unwrap().gt(&p));
    // sym_le is not overridden, so this stays unprovable
    assert!(!SymInt::new(7).unwrap().ge(&p));
}

#[test]
fn arithmetic_hooks_are_dispatched() {
    let p = SymInt::from_node(SymNode::new(Pinned(3)));
    let two = SymInt::new(2).unwrap();

    assert_eq!(p.checked_mul(&two).unwrap().guard_int(), Ok(6));
    assert_eq!(two.checked_mul(&p).unwrap().guard_int(), Ok(6));
    assert_eq!(
        p.checked_add(&two).unwrap_err(),
        SymIntError::Unsupported {
            op: ArithOp::Add,
            node: "pinned(3)".to_string()
        }
    );
    assert!(matches!(
        two.checked_sub(&p),
        Err(SymIntError::Unsupported { op: ArithOp::Sub, .. })
    ));

    let dims = vec![two.clone(), p, SymInt::new(5).unwrap()];
    assert_eq!(shape::numel(&dims).unwrap().guard_int(), Ok(30));
}
