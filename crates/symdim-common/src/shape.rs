//! Slice-level helpers over `[SymInt]` for shape and stride vectors.

use crate::error::{RangeError, SymIntError};
use crate::scalar::SymInt;

/// Build concrete scalars from literals, failing on the first one that is
/// out of range.
pub fn from_ints(values: &[i64]) -> Result<Vec<SymInt>, RangeError> {
    values.iter().map(|&v| SymInt::new(v)).collect()
}

/// All values when every entry is concrete, otherwise `None`.
pub fn as_int_vec(dims: &[SymInt]) -> Option<Vec<i64>> {
    dims.iter().map(SymInt::maybe_as_int).collect()
}

pub fn has_symbolic(dims: &[SymInt]) -> bool {
    dims.iter().any(SymInt::is_symbolic)
}

/// Like [`as_int_vec`] but reports which node blocked the conversion.
pub fn expect_ints(dims: &[SymInt]) -> Result<Vec<i64>, SymIntError> {
    dims.iter().map(SymInt::expect_int).collect()
}

/// Product of all entries. An empty shape has one element.
pub fn numel(dims: &[SymInt]) -> Result<SymInt, SymIntError> {
    dims.iter()
        .try_fold(SymInt::ONE, |acc, d| acc.checked_mul(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_shape_helpers() {
        let dims = from_ints(&[2, 3, 4]).unwrap();
        assert!(!has_symbolic(&dims));
        assert_eq!(as_int_vec(&dims), Some(vec![2, 3, 4]));
        assert_eq!(expect_ints(&dims), Ok(vec![2, 3, 4]));
        assert_eq!(numel(&dims).unwrap(), 24);
        assert_eq!(numel(&[]).unwrap(), 1);
    }

    #[test]
    fn from_ints_stops_at_first_bad_value() {
        let err = from_ints(&[1, i64::MIN, i64::MAX]).unwrap_err();
        assert_eq!(err, RangeError::new(i64::MIN));
    }

    #[test]
    fn ragged_shape() {
        let dims = vec![SymInt::ONE, SymInt::from_min_bound(0), SymInt::new(8).unwrap()];
        assert!(has_symbolic(&dims));
        assert_eq!(as_int_vec(&dims), None);
        assert_eq!(
            expect_ints(&dims),
            Err(SymIntError::DataDependent {
                node: "j0".to_string()
            })
        );
        assert!(matches!(numel(&dims), Err(SymIntError::Unsupported { .. })));
    }
}
