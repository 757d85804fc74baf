//! Order invariants shared by the sorts, their tests and the benchmark CLI

/// INVARIANT-1: every adjacent pair is non-decreasing.
pub fn is_sorted_ascending<T: PartialOrd>(a: &[T]) -> bool {
    a.windows(2).all(|pair| pair[0] <= pair[1])
}

/// INVARIANT-2: `a` and `b` hold the same multiset of values.
pub fn is_permutation_of<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut left = a.to_vec();
    let mut right = b.to_vec();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_ascending() {
        assert!(is_sorted_ascending::<i32>(&[]));
        assert!(is_sorted_ascending(&[1]));
        assert!(is_sorted_ascending(&[1, 1, 2, 5]));
        assert!(!is_sorted_ascending(&[2, 1]));
    }

    #[test]
    fn test_is_permutation_of() {
        assert!(is_permutation_of(&[3, 1, 2], &[1, 2, 3]));
        assert!(is_permutation_of::<u8>(&[], &[]));
        assert!(!is_permutation_of(&[1, 1, 2], &[1, 2, 2]), "Multiplicity must match");
        assert!(!is_permutation_of(&[1, 2], &[1, 2, 3]), "Length must match");
    }
}
