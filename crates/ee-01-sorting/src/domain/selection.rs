//! Selection sort
//!
//! INVARIANTS:
//! - INVARIANT-1: Output is non-decreasing
//! - INVARIANT-2: Output is a permutation of the input
//!
//! Selection sort is NOT stable: swapping the minimum into place can move an
//! element past others that compare equal to it.

/// Sort `a` ascending in place using selection sort.
///
/// For each position `i`, scans `a[i..]` left to right for the minimum. The
/// running minimum is only replaced by strictly smaller values, so the first
/// occurrence wins ties. The minimum is then swapped into `a[i]`.
///
/// Always O(n²) comparisons and O(n) swaps.
pub fn selection_sort<T: PartialOrd>(a: &mut [T]) {
    let len = a.len();
    for i in 0..len.saturating_sub(1) {
        let mut smallest = i;
        for j in (i + 1)..len {
            if a[j] < a[smallest] {
                smallest = j;
            }
        }
        a.swap(i, smallest);
    }
}
