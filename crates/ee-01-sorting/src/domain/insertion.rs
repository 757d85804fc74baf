//! Insertion sort
//!
//! INVARIANTS:
//! - INVARIANT-1: Output is non-decreasing
//! - INVARIANT-2: Output is a permutation of the input
//! - INVARIANT-3: Equal elements keep their relative order (stable)

/// Sort `a` ascending in place using insertion sort.
///
/// For each position `i`, the element at `i` is the reference value. Every
/// preceding element strictly greater than it moves one slot to the right,
/// and the reference value lands in the vacated slot. The scan stops at the
/// first element that is not greater, so equal elements are never reordered.
///
/// Worst case O(n²) on reverse-sorted input, O(n) on sorted input.
/// Empty and single-element slices are left untouched.
pub fn insertion_sort<T: PartialOrd>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j - 1] > a[i] {
            j -= 1;
        }
        // Shift a[j..i] right by one and drop the reference value into a[j].
        a[j..=i].rotate_right(1);
    }
}
