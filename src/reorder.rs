//! Moving one element within an ordered sequence.

/// Whether `from -> to` is an in-range move for a sequence of `len` items.
pub fn is_valid_move(len: usize, from: usize, to: usize) -> bool {
    from < len && to < len
}

/// Returns a new sequence with the element at `from` relocated to `to`.
///
/// The element is removed first and then inserted at `to` in the shortened
/// sequence, so it ends up at index `to` of the result. The input is never
/// touched; `from == to` yields an equal copy.
///
/// An out-of-range `from` leaves the order unchanged and an out-of-range `to`
/// is clamped to the last slot. Callers that care should check
/// [`is_valid_move`] first.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    if from >= result.len() {
        return result;
    }
    let moved = result.remove(from);
    let to = to.min(result.len());
    result.insert(to, moved);
    result
}
