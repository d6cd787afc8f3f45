// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! In-place quicksort over a [`Sequence`].
//!
//! The chain order is snapshotted once into a slot array so that a range of
//! nodes becomes a plain index interval `[low, high]`. Partitioning swaps the
//! values held by nodes; nodes are never relinked, so a [`NodeId`] keeps
//! naming the same position in the chain after a sort (but may now hold a
//! different value).
//!
//! Pending ranges go on an explicit stack instead of the call stack. The
//! smaller side is always processed first, which bounds the stack at
//! O(log n) entries.
//!
//! [`NodeId`]: super::NodeId

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::node::SlotIdx;
use super::Sequence;

/// Sort by the element's own ordering.
pub fn sort<T: Ord>(seq: &mut Sequence<T>) {
    sort_by(seq, |a, b| a.cmp(b));
}

/// Sort with a comparator. Not stable.
pub fn sort_by<T, F>(seq: &mut Sequence<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() < 2 {
        return;
    }

    let order = seq.slot_order();
    let mut pending: SmallVec<[(usize, usize); 32]> = SmallVec::new();
    pending.push((0, order.len() - 1));

    while let Some((low, high)) = pending.pop() {
        let boundary = partition(seq, &order, low, high, &mut compare);
        tracing::trace!(low, high, boundary, "partitioned range");

        // Only ranges of two or more elements need more work.
        let left = (boundary >= low + 2).then(|| (low, boundary - 1));
        let right = (boundary + 2 <= high).then(|| (boundary + 1, high));
        match (left, right) {
            (Some(l), Some(r)) => {
                // Push the larger side first so the smaller one pops next.
                if l.1 - l.0 > r.1 - r.0 {
                    pending.push(l);
                    pending.push(r);
                } else {
                    pending.push(r);
                    pending.push(l);
                }
            }
            (Some(l), None) => pending.push(l),
            (None, Some(r)) => pending.push(r),
            (None, None) => {}
        }
    }
}

/// Partition `order[low..=high]` around the value at `low`.
///
/// Returns the boundary position where the pivot ends up: everything before
/// it compares `<=` the pivot and everything after it compares `>`.
fn partition<T, F>(
    seq: &mut Sequence<T>,
    order: &[SlotIdx],
    low: usize,
    high: usize,
    compare: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(low < high);
    let pivot = order[low];
    let mut left = low;
    let mut right = high;

    loop {
        while left != right
            && compare(seq.slot_value(order[left]), seq.slot_value(pivot)) != Ordering::Greater
        {
            left += 1;
        }
        while left != right
            && compare(seq.slot_value(order[right]), seq.slot_value(pivot)) == Ordering::Greater
        {
            right -= 1;
        }
        if left == right {
            break;
        }
        seq.swap_values(order[left], order[right]);
    }

    // left > low here, since the pivot always passes the first scan.
    // (low, left) holds values <= pivot and (left, high] values > pivot;
    // the meeting point itself decides which side the pivot lands on.
    let boundary = if compare(seq.slot_value(pivot), seq.slot_value(order[left])) == Ordering::Less {
        left - 1
    } else {
        left
    };
    seq.swap_values(pivot, order[boundary]);
    return boundary;
}
