// src/graph/ordering.rs
//! In-place partition sort for `(item, weight)` pairs.
//!
//! Orders ascending by the second component. Not stable. Runs of equal
//! weights are grouped in a single pass, and incomparable weights (NaN)
//! land with the pivot's group.

/// Sorts `items` ascending by their second component.
pub fn quick_sort<K, W: PartialOrd>(items: &mut [(K, W)]) {
    let mut slice = items;
    // Recurse into the smaller side, loop on the larger one to bound stack depth.
    while slice.len() > 1 {
        let (lt, gt) = partition(slice);
        let (left, rest) = std::mem::take(&mut slice).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

/// Three-way partition around a median-of-three pivot.
///
/// Returns `(lt, gt)`: `items[..lt]` is below the pivot, `items[lt..gt]`
/// equals it and `items[gt..]` is above it.
#[allow(clippy::indexing_slicing)] // Guarded: callers pass slices of len >= 2
fn partition<K, W: PartialOrd>(items: &mut [(K, W)]) -> (usize, usize) {
    let pivot = median_of_three(items);
    items.swap(0, pivot);

    // items[lt] always holds an element equal to the pivot.
    let (mut lt, mut i, mut gt) = (0, 1, items.len());
    while i < gt {
        if items[i].1 < items[lt].1 {
            items.swap(lt, i);
            lt += 1;
            i += 1;
        } else if items[lt].1 < items[i].1 {
            gt -= 1;
            items.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}

#[allow(clippy::indexing_slicing)]
fn median_of_three<K, W: PartialOrd>(items: &[(K, W)]) -> usize {
    let last = items.len() - 1;
    let mid = last / 2;
    let less = |a: usize, b: usize| items[a].1 < items[b].1;

    if less(0, mid) {
        if less(mid, last) {
            mid
        } else if less(0, last) {
            last
        } else {
            0
        }
    } else if less(0, last) {
        0
    } else if less(mid, last) {
        last
    } else {
        mid
    }
}
