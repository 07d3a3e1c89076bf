//! Top-down merge sort.
//!
//! Each range `[left, right]` with more than one element records a `split`
//! frame before descending into its halves. The merge that follows writes one
//! element at a time (`merge` frame highlighting destination and source) and
//! ends with a `merged` frame over the whole range.

use sortrace_core::{Bounds, Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let right = arr.len() - 1;
    sort_range(arr, 0, right, rec);
}

fn sort_range<T: Sortable>(arr: &mut [T], left: usize, right: usize, rec: &mut Recorder<T>) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    rec.emit_with_bounds(
        arr,
        &[left, mid, right],
        Phase::Split,
        Bounds::new(left, mid, right),
    );

    sort_range(arr, left, mid, rec);
    sort_range(arr, mid + 1, right, rec);
    merge(arr, left, mid, right, rec);
}

fn merge<T: Sortable>(arr: &mut [T], left: usize, mid: usize, right: usize, rec: &mut Recorder<T>) {
    let lower = arr[left..=mid].to_vec();
    let upper = arr[mid + 1..=right].to_vec();

    let (mut i, mut j) = (0, 0);
    let mut k = left;

    // `<=` takes from the lower half on ties, which keeps the sort stable.
    while i < lower.len() && j < upper.len() {
        if lower[i] <= upper[j] {
            arr[k] = lower[i];
            rec.emit(arr, &[k, left + i], Phase::Merge);
            i += 1;
        } else {
            arr[k] = upper[j];
            rec.emit(arr, &[k, mid + 1 + j], Phase::Merge);
            j += 1;
        }
        k += 1;
    }

    while i < lower.len() {
        arr[k] = lower[i];
        rec.emit(arr, &[k, left + i], Phase::Merge);
        i += 1;
        k += 1;
    }

    while j < upper.len() {
        arr[k] = upper[j];
        rec.emit(arr, &[k, mid + 1 + j], Phase::Merge);
        j += 1;
        k += 1;
    }

    rec.emit_with_bounds(
        arr,
        &[left, mid, right],
        Phase::Merged,
        Bounds::new(left, mid, right),
    );
}
