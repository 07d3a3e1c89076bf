//! Bubble sort.
//!
//! Every adjacent pair visited produces a `compare` frame; a pair that is out
//! of order is swapped and produces a second frame on the same indices. Only
//! a strict `>` triggers a swap, so equal elements never cross.

use sortrace_core::{Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let n = arr.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            rec.emit(arr, &[j, j + 1], Phase::Compare);
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                rec.emit(arr, &[j, j + 1], Phase::Swap);
            }
        }
    }
}
