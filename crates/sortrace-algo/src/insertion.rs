//! Insertion sort.
//!
//! The key at `i` is held aside while larger elements shift right one slot at
//! a time (one `shift` frame each). Writing the key into the gap emits an
//! `insert` frame highlighting the gap and the key's old position.

use sortrace_core::{Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut gap = i;
        while gap > 0 && arr[gap - 1] > key {
            arr[gap] = arr[gap - 1];
            rec.emit(arr, &[gap - 1, gap], Phase::Shift);
            gap -= 1;
        }
        arr[gap] = key;
        rec.emit(arr, &[gap, i], Phase::Insert);
    }
}
