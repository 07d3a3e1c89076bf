//! Counting sort, and the stable distribution pass radix sort reuses.
//!
//! A pass runs four phases, each with its own phase tag: tally every element
//! (`count`), turn the table into prefix sums (`accumulate`), place elements
//! into an output buffer scanning the input backwards (`build`), and copy the
//! buffer back (`copy`). The backwards scan is what keeps equal keys in input
//! order.

use sortrace_core::{Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let max = arr.iter().map(|&v| slot_of(v)).max().unwrap_or(0);
    tracing::trace!(max, "counting pass");
    distribute(arr, max + 1, slot_of, rec);
}

/// Table slot of a validated element.
pub(crate) fn slot_of<T: Sortable>(value: T) -> usize {
    value.to_count_index().unwrap_or(0)
}

/// One stable counting pass over `arr` using a table of `table_len` entries.
///
/// `key` must map every element below `table_len`. `build` frames snapshot
/// the output buffer, which starts out filled with `T::default()`.
pub(crate) fn distribute<T, F>(arr: &mut [T], table_len: usize, key: F, rec: &mut Recorder<T>)
where
    T: Sortable,
    F: Fn(T) -> usize,
{
    let mut counts = vec![0usize; table_len];

    for i in 0..arr.len() {
        let slot = key(arr[i]);
        counts[slot] += 1;
        rec.emit_with_slot(arr, &[i], Phase::Count, slot);
    }

    // Entry 0 is already its own prefix sum.
    for slot in 1..table_len {
        counts[slot] += counts[slot - 1];
        rec.emit_with_slot(arr, &[], Phase::Accumulate, slot);
    }

    let mut output = vec![T::default(); arr.len()];
    for i in (0..arr.len()).rev() {
        let slot = key(arr[i]);
        counts[slot] -= 1;
        let dest = counts[slot];
        output[dest] = arr[i];
        rec.emit_with_slot(&output, &[i, dest], Phase::Build, slot);
    }

    for i in 0..arr.len() {
        arr[i] = output[i];
        rec.emit(arr, &[i], Phase::Copy);
    }
}
