//! Quick sort with Lomuto partitioning around the last element.
//!
//! Ranges are processed from an explicit work stack in the same pre-order the
//! recursive formulation visits them, so an already sorted input (the
//! quadratic worst case) cannot exhaust the call stack.

use sortrace_core::{Bounds, Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let mut pending = vec![(0, arr.len() - 1)];

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(arr, low, high, rec);
        rec.emit_with_bounds(
            arr,
            &[low, pivot, high],
            Phase::Partitioned,
            Bounds::new(low, pivot, high),
        );

        // Upper range first so the lower range is popped next.
        pending.push((pivot + 1, high));
        if pivot > low {
            pending.push((low, pivot - 1));
        }
    }
}

/// Partitions `arr[low..=high]` around `arr[high]` and returns the pivot's
/// final index.
fn partition<T: Sortable>(arr: &mut [T], low: usize, high: usize, rec: &mut Recorder<T>) -> usize {
    let pivot = arr[high];
    let mut store = low;

    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(store, j);
            rec.emit(arr, &[store, j], Phase::Swap);
            store += 1;
        }
    }

    arr.swap(store, high);
    rec.emit(arr, &[store, high], Phase::Swap);
    store
}

#[cfg(test)]
mod tests {
    use crate::Strategy;
    use sortrace_core::{Bounds, Phase, SnapshotMode, TraceConfig};

    #[test]
    fn first_partition_is_recorded_with_bounds() {
        let outcome = Strategy::Quick.run(&[3, 6, 1, 5, 4]).unwrap();
        assert_eq!(outcome.sorted, vec![1, 3, 4, 5, 6]);

        // Pivot 4: 3 and 1 are <= 4, so it lands at index 2.
        let first_partition = outcome
            .trace
            .iter()
            .find(|f| f.phase == Phase::Partitioned)
            .unwrap();
        assert_eq!(first_partition.bounds, Some(Bounds::new(0, 2, 4)));
        assert_eq!(first_partition.highlights(), &[0, 2, 4]);
        assert_eq!(first_partition.snapshot(), Some(&[3, 1, 4, 5, 6][..]));
    }

    #[test]
    fn swap_frames_match_lomuto_scan() {
        let outcome = Strategy::Quick.run(&[2, 1]).unwrap();
        let frames = outcome.trace.frames();
        // 2 > 1, so no scan swap; pivot moves from 1 to 0.
        assert_eq!(frames[0].phase, Phase::Swap);
        assert_eq!(frames[0].highlights(), &[0, 1]);
        assert_eq!(frames[0].snapshot(), Some(&[1, 2][..]));
        assert_eq!(frames[1].phase, Phase::Partitioned);
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn sorted_input_hits_worst_case_without_overflow() {
        let input: Vec<u32> = (0..1_000).collect();
        let config = TraceConfig::default().with_snapshots(SnapshotMode::IndicesOnly);
        let outcome = Strategy::Quick.run_with(&input, &config).unwrap();
        assert_eq!(outcome.sorted, input);
        assert_eq!(outcome.trace.count(Phase::Partitioned), 999);
    }

    #[test]
    fn ranges_visited_in_recursive_preorder() {
        let outcome = Strategy::Quick.run(&[5, 3, 8, 1, 9, 2, 7]).unwrap();
        let lows: Vec<(usize, usize)> = outcome
            .trace
            .iter()
            .filter_map(|f| f.bounds.map(|b| (b.left, b.right)))
            .collect();
        // Pivot 7 lands at 4; left [0,3] is fully handled before right [5,6].
        assert_eq!(lows[0], (0, 6));
        let right_at = lows.iter().position(|&r| r == (5, 6)).unwrap();
        assert!(lows[1..right_at].iter().all(|&(_, high)| high <= 3));
    }
}
