//! LSD radix sort on decimal digits.
//!
//! Each digit position (`exp = 1, 10, 100, ...`) runs a full stable counting
//! pass over a ten-entry table until `max / exp` reaches zero. Every pass
//! appends its own count/accumulate/build/copy block to the same trace.

use sortrace_core::{Recorder, Sortable};

use crate::counting::{distribute, slot_of};

const RADIX: usize = 10;

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let max = arr.iter().map(|&v| slot_of(v)).max().unwrap_or(0);

    let mut exp: usize = 1;
    while max / exp > 0 {
        tracing::trace!(exp, "radix digit pass");
        distribute(arr, RADIX, |v| (slot_of(v) / exp) % RADIX, rec);
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Strategy;
    use sortrace_core::Phase;

    #[test]
    fn one_pass_per_decimal_digit() {
        let input = [170u32, 45, 75, 90, 802, 24, 2, 66];
        let outcome = Strategy::Radix.run(&input).unwrap();
        assert_eq!(outcome.sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);

        // Three digits: each pass is n counts, 9 accumulates, n builds, n copies.
        assert_eq!(outcome.trace.count(Phase::Count), 24);
        assert_eq!(outcome.trace.count(Phase::Accumulate), 27);
        assert_eq!(outcome.trace.count(Phase::Build), 24);
        assert_eq!(outcome.trace.count(Phase::Copy), 24);
    }

    #[test]
    fn digit_slots_follow_current_pass() {
        let outcome = Strategy::Radix.run(&[21u32, 13]).unwrap();
        let count_slots: Vec<usize> = outcome
            .trace
            .iter()
            .filter(|f| f.phase == Phase::Count)
            .map(|f| f.slot.unwrap())
            .collect();
        // Ones digits (1, 3), then tens digits of the reordered [21, 13].
        assert_eq!(count_slots, vec![1, 3, 2, 1]);
        assert_eq!(outcome.sorted, vec![13, 21]);
    }

    #[test]
    fn all_zeros_need_no_pass() {
        let outcome = Strategy::Radix.run(&[0u32, 0]).unwrap();
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.sorted, vec![0, 0]);
    }

    #[test]
    fn largest_values_do_not_overflow_exponent() {
        let input = [u64::MAX, 0, u64::MAX - 1, 12];
        let outcome = Strategy::Radix.run(&input).unwrap();
        assert_eq!(outcome.sorted, vec![0, 12, u64::MAX - 1, u64::MAX]);
    }
}
