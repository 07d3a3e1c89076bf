//! Up-front input checks. Nothing is recorded until these pass.

use sortrace_core::{SortError, Sortable, TraceConfig};

use crate::strategy::Strategy;

pub(crate) fn check_input<T: Sortable>(
    strategy: Strategy,
    input: &[T],
    config: &TraceConfig,
) -> Result<(), SortError> {
    let mut max_index = None;

    for (index, value) in input.iter().enumerate() {
        if !value.is_finite() {
            return Err(SortError::NonFinite {
                index,
                value: format!("{:?}", value),
            });
        }

        if strategy.requires_countable() {
            let Some(slot) = value.to_count_index() else {
                return Err(SortError::NotCountable {
                    strategy: strategy.name().to_string(),
                    index,
                    value: format!("{:?}", value),
                });
            };
            max_index = max_index.max(Some(slot));
        }
    }

    // Radix keeps a fixed ten-entry table; only counting sort scales with max.
    // Inputs shorter than two elements never build a table.
    if strategy == Strategy::Counting && input.len() >= 2 {
        if let Some(max) = max_index {
            if max >= config.max_counting_range {
                return Err(SortError::RangeTooLarge {
                    max,
                    limit: config.max_counting_range,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_rejected_for_every_strategy() {
        for strategy in Strategy::ALL {
            let err = check_input(strategy, &[1.0, f64::NAN], &TraceConfig::default())
                .unwrap_err();
            assert_eq!(
                err,
                SortError::NonFinite {
                    index: 1,
                    value: "NaN".into()
                }
            );
        }
    }

    #[test]
    fn negatives_only_rejected_by_counting_strategies() {
        let input = [3i32, -1, 2];
        for strategy in Strategy::ALL {
            let result = check_input(strategy, &input, &TraceConfig::default());
            if strategy.requires_countable() {
                match result {
                    Err(SortError::NotCountable { index, value, .. }) => {
                        assert_eq!(index, 1);
                        assert_eq!(value, "-1");
                    }
                    other => panic!("{}: expected NotCountable, got {:?}", strategy, other),
                }
            } else {
                assert!(result.is_ok(), "{} rejected negatives", strategy);
            }
        }
    }

    #[test]
    fn fractional_floats_rejected_by_radix() {
        let err = check_input(Strategy::Radix, &[1.0, 2.5], &TraceConfig::default())
            .unwrap_err();
        assert!(matches!(err, SortError::NotCountable { index: 1, .. }));
    }

    #[test]
    fn counting_range_limit() {
        let config = TraceConfig::default().with_max_counting_range(100);
        assert!(check_input(Strategy::Counting, &[99u32, 0], &config).is_ok());
        assert_eq!(
            check_input(Strategy::Counting, &[100u32, 0], &config),
            Err(SortError::RangeTooLarge { max: 100, limit: 100 })
        );
        // Radix is not bound by the counting table limit.
        assert!(check_input(Strategy::Radix, &[1_000_000u32], &config).is_ok());
    }

    #[test]
    fn counting_range_limit_skips_trivial_input() {
        let config = TraceConfig::default().with_max_counting_range(100);
        assert!(check_input(Strategy::Counting, &[5_000u32], &config).is_ok());
        assert!(check_input::<u32>(Strategy::Counting, &[], &config).is_ok());
    }

    #[test]
    fn empty_input_is_valid() {
        for strategy in Strategy::ALL {
            assert!(check_input::<u8>(strategy, &[], &TraceConfig::default()).is_ok());
        }
    }
}
