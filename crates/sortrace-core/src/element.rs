//! The element capability shared by every sorting strategy.
//!
//! Comparison strategies only need `PartialOrd`. Distribution strategies need
//! a numeric view of the element: bucket sort projects values onto a line via
//! [`Sortable::to_f64`], while counting and radix sort index a frequency table
//! with [`Sortable::to_count_index`].

use std::fmt;

/// An element that can be sorted and recorded in a trace.
///
/// `Default` provides the placeholder written into the output buffer of a
/// counting pass before an element is placed there; for the built-in numeric
/// types this is zero.
///
/// Record types can implement this trait by projecting a key, which is how
/// stability is observed: two records with equal keys compare equal but stay
/// distinguishable by their other fields.
pub trait Sortable: Copy + PartialOrd + Default + fmt::Debug {
    /// Numeric projection used by bucket placement.
    fn to_f64(self) -> f64;

    /// Whether the value is a finite number. NaN and infinities are rejected.
    fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }

    /// The counting-table slot for this value, or `None` when the value is
    /// negative or not integral.
    fn to_count_index(self) -> Option<usize>;
}

macro_rules! impl_sortable_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sortable for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn is_finite(self) -> bool {
                    true
                }

                fn to_count_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_sortable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sortable for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn to_count_index(self) -> Option<usize> {
                    if <$t>::is_finite(self)
                        && self >= 0.0
                        && self.fract() == 0.0
                        && (self as f64) < usize::MAX as f64
                    {
                        Some(self as usize)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_sortable_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_sortable_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_always_finite() {
        assert!(Sortable::is_finite(i64::MIN));
        assert!(Sortable::is_finite(u8::MAX));
    }

    #[test]
    fn negative_integers_have_no_count_index() {
        assert_eq!((-1i32).to_count_index(), None);
        assert_eq!(0i32.to_count_index(), Some(0));
        assert_eq!(42u16.to_count_index(), Some(42));
    }

    #[test]
    fn floats_need_integral_non_negative_values() {
        assert_eq!(7.0f64.to_count_index(), Some(7));
        assert_eq!(7.5f64.to_count_index(), None);
        assert_eq!((-2.0f32).to_count_index(), None);
        assert_eq!(f64::NAN.to_count_index(), None);
        assert_eq!(f64::INFINITY.to_count_index(), None);
    }

    #[test]
    fn floats_beyond_usize_range_are_rejected() {
        // usize::MAX rounds up to 2^N as a float, one past the largest usize.
        assert_eq!((usize::MAX as f64).to_count_index(), None);
        assert_eq!(((usize::MAX / 2 + 1) as f64).to_count_index(), Some(usize::MAX / 2 + 1));
    }

    #[test]
    fn float_finiteness() {
        assert!(Sortable::is_finite(1.5f32));
        assert!(!Sortable::is_finite(f32::NAN));
        assert!(!Sortable::is_finite(f64::NEG_INFINITY));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(<u32 as Default>::default(), 0);
        assert_eq!(<f64 as Default>::default(), 0.0);
    }
}
