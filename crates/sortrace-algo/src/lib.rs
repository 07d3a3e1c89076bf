//! Instrumented sorting strategies.
//!
//! Each strategy sorts a private working copy of its input and records a
//! [`Frame`](sortrace_core::Frame) at every step a visualization cares about.
//! The caller receives the sorted copy together with the sealed
//! [`Trace`](sortrace_core::Trace).
//!
//! # Strategies
//!
//! - Comparison: [`Strategy::Bubble`], [`Strategy::Insertion`]
//! - Divide and conquer: [`Strategy::Merge`], [`Strategy::Quick`]
//! - Distribution: [`Strategy::Counting`], [`Strategy::Radix`],
//!   [`Strategy::Bucket`]
//!
//! # Usage
//!
//! ```ignore
//! let outcome = Strategy::Bubble.run(&[5, 2, 4, 1])?;
//! assert_eq!(outcome.sorted, vec![1, 2, 4, 5]);
//! for frame in &outcome.trace { /* render frame */ }
//! ```

mod bubble;
mod bucket;
mod counting;
mod insertion;
mod merge;
mod quick;
mod radix;
pub mod strategy;
mod validate;

pub use strategy::{SortOutcome, Strategy};

use sortrace_core::{SortError, Sortable};

/// Bubble sort with `compare` and `swap` frames.
pub fn bubble_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Bubble.run(input)
}

/// Insertion sort with `shift` and `insert` frames.
pub fn insertion_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Insertion.run(input)
}

/// Top-down merge sort with `split`, `merge` and `merged` frames.
pub fn merge_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Merge.run(input)
}

/// Lomuto quick sort with `swap` and `partitioned` frames.
pub fn quick_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Quick.run(input)
}

/// Counting sort with `count`, `accumulate`, `build` and `copy` frames.
pub fn counting_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Counting.run(input)
}

/// LSD decimal radix sort; one counting pass per digit.
pub fn radix_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Radix.run(input)
}

/// Bucket sort with `bucket`, `sort` and `merge` frames.
pub fn bucket_sort<T: Sortable>(input: &[T]) -> Result<SortOutcome<T>, SortError> {
    Strategy::Bucket.run(input)
}
