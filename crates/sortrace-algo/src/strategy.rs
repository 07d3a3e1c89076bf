//! The [`Strategy`] tagged variant and the run entry point shared by all
//! algorithms.
//!
//! Only the plumbing is shared: validation, the private working copy and the
//! recorder. Each variant dispatches to its own algorithm module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sortrace_core::{Recorder, SortError, Sortable, Trace, TraceConfig};

use crate::validate::check_input;
use crate::{bubble, bucket, counting, insertion, merge, quick, radix};

/// A sorting algorithm that records its execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Counting,
    Radix,
    Bucket,
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOutcome<T> {
    /// The sorted copy of the input.
    pub sorted: Vec<T>,
    /// Every recorded step, in execution order.
    pub trace: Trace<T>,
}

impl<T> SortOutcome<T> {
    pub fn into_parts(self) -> (Vec<T>, Trace<T>) {
        (self.sorted, self.trace)
    }
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Bubble,
        Strategy::Insertion,
        Strategy::Merge,
        Strategy::Quick,
        Strategy::Counting,
        Strategy::Radix,
        Strategy::Bucket,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bubble => "bubble",
            Strategy::Insertion => "insertion",
            Strategy::Merge => "merge",
            Strategy::Quick => "quick",
            Strategy::Counting => "counting",
            Strategy::Radix => "radix",
            Strategy::Bucket => "bucket",
        }
    }

    /// Whether equal elements keep their input order. Lomuto partitioning
    /// moves equal keys past each other, so quick sort is the one exception.
    pub fn is_stable(self) -> bool {
        !matches!(self, Strategy::Quick)
    }

    /// Whether the strategy only accepts non-negative integers.
    pub fn requires_countable(self) -> bool {
        matches!(self, Strategy::Counting | Strategy::Radix)
    }

    /// Runs the strategy with the default [`TraceConfig`].
    pub fn run<T: Sortable>(&self, input: &[T]) -> Result<SortOutcome<T>, SortError> {
        self.run_with(input, &TraceConfig::default())
    }

    /// Sorts a copy of `input`, recording frames according to `config`.
    ///
    /// Input is validated before anything is recorded; on error no trace is
    /// produced. Inputs shorter than two elements succeed with an empty trace.
    pub fn run_with<T: Sortable>(
        &self,
        input: &[T],
        config: &TraceConfig,
    ) -> Result<SortOutcome<T>, SortError> {
        let span = tracing::debug_span!("sort_run", strategy = %self, len = input.len());
        let _guard = span.enter();

        if let Err(e) = check_input(*self, input, config) {
            tracing::debug!("rejected input: {}", e);
            return Err(e);
        }

        let mut working = input.to_vec();
        let mut recorder = Recorder::new(working.len(), config.snapshots);

        if working.len() >= 2 {
            match self {
                Strategy::Bubble => bubble::sort(&mut working, &mut recorder),
                Strategy::Insertion => insertion::sort(&mut working, &mut recorder),
                Strategy::Merge => merge::sort(&mut working, &mut recorder),
                Strategy::Quick => quick::sort(&mut working, &mut recorder),
                Strategy::Counting => counting::sort(&mut working, &mut recorder),
                Strategy::Radix => radix::sort(&mut working, &mut recorder),
                Strategy::Bucket => bucket::sort(&mut working, &mut recorder),
            }
        }

        let trace = recorder.finish();
        tracing::debug!(frames = trace.len(), "sort run complete");

        Ok(SortOutcome {
            sorted: working,
            trace,
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let wanted = lowered.strip_suffix("_sort").unwrap_or(lowered.as_str());
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| SortError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}
