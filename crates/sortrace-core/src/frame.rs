//! A single recorded step of a sorting run.
//!
//! Frames store a full copy of the working sequence rather than a diff, so a
//! player can render any frame on its own without replaying earlier ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Positions highlighted by a frame. No frame highlights more than three.
pub type Highlights = SmallVec<[usize; 3]>;

/// The semantic role of a frame.
///
/// Players pick highlight colors by phase, so distribution strategies use a
/// distinct phase for each of their passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Two adjacent elements were compared.
    Compare,
    /// Two elements exchanged positions.
    Swap,
    /// An element moved one slot right to open a gap.
    Shift,
    /// The held key was written into its gap.
    Insert,
    /// A range was divided around its midpoint.
    Split,
    /// One element was written back during a merge (also used by bucket
    /// concatenation).
    Merge,
    /// A merge of `[left, right]` finished.
    Merged,
    /// A pivot reached its final position.
    Partitioned,
    /// An element was tallied in the frequency table.
    Count,
    /// A frequency table entry was turned into a prefix sum.
    Accumulate,
    /// An element was placed into the output buffer.
    Build,
    /// An output buffer element was copied back into the sequence.
    Copy,
    /// An element was routed into a bucket.
    Bucket,
    /// An element of a bucket reached its sorted order within the bucket.
    Sort,
}

impl Phase {
    /// All phases, in the order they are declared.
    pub const ALL: [Phase; 14] = [
        Phase::Compare,
        Phase::Swap,
        Phase::Shift,
        Phase::Insert,
        Phase::Split,
        Phase::Merge,
        Phase::Merged,
        Phase::Partitioned,
        Phase::Count,
        Phase::Accumulate,
        Phase::Build,
        Phase::Copy,
        Phase::Bucket,
        Phase::Sort,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Compare => "compare",
            Phase::Swap => "swap",
            Phase::Shift => "shift",
            Phase::Insert => "insert",
            Phase::Split => "split",
            Phase::Merge => "merge",
            Phase::Merged => "merged",
            Phase::Partitioned => "partitioned",
            Phase::Count => "count",
            Phase::Accumulate => "accumulate",
            Phase::Build => "build",
            Phase::Copy => "copy",
            Phase::Bucket => "bucket",
            Phase::Sort => "sort",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range bounds attached to split, merged and partitioned frames.
///
/// On a partitioned frame `left` and `right` are the partition's `low` and
/// `high`, and `mid` is the pivot's final index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: usize,
    pub mid: usize,
    pub right: usize,
}

impl Bounds {
    pub fn new(left: usize, mid: usize, right: usize) -> Self {
        Bounds { left, mid, right }
    }
}

/// One observable event of a sorting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame<T> {
    /// What kind of step this frame records.
    pub phase: Phase,
    /// Full copy of the sequence at this instant. `None` when the run was
    /// recorded in [`SnapshotMode::IndicesOnly`](crate::SnapshotMode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Vec<T>>,
    /// Positions in the snapshot the step touched.
    pub highlights: Highlights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Counting table entry, radix digit or bucket touched by a distribution
    /// step. Not a position in the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<usize>,
}

impl<T> Frame<T> {
    pub fn snapshot(&self) -> Option<&[T]> {
        self.snapshot.as_deref()
    }

    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn phase_names_match_serde() {
        for phase in Phase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase));
        }
    }

    #[test]
    fn frame_omits_absent_fields() {
        let frame: Frame<u32> = Frame {
            phase: Phase::Accumulate,
            snapshot: None,
            highlights: SmallVec::new(),
            bounds: None,
            slot: Some(4),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"phase":"accumulate","highlights":[],"slot":4}"#);
    }

    #[test]
    fn frame_serde_roundtrip() {
        let frame = Frame {
            phase: Phase::Split,
            snapshot: Some(vec![3.5f64, 1.0, 2.0]),
            highlights: smallvec![0, 1, 2],
            bounds: Some(Bounds::new(0, 1, 2)),
            slot: None,
        };
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
        assert_eq!(back.snapshot(), Some(&[3.5, 1.0, 2.0][..]));
        assert_eq!(back.highlights(), &[0, 1, 2]);
    }
}
