//! Trace recording and playback.
//!
//! A [`Recorder`] is created at the start of a run and is the only way to
//! append frames. [`Recorder::finish`] consumes it and yields a [`Trace`],
//! which exposes frames read-only and in chronological order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::SnapshotMode;
use crate::frame::{Bounds, Frame, Phase};

/// Append-only frame sink for a single run.
#[derive(Debug)]
pub struct Recorder<T> {
    frames: Vec<Frame<T>>,
    sequence_len: usize,
    mode: SnapshotMode,
}

impl<T: Clone> Recorder<T> {
    /// Creates a recorder for a sequence of `sequence_len` elements.
    pub fn new(sequence_len: usize, mode: SnapshotMode) -> Self {
        Recorder {
            frames: Vec::new(),
            sequence_len,
            mode,
        }
    }

    /// Records a frame with no auxiliary bounds or slot.
    pub fn emit(&mut self, state: &[T], highlights: &[usize], phase: Phase) {
        self.push(state, highlights, phase, None, None);
    }

    /// Records a divide-and-conquer frame carrying range bounds.
    pub fn emit_with_bounds(
        &mut self,
        state: &[T],
        highlights: &[usize],
        phase: Phase,
        bounds: Bounds,
    ) {
        self.push(state, highlights, phase, Some(bounds), None);
    }

    /// Records a distribution frame tagged with a table entry or bucket.
    pub fn emit_with_slot(&mut self, state: &[T], highlights: &[usize], phase: Phase, slot: usize) {
        self.push(state, highlights, phase, None, Some(slot));
    }

    fn push(
        &mut self,
        state: &[T],
        highlights: &[usize],
        phase: Phase,
        bounds: Option<Bounds>,
        slot: Option<usize>,
    ) {
        debug_assert_eq!(state.len(), self.sequence_len, "snapshot length drifted");
        debug_assert!(highlights.len() <= 3, "too many highlights: {:?}", highlights);
        debug_assert!(
            highlights.iter().all(|&i| i < state.len()),
            "highlight out of range: {:?} for length {}",
            highlights,
            state.len()
        );

        let snapshot = match self.mode {
            SnapshotMode::Full => Some(state.to_vec()),
            SnapshotMode::IndicesOnly => None,
        };

        self.frames.push(Frame {
            phase,
            snapshot,
            highlights: SmallVec::from_slice(highlights),
            bounds,
            slot,
        });
    }

    /// Number of frames recorded so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seals the recorder. No further frames can be appended.
    pub fn finish(self) -> Trace<T> {
        Trace {
            sequence_len: self.sequence_len,
            frames: self.frames,
        }
    }
}

/// Consumer of a trace, driven strictly in frame order.
///
/// Closures taking `(index, &Frame<T>)` implement this trait.
pub trait TracePlayer<T> {
    /// Called once per frame, in order.
    fn on_frame(&mut self, index: usize, frame: &Frame<T>);

    /// Called after the last frame.
    fn on_finish(&mut self, _total: usize) {}
}

impl<T, F> TracePlayer<T> for F
where
    F: FnMut(usize, &Frame<T>),
{
    fn on_frame(&mut self, index: usize, frame: &Frame<T>) {
        self(index, frame)
    }
}

/// The ordered, immutable frame history of one sorting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<T> {
    sequence_len: usize,
    frames: Vec<Frame<T>>,
}

impl<T> Trace<T> {
    /// Length of the sorted sequence every snapshot shares.
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&Frame<T>> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    /// Number of frames recorded with the given phase.
    pub fn count(&self, phase: Phase) -> usize {
        self.frames.iter().filter(|f| f.phase == phase).count()
    }

    /// Frame counts per phase, keyed in order of first appearance.
    pub fn phase_histogram(&self) -> IndexMap<Phase, usize> {
        let mut histogram = IndexMap::new();
        for frame in &self.frames {
            *histogram.entry(frame.phase).or_insert(0) += 1;
        }
        histogram
    }

    /// Steps `player` through every frame in order, then signals completion.
    pub fn play<P: TracePlayer<T> + ?Sized>(&self, player: &mut P) {
        for (index, frame) in self.frames.iter().enumerate() {
            player.on_frame(index, frame);
        }
        player.on_finish(self.frames.len());
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Frame<T>;
    type IntoIter = std::slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = Frame<T>;
    type IntoIter = std::vec::IntoIter<Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
