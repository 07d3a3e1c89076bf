//! Frame and trace primitives for instrumented sorting runs.
//!
//! A sorting strategy records every observable step of its execution as a
//! [`Frame`] appended to a [`Recorder`]. When the run completes the recorder
//! is sealed into an immutable [`Trace`] that a player steps through in order.

pub mod config;
pub mod element;
pub mod error;
pub mod frame;
pub mod trace;

// Re-export commonly used types
pub use config::{SnapshotMode, TraceConfig};
pub use element::Sortable;
pub use error::SortError;
pub use frame::{Bounds, Frame, Highlights, Phase};
pub use trace::{Recorder, Trace, TracePlayer};
