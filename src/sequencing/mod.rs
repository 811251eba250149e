//! Time scoping and milestone sequencing.
//!
//! [`ScopedSource`] gives an endless source a fixed lifetime in samples;
//! [`Sequence`] schedules a set of scoped sources against start offsets and
//! gates them in and out of a dynamic mixer as playback advances.

pub mod scoped;
pub mod sequence;

pub use scoped::ScopedSource;
pub use sequence::{Sequence, SequenceElement};
