use std::cell::RefCell;
use std::rc::Rc;

/*
Sample Sources
==============

Every node in the signal graph is a sample source: one call to `sample()`
produces one amplitude value and advances the node's internal state by
exactly one time-step (1/sample_rate seconds). There is no way to peek at
the next value without advancing - that rule is what makes graph evaluation
deterministic when the same node feeds several consumers.

Graphs are built by composition: a combinator holds handles to its children
and samples them exactly once per call, in a fixed order. Nodes that appear
in more than one branch are shared (`SharedSource`); the whole graph is
single-threaded by construction, so plain `Rc<RefCell<..>>` is the right
ownership tool. Construction happens before playback starts; once a graph
is handed to a render callback it is only ever touched from that callback.

Real-time contract: `sample()` must not block, allocate, lock, or perform
I/O. Everything that needs a heap (ramp tables, milestone schedules) is
built at construction time.
*/

/// A node producing one amplitude value per call.
pub trait SampleSource {
    /// Produce the next sample, advancing internal state by one time-step.
    fn sample(&mut self) -> f32;
}

/// Shared handle to a graph node, for nodes referenced from several places.
pub type SharedSource = Rc<RefCell<dyn SampleSource>>;

/// Wrap a concrete node into a shared graph handle.
pub fn shared<S: SampleSource + 'static>(source: S) -> SharedSource {
    Rc::new(RefCell::new(source))
}
