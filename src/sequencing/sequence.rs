use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::graph::mixer::{MutableSummer, SourceId};
use crate::graph::source::{SampleSource, SharedSource};
use crate::sequencing::scoped::ScopedSource;

/*
Milestone Sequencer
===================

A sequence schedules duration-scoped sources against start offsets and
turns them on and off in a dynamic mixer as the sample counter advances.

All timing is resolved at construction: every element contributes exactly
two milestones - membership ON at its start sample, membership OFF at its
end sample - inserted into a multimap keyed by sample index. The schedule
never changes afterwards; playback is a counter increment plus an exact-key
lookup, so the runtime cost per sample is independent of how far into the
sequence we are. Milestone lookup is exact-match: the schedule resolution
is one sample, and coincident milestones at the same index are all applied
during that one update.

`sample()` returns the mix *before* applying the step's membership changes;
updates always take effect on the next call. Element identity inside the
mixer is the element's index, minted as a stable `SourceId` handle.
*/

/// One scheduled entry: a scoped source and when it starts, in seconds.
pub struct SequenceElement {
    pub source: Rc<RefCell<ScopedSource>>,
    pub start_offset_secs: f32,
}

impl SequenceElement {
    pub fn new(source: ScopedSource, start_offset_secs: f32) -> Self {
        Self {
            source: Rc::new(RefCell::new(source)),
            start_offset_secs,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Milestone {
    element: usize,
    /// true = add to the mixer, false = remove.
    active: bool,
}

/// Plays a set of scoped sources at scheduled offsets, mixed additively.
pub struct Sequence {
    elements: Vec<SequenceElement>,
    summer: MutableSummer,
    milestones: HashMap<u64, Vec<Milestone>>,
    accumulated_samples: u64,
    duration_secs: f32,
}

impl Sequence {
    pub fn new(elements: Vec<SequenceElement>, sample_rate: f32) -> Self {
        let mut milestones: HashMap<u64, Vec<Milestone>> = HashMap::new();
        let mut duration_secs = 0.0_f32;

        for (index, element) in elements.iter().enumerate() {
            let start_secs = element.start_offset_secs;
            let end_secs = start_secs + element.source.borrow().duration_secs();
            if end_secs > duration_secs {
                duration_secs = end_secs;
            }

            let start_sample = (start_secs * sample_rate) as u64;
            let end_sample = (end_secs * sample_rate) as u64;
            milestones.entry(start_sample).or_default().push(Milestone {
                element: index,
                active: true,
            });
            milestones.entry(end_sample).or_default().push(Milestone {
                element: index,
                active: false,
            });
        }

        debug!(
            elements = elements.len(),
            duration_secs, "built sequence schedule"
        );

        let mut sequence = Self {
            elements,
            summer: MutableSummer::new(),
            milestones,
            accumulated_samples: 0,
            duration_secs,
        };
        sequence.apply_milestones(0);
        sequence
    }

    /// Latest end time across all elements, in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// Rewind to time zero: counter cleared, membership rebuilt, every
    /// element's lifetime counter rewound so it can replay.
    pub fn reset(&mut self) {
        self.accumulated_samples = 0;
        self.summer.clear_sources();
        for element in &self.elements {
            element.source.borrow_mut().reset();
        }
        self.apply_milestones(0);
    }

    fn apply_milestones(&mut self, sample_index: u64) {
        if let Some(batch) = self.milestones.get(&sample_index) {
            for milestone in batch {
                let id = SourceId(milestone.element as u64);
                if milestone.active {
                    let handle: SharedSource = self.elements[milestone.element].source.clone();
                    self.summer.add_source(id, handle);
                } else {
                    self.summer.remove_source(id);
                }
            }
        }
    }
}

impl SampleSource for Sequence {
    fn sample(&mut self) -> f32 {
        let value = self.summer.sample();
        self.accumulated_samples += 1;
        self.apply_milestones(self.accumulated_samples);
        value
    }
}
