use crate::graph::source::{SampleSource, SharedSource};

/// Stable identity handle for a mixer member.
///
/// Membership is keyed by these handles instead of by comparing opaque
/// source references, so "the same source" is whatever the caller says it
/// is - typically an element index minted by a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub u64);

/// Dynamic-membership mixer: sources are added and removed at runtime.
///
/// The mixing stage under time-gated sequencing. Membership changes only
/// ever happen between sample calls, never during one; `sample()` sums the
/// current members in membership order with the usual advance-once
/// semantics.
pub struct MutableSummer {
    sources: Vec<(SourceId, SharedSource)>,
}

impl MutableSummer {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// No-op when the id is already a member.
    pub fn add_source(&mut self, id: SourceId, source: SharedSource) {
        if !self.has_source(id) {
            self.sources.push((id, source));
        }
    }

    /// No-op when the id is not a member.
    pub fn remove_source(&mut self, id: SourceId) {
        self.sources.retain(|(member, _)| *member != id);
    }

    pub fn has_source(&self, id: SourceId) -> bool {
        self.sources.iter().any(|(member, _)| *member == id)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn clear_sources(&mut self) {
        self.sources.clear();
    }
}

impl Default for MutableSummer {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for MutableSummer {
    fn sample(&mut self) -> f32 {
        self.sources
            .iter()
            .map(|(_, source)| source.borrow_mut().sample())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::combine::Constant;
    use crate::graph::shared;

    #[test]
    fn re_adding_a_member_is_a_no_op() {
        let mut summer = MutableSummer::new();
        let id = SourceId(1);
        summer.add_source(id, shared(Constant::new(0.5)));
        summer.add_source(id, shared(Constant::new(0.5)));

        assert_eq!(summer.source_count(), 1);
        assert_eq!(summer.sample(), 0.5);
    }

    #[test]
    fn removing_an_absent_member_is_a_no_op() {
        let mut summer = MutableSummer::new();
        summer.add_source(SourceId(1), shared(Constant::new(1.0)));

        summer.remove_source(SourceId(99));
        assert_eq!(summer.source_count(), 1);

        summer.remove_source(SourceId(1));
        assert_eq!(summer.source_count(), 0);
        assert_eq!(summer.sample(), 0.0);
    }

    #[test]
    fn mixes_current_membership_only() {
        let mut summer = MutableSummer::new();
        summer.add_source(SourceId(1), shared(Constant::new(0.25)));
        summer.add_source(SourceId(2), shared(Constant::new(0.5)));
        assert_eq!(summer.sample(), 0.75);

        summer.remove_source(SourceId(1));
        assert_eq!(summer.sample(), 0.5);

        summer.clear_sources();
        assert!(!summer.has_source(SourceId(2)));
        assert_eq!(summer.sample(), 0.0);
    }
}
