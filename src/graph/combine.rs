use crate::graph::source::{shared, SampleSource, SharedSource};

/*
Combinators
===========

Interior graph nodes that combine child signals arithmetically. Because
sampling a child advances its state, evaluation order is part of the
contract: every combinator samples its children exactly once per call, in a
fixed order, even where the math itself would be commutative.
*/

/// DC source: the same value every call, no state to advance.
///
/// Doubles as a literal gain under a [`Multiplier`] and as a placeholder
/// where a modulator input is required but no modulation is wanted.
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl SampleSource for Constant {
    fn sample(&mut self) -> f32 {
        self.value
    }
}

/// N-ary adder over a fixed, ordered list of sources.
///
/// Cost scales linearly with the source count; each child is sampled once
/// per call, in list order.
pub struct Summer {
    sources: Vec<SharedSource>,
}

impl Summer {
    pub fn new(sources: Vec<SharedSource>) -> Self {
        Self { sources }
    }
}

impl SampleSource for Summer {
    fn sample(&mut self) -> f32 {
        self.sources
            .iter()
            .map(|source| source.borrow_mut().sample())
            .sum()
    }
}

/// Binary multiplier: samples source1, then source2, returns the product.
///
/// The sampling order is fixed and observable (each child advances), so it
/// must not be swapped even though multiplication commutes.
pub struct Multiplier {
    source1: SharedSource,
    source2: SharedSource,
}

impl Multiplier {
    pub fn new(source1: SharedSource, source2: SharedSource) -> Self {
        Self { source1, source2 }
    }

    /// Multiply by a literal gain, internally a [`Constant`] source.
    pub fn by_constant(source: SharedSource, gain: f32) -> Self {
        Self::new(source, shared(Constant::new(gain)))
    }
}

impl SampleSource for Multiplier {
    fn sample(&mut self) -> f32 {
        let first = self.source1.borrow_mut().sample();
        let second = self.source2.borrow_mut().sample();
        first * second
    }
}

/// Re-centers a modulator signal around a carrier's nominal frequency.
///
/// Emits `center_hz + modulator.sample()` each call; feed the result into a
/// carrier's frequency-modulation input so the modulator swings the pitch
/// around the carrier's center rather than around zero.
pub struct FmCarrier {
    center_hz: f32,
    modulator: SharedSource,
}

impl FmCarrier {
    pub fn new(center_hz: f32, modulator: SharedSource) -> Self {
        Self {
            center_hz,
            modulator,
        }
    }
}

impl SampleSource for FmCarrier {
    fn sample(&mut self) -> f32 {
        self.center_hz + self.modulator.borrow_mut().sample()
    }
}
