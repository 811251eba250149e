//! End-to-end contracts on assembled signal graphs: scheduling, scoping,
//! and full patches pulled one sample at a time the way a render callback
//! would.

use siggen::graph::{shared, Constant, MutableSummer, SampleSource, SourceId, Summer};
use siggen::patch;
use siggen::sequencing::{ScopedSource, Sequence, SequenceElement};
use siggen::stream::StreamDescription;

fn scoped_constant(
    value: f32,
    duration_secs: f32,
    sample_rate: f32,
) -> ScopedSource {
    ScopedSource::new(shared(Constant::new(value)), duration_secs, sample_rate).unwrap()
}

#[test]
fn sequencer_gates_two_overlapping_notes() {
    let sample_rate = 10.0;
    let elements = vec![
        SequenceElement::new(scoped_constant(1.0, 1.0, sample_rate), 0.0),
        SequenceElement::new(scoped_constant(1.0, 1.0, sample_rate), 0.5),
    ];
    let mut sequence = Sequence::new(elements, sample_rate);
    assert_eq!(sequence.duration_secs(), 1.5);

    let samples: Vec<f32> = (0..20).map(|_| sequence.sample()).collect();
    assert_eq!(&samples[0..5], &[1.0; 5], "element A alone");
    assert_eq!(&samples[5..10], &[2.0; 5], "A and B overlap");
    assert_eq!(&samples[10..15], &[1.0; 5], "element B alone");
    assert_eq!(&samples[15..20], &[0.0; 5], "sequence over");
}

#[test]
fn scoped_source_stays_silent_until_reset() {
    let mut scoped = scoped_constant(1.0, 0.01, 1_000.0);

    let live: Vec<f32> = (0..=10).map(|_| scoped.sample()).collect();
    assert!(live.iter().all(|&s| s == 1.0));

    let silent: Vec<f32> = (0..1_000).map(|_| scoped.sample()).collect();
    assert!(silent.iter().all(|&s| s == 0.0));

    scoped.reset();
    assert_eq!(scoped.sample(), 1.0);
}

#[test]
fn mutable_summer_membership_is_idempotent() {
    let mut summer = MutableSummer::new();
    let id = SourceId(7);

    summer.add_source(id, shared(Constant::new(0.5)));
    summer.add_source(id, shared(Constant::new(0.5)));
    assert_eq!(summer.source_count(), 1);

    summer.remove_source(SourceId(8));
    assert_eq!(summer.source_count(), 1);
}

#[test]
fn summer_is_additive_over_constants() {
    let values = [0.1, 0.2, 0.3, 0.4];
    let sources = values.iter().map(|&v| shared(Constant::new(v))).collect();
    let mut summer = Summer::new(sources);

    let expected: f32 = values.iter().sum();
    for _ in 0..100 {
        assert!((summer.sample() - expected).abs() < 1e-6);
    }
}

#[test]
fn fm_bell_renders_a_full_strike_within_bounds() {
    let desc = StreamDescription::pcm_stereo_48k();
    let bell = patch::fm_bell(400.0, 560.0, 190.0, 1.0, desc.sample_rate).unwrap();
    let mut bell = bell.borrow_mut();

    // One full attack+decay cycle at 48kHz.
    let cycle_samples = ((0.003 + 3.75) * desc.sample_rate) as usize;
    let mut peak = 0.0_f32;
    for _ in 0..cycle_samples {
        let value = bell.sample();
        assert!(value.is_finite());
        peak = peak.max(value.abs());
    }
    assert!(peak > 0.1, "bell should be audible, peak was {}", peak);
    assert!(peak <= 0.5 + 1e-3, "bell peak {} above envelope ceiling", peak);
}

#[test]
fn sequenced_bells_replay_after_reset() {
    let sample_rate = 100.0;
    let note = |offset: f32| {
        let tone = patch::composite_const_sine(&[10.0], &[0.5], sample_rate).unwrap();
        let scoped = ScopedSource::new(tone, 0.2, sample_rate).unwrap();
        SequenceElement::new(scoped, offset)
    };

    let mut sequence = Sequence::new(vec![note(0.0), note(0.3)], sample_rate);
    let first: Vec<f32> = (0..60).map(|_| sequence.sample()).collect();

    sequence.reset();
    let second: Vec<f32> = (0..60).map(|_| sequence.sample()).collect();

    assert!(first.iter().any(|&s| s != 0.0), "sequence produced signal");
    assert_eq!(first, second, "reset replays identically");
}
