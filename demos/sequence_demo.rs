//! Offline sequencing demo: two overlapping additive notes, printed as
//! text so the gating schedule is visible without an audio device.

use color_eyre::eyre::Result;

use siggen::graph::SampleSource;
use siggen::patch;
use siggen::sequencing::{ScopedSource, Sequence, SequenceElement};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Low rate keeps the printout readable; the schedule math is identical
    // at 48kHz.
    let sample_rate = 40.0;

    let note = |frequency: f32, offset_secs: f32| -> Result<SequenceElement> {
        let tone = patch::composite_const_sine(&[frequency, frequency * 2.0], &[0.6, 0.2], sample_rate)?;
        let scoped = ScopedSource::new(tone, 1.0, sample_rate)?;
        Ok(SequenceElement::new(scoped, offset_secs))
    };

    let mut sequence = Sequence::new(vec![note(4.0, 0.0)?, note(5.0, 0.5)?], sample_rate);
    println!("sequence duration: {:.2}s", sequence.duration_secs());

    for n in 0..(2.0 * sample_rate) as usize {
        let value = sequence.sample();
        let time = n as f32 / sample_rate;
        let bar_len = (value.abs() * 40.0) as usize;
        println!("{time:5.2}s {value:+.3} {}", "#".repeat(bar_len));
    }

    Ok(())
}
