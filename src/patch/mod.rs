//! Patch builders: the construction API collaborators wire graphs with.
//!
//! These helpers assemble common topologies - additive stacks of fixed
//! partials and the FM bell - out of the node library. They run strictly
//! before playback and are the fail-fast boundary: every degenerate
//! configuration surfaces as a [`GraphError`] here, never from the sample
//! path.

use tracing::debug;

use crate::error::GraphError;
use crate::graph::combine::{FmCarrier, Multiplier, Summer};
use crate::graph::envelope::{create_envelope, db_to_gains, EnvelopeId};
use crate::graph::oscillator::{Oscillator, TableOscillator};
use crate::graph::source::{shared, SharedSource};

/// Expand a center frequency into absolute partial frequencies.
pub fn frequencies_from_multiples(center_hz: f32, multiples: &[f32]) -> Vec<f32> {
    multiples.iter().map(|m| center_hz * m).collect()
}

/// Additive stack of fixed-frequency sine partials with linear gains.
///
/// Each partial is a table oscillator multiplied by a constant gain; the
/// partials are summed in list order.
pub fn composite_const_sine(
    frequencies: &[f32],
    gains: &[f32],
    sample_rate: f32,
) -> Result<SharedSource, GraphError> {
    if frequencies.len() != gains.len() {
        return Err(GraphError::MismatchedLengths {
            left: frequencies.len(),
            right: gains.len(),
        });
    }
    if frequencies.is_empty() {
        return Err(GraphError::EmptyComposite);
    }

    let mut partials: Vec<SharedSource> = Vec::with_capacity(frequencies.len());
    for (&frequency, &gain) in frequencies.iter().zip(gains) {
        let carrier = shared(TableOscillator::sine(frequency, sample_rate)?);
        partials.push(shared(Multiplier::by_constant(carrier, gain)));
    }

    debug!(partials = partials.len(), "built additive sine composite");
    Ok(shared(Summer::new(partials)))
}

/// [`composite_const_sine`] with gains given in decibels and partials as
/// multiples of a center frequency.
pub fn composite_const_sine_db(
    center_hz: f32,
    multiples: &[f32],
    gains_db: &[f32],
    sample_rate: f32,
) -> Result<SharedSource, GraphError> {
    let frequencies = frequencies_from_multiples(center_hz, multiples);
    let gains = db_to_gains(gains_db);
    composite_const_sine(&frequencies, &gains, sample_rate)
}

/// Pairwise multiply waveforms with their envelopes, then sum.
pub fn enveloped_composite(
    waveforms: Vec<SharedSource>,
    envelopes: Vec<SharedSource>,
) -> Result<SharedSource, GraphError> {
    if waveforms.len() != envelopes.len() {
        return Err(GraphError::MismatchedLengths {
            left: waveforms.len(),
            right: envelopes.len(),
        });
    }
    if waveforms.is_empty() {
        return Err(GraphError::EmptyComposite);
    }

    let voices: Vec<SharedSource> = waveforms
        .into_iter()
        .zip(envelopes)
        .map(|(waveform, envelope)| shared(Multiplier::new(waveform, envelope)))
        .collect();
    Ok(shared(Summer::new(voices)))
}

/// The FM bell: a sine carrier whose frequency is swung by a scaled saw
/// modulator, shaped by the looping bell envelope.
///
/// The modulator is multiplied by `modulator_gain` (its swing in Hz) and
/// re-centered on `carrier_hz`, then fed into the carrier's
/// frequency-modulation input.
pub fn fm_bell(
    carrier_hz: f32,
    modulator_hz: f32,
    modulator_gain: f32,
    scale: f32,
    sample_rate: f32,
) -> Result<SharedSource, GraphError> {
    let modulator = shared(Oscillator::saw(modulator_hz, sample_rate, false));
    let swing = shared(Multiplier::by_constant(modulator, modulator_gain));
    let frequency_input = shared(FmCarrier::new(carrier_hz, swing));

    let carrier = shared(
        Oscillator::sine(carrier_hz, sample_rate).with_frequency_mod(frequency_input),
    );
    let envelope = create_envelope(EnvelopeId::Bell, sample_rate, scale)?;

    debug!(
        carrier_hz,
        modulator_hz, modulator_gain, scale, "built fm bell patch"
    );
    Ok(shared(Multiplier::new(carrier, envelope)))
}
