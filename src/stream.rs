#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// On-the-wire sample encoding negotiated by the platform audio binding.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Signed integer PCM (scale by [`crate::PCM_NORMALIZE`] on conversion).
    Pcm,
    /// 32-bit float samples, passed through untouched.
    Float,
}

/// Describes the audio stream a render callback will be asked to fill.
///
/// Produced by the platform audio binding during format negotiation. The
/// signal-graph side only ever reads `sample_rate` and `channels`; the byte
/// layout fields exist so a callback can address its buffers correctly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamDescription {
    pub format: SampleFormat,
    pub sample_rate: f32,
    pub channels: u16,
    pub bits_per_channel: u16,
    pub bytes_per_frame: u16,
    pub bytes_per_packet: u16,
    pub frames_per_packet: u16,
    pub interleaved: bool,
}

impl StreamDescription {
    /// 16-bit stereo PCM at 48kHz, the layout the original test harness used.
    pub fn pcm_stereo_48k() -> Self {
        Self {
            format: SampleFormat::Pcm,
            sample_rate: 48_000.0,
            channels: 2,
            bits_per_channel: 16,
            bytes_per_frame: 2,
            bytes_per_packet: 2,
            frames_per_packet: 1,
            interleaved: false,
        }
    }

    /// Float stereo at the given rate, the layout cpal hands out by default.
    pub fn float_stereo(sample_rate: f32) -> Self {
        Self {
            format: SampleFormat::Float,
            sample_rate,
            channels: 2,
            bits_per_channel: 32,
            bytes_per_frame: 8,
            bytes_per_packet: 8,
            frames_per_packet: 1,
            interleaved: true,
        }
    }
}
