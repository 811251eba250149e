//! Plays the FM bell through the default output device.
//!
//! The signal graph is single-threaded and stays on the main thread; the
//! cpal callback only ever pops finished samples from a lock-free ring
//! buffer. That keeps the real-time thread free of graph borrow traffic
//! and shows the intended handoff between the graph and a device binding.

use std::time::{Duration, Instant};

use color_eyre::eyre::eyre;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use siggen::patch;
use siggen::stream::StreamDescription;
use siggen::SampleSource;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device"))?;
    let config = device.default_output_config()?.config();

    let desc = StreamDescription::float_stereo(config.sample_rate.0 as f32);
    let channels = config.channels as usize;

    let bell = patch::fm_bell(400.0, 560.0, 190.0, 1.0, desc.sample_rate)?;

    let (mut producer, mut consumer) = rtrb::RingBuffer::<f32>::new(8_192);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _| {
            for frame in data.chunks_mut(channels) {
                // Mono signal fanned out to every channel; underruns play
                // silence rather than stalling the callback.
                let value = consumer.pop().unwrap_or(0.0);
                for sample in frame {
                    *sample = value;
                }
            }
        },
        |err| eprintln!("stream error: {err}"),
        None,
    )?;
    stream.play()?;

    println!("Playing FM bell for 8 seconds (ctrl-c to stop early)...");
    let deadline = Instant::now() + Duration::from_secs(8);
    while Instant::now() < deadline {
        while !producer.is_full() {
            let _ = producer.push(bell.borrow_mut().sample());
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    Ok(())
}
