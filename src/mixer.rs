//! Mixer & output sink abstraction — spec §4.9.
//!
//! The producer/consumer split described in spec §4.9 ("a producer-consumer
//! ring with exactly two blocks") only matters once a real audio device is
//! in the loop: for offline rendering the producer can hand a block
//! straight to the `VirtualWavSink`. `CpalSink` (feature `device`) is the
//! one sink that actually needs the double buffer, grounded in the
//! teacher's `tracker/audio.rs` `lock_or_recover` + `cpal::Stream` idiom.

use crate::error::{PlayerError, Result};
use crate::vfs::wav_sink::VirtualWavSink;
use std::sync::{Mutex, MutexGuard};
use std::collections::VecDeque;

/// Clamp a floating-point stereo block (roughly unit-scaled) down to
/// interleaved signed 16-bit PCM. Per spec §4.9: "samples > 32767 -> 32767,
/// < -32768 -> -32768."
pub fn clamp_to_i16(block: &[f32]) -> Vec<i16> {
    block
        .iter()
        .map(|&s| (s * 32767.0).round().clamp(-32768.0, 32767.0) as i16)
        .collect()
}

pub trait AudioSink {
    fn push_block(&mut self, pcm: &[i16]) -> Result<()>;
    fn sample_rate(&self) -> u32;
    fn channels(&self) -> u8;
}

impl AudioSink for VirtualWavSink {
    fn push_block(&mut self, pcm: &[i16]) -> Result<()> {
        self.write_block(pcm)
    }

    fn sample_rate(&self) -> u32 {
        VirtualWavSink::sample_rate(self)
    }

    fn channels(&self) -> u8 {
        VirtualWavSink::channels(self) as u8
    }
}

/// Lock a mutex, recovering gracefully from poisoning rather than
/// propagating the panic into the audio callback.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("mixer: ring buffer mutex was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Shared ring of queued interleaved i16 frames between the producer
/// (`Player::render_loop`) and the device callback.
pub struct BlockRing {
    queue: Mutex<VecDeque<i16>>,
    channels: u8,
}

impl BlockRing {
    pub fn new(channels: u8) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            channels,
        }
    }

    pub fn push(&self, pcm: &[i16]) {
        let mut q = lock_or_recover(&self.queue);
        q.extend(pcm.iter().copied());
    }

    /// Pull up to `len` interleaved samples, padding with silence if the
    /// producer hasn't kept up (matches spec §4.10 pause semantics: "the
    /// sink emits silence until play resumes").
    pub fn pull_into(&self, out: &mut [f32], gain: f32) {
        let mut q = lock_or_recover(&self.queue);
        for slot in out.iter_mut() {
            *slot = q.pop_front().map(|s| s as f32 / 32768.0 * gain).unwrap_or(0.0);
        }
    }

    pub fn queued_frames(&self) -> usize {
        lock_or_recover(&self.queue).len() / self.channels.max(1) as usize
    }
}

#[cfg(feature = "device")]
pub mod cpal_sink {
    use super::*;
    use std::sync::Arc;

    const OUTPUT_GAIN: f32 = 1.0;

    /// Live audio device output. The `cpal::Stream` is kept alive for as
    /// long as this sink lives; dropping it stops playback.
    pub struct CpalSink {
        ring: Arc<BlockRing>,
        sample_rate: u32,
        channels: u8,
        _stream: cpal::Stream,
    }

    impl CpalSink {
        pub fn open(sample_rate: u32, channels: u8) -> Result<Self> {
            use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or_else(|| PlayerError::Device("no default output device".into()))?;

            let config = cpal::StreamConfig {
                channels: channels as u16,
                sample_rate: cpal::SampleRate(sample_rate),
                buffer_size: cpal::BufferSize::Default,
            };

            let ring = Arc::new(BlockRing::new(channels));
            let callback_ring = ring.clone();

            let stream = device
                .build_output_stream(
                    &config,
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                        callback_ring.pull_into(data, OUTPUT_GAIN);
                    },
                    |err| log::warn!("audio stream error: {err}"),
                    None,
                )
                .map_err(|e| PlayerError::Device(e.to_string()))?;

            stream
                .play()
                .map_err(|e| PlayerError::Device(e.to_string()))?;

            Ok(Self {
                ring,
                sample_rate,
                channels,
                _stream: stream,
            })
        }
    }

    impl AudioSink for CpalSink {
        fn push_block(&mut self, pcm: &[i16]) -> Result<()> {
            self.ring.push(pcm);
            Ok(())
        }

        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn channels(&self) -> u8 {
            self.channels
        }
    }
}

#[cfg(feature = "device")]
pub use cpal_sink::CpalSink;
