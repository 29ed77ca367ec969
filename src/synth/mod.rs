//! Synthesis engines — spec §4.7 (FM) and §4.8 (sample playback).
//!
//! Exactly one engine is live per session (design note §9: the engine is
//! chosen once at load time from the loaded `Bank`, never dispatched
//! per-frame), so both engines share one trait rather than a richer
//! plugin-style registry.

pub mod fm;
pub mod sample;

use crate::channel::{ChannelState, CHANNEL_COUNT};
use crate::voice_allocator::VoiceAllocator;

/// Stereo pan split for a 0..127 MIDI pan value, 64 = center.
pub fn pan_gains(pan: u8) -> (f32, f32) {
    let p = (pan as f32 / 127.0).clamp(0.0, 1.0);
    (1.0 - p, p)
}

pub trait SynthEngine {
    /// Reset the per-voice synthesis state (phase accumulators, envelope
    /// clock, sample position) when a voice is (re-)triggered.
    fn on_trigger(&mut self, voice_index: usize, note: u8, velocity: u8, program: u8, is_percussion: bool);

    /// Ensure the engine has at least `count` per-voice state slots,
    /// matching the allocator's pool size.
    fn resize(&mut self, count: usize);

    /// Render `out.len()/2` stereo frames, additively (`+=`), for every
    /// currently-active voice in `voices`. `out` is NOT pre-cleared by the
    /// engine — clearing and final 16-bit clamp are the mixer's job.
    fn render_block(
        &mut self,
        voices: &VoiceAllocator,
        channels: &[ChannelState; CHANNEL_COUNT],
        sample_rate: u32,
        global_volume_percent: u32,
        out: &mut [f32],
    );
}
