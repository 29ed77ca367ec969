//! FM synthesis engine — spec §4.7.

use super::{pan_gains, SynthEngine};
use crate::bank::fm::{melodic_patch, percussion_patch, FmPatch, OperatorDesc};
use crate::channel::{ChannelState, CHANNEL_COUNT};
use crate::voice_allocator::VoiceAllocator;
use std::f32::consts::PI;

const MODULATION_INDEX: f32 = 4.0;
const ATTACK_MAX_SECONDS: f32 = 2.0;
const ATTACK_MIN_SECONDS: f32 = 0.003;
const DECAY_MAX_SECONDS: f32 = 3.0;
const DECAY_MIN_SECONDS: f32 = 0.01;

#[derive(Debug, Clone, Copy, Default)]
struct FmVoiceState {
    mod_phase: f32,
    car_phase: f32,
    elapsed_seconds: f32,
    prev_mod_out: f32,
}

pub struct FmSynth {
    voices: Vec<FmVoiceState>,
}

impl FmSynth {
    pub fn new(pool_size: usize) -> Self {
        Self {
            voices: vec![FmVoiceState::default(); pool_size],
        }
    }
}

/// Evaluate one of OPL3's 8 waveforms at phase `t` (fractional part only
/// matters), selected by the low 3 bits of an operator's waveform byte.
fn waveform(select: u8, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    let s = (2.0 * PI * t).sin();
    match select & 0x07 {
        0 => s,
        1 => s.max(0.0),
        2 => s.abs(),
        3 => {
            let tt = (t * 4.0).rem_euclid(1.0);
            (2.0 * PI * tt).sin().max(0.0)
        }
        4 => {
            if t < 0.5 {
                (2.0 * PI * (t * 2.0)).sin()
            } else {
                0.0
            }
        }
        5 => {
            if t < 0.5 {
                s.abs()
            } else {
                0.0
            }
        }
        6 => {
            if t < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        7 => 1.0 - 2.0 * t,
        _ => unreachable!(),
    }
}

fn operator_mult(op: &OperatorDesc) -> f32 {
    let mult = op.am_vib_sus_ksr_mult & 0x0F;
    if mult == 0 {
        0.5
    } else {
        mult as f32
    }
}

/// Attack/decay/sustain envelope driven purely by voice age: voices are
/// deactivated immediately on release (spec §4.6's simplified model), so
/// there is no release phase to render.
fn envelope_value(op: &OperatorDesc, elapsed_seconds: f32) -> f32 {
    let attack = (op.attack_decay >> 4) & 0x0F;
    let decay = op.attack_decay & 0x0F;
    let sustain = (op.sustain_release >> 4) & 0x0F;

    let attack_seconds = ATTACK_MAX_SECONDS
        - (ATTACK_MAX_SECONDS - ATTACK_MIN_SECONDS) * (attack as f32 / 15.0);
    let decay_seconds =
        DECAY_MAX_SECONDS - (DECAY_MAX_SECONDS - DECAY_MIN_SECONDS) * (decay as f32 / 15.0);
    let sustain_level = 1.0 - (sustain as f32 / 15.0) * 0.85;

    if elapsed_seconds < attack_seconds {
        elapsed_seconds / attack_seconds
    } else if elapsed_seconds < attack_seconds + decay_seconds {
        let t = (elapsed_seconds - attack_seconds) / decay_seconds;
        1.0 + (sustain_level - 1.0) * t
    } else {
        sustain_level
    }
}

fn note_frequency(note: u8, bend_semitones: f32) -> f32 {
    440.0 * 2f32.powf((note as f32 + bend_semitones - 69.0) / 12.0)
}

impl SynthEngine for FmSynth {
    fn on_trigger(&mut self, voice_index: usize, _note: u8, _velocity: u8, _program: u8, _is_percussion: bool) {
        if let Some(state) = self.voices.get_mut(voice_index) {
            *state = FmVoiceState::default();
        }
    }

    fn resize(&mut self, count: usize) {
        self.voices.resize(count, FmVoiceState::default());
    }

    fn render_block(
        &mut self,
        voices: &VoiceAllocator,
        channels: &[ChannelState; CHANNEL_COUNT],
        sample_rate: u32,
        global_volume_percent: u32,
        out: &mut [f32],
    ) {
        let frame_count = out.len() / 2;
        let dt = 1.0 / sample_rate as f32;
        let global_gain = global_volume_percent as f32 / 100.0;

        for index in voices.active_indices() {
            let voice = *voices.voice(index);
            let patch: &FmPatch = if voice.is_percussion {
                match percussion_patch(voice.note) {
                    Some(p) => p,
                    None => continue,
                }
            } else {
                melodic_patch(voice.program)
            };

            let channel = &channels[voice.channel as usize];
            let freq = note_frequency(voice.note, channel.bend_semitones());
            let mod_inc = freq * operator_mult(&patch.modulator) / sample_rate as f32;
            let car_inc = freq * operator_mult(&patch.carrier) / sample_rate as f32;
            let algorithm_additive = patch.feedback_connection & 1 != 0;
            let feedback_amount = ((patch.feedback_connection >> 1) & 0x07) as f32 / 7.0;

            let state = &mut self.voices[index];
            let (pan_l, pan_r) = pan_gains(channel.pan);
            let velocity_gain = voice.velocity as f32 / 127.0;
            let channel_gain = channel.volume as f32 / 127.0;

            for frame in 0..frame_count {
                state.mod_phase += mod_inc;
                let mod_out = waveform(
                    patch.modulator.waveform,
                    state.mod_phase + state.prev_mod_out * feedback_amount,
                );
                state.prev_mod_out = mod_out;

                state.car_phase += car_inc * if algorithm_additive { 1.0 } else { 1.0 + mod_out * MODULATION_INDEX };
                let carrier_value = waveform(patch.carrier.waveform, state.car_phase);

                let carrier_env = envelope_value(&patch.carrier, state.elapsed_seconds);
                let mut sample = carrier_value * carrier_env;
                if algorithm_additive {
                    let mod_env = envelope_value(&patch.modulator, state.elapsed_seconds);
                    sample = 0.5 * (sample + mod_out * mod_env);
                }

                sample *= velocity_gain * channel_gain * global_gain;
                state.elapsed_seconds += dt;

                out[frame * 2] += sample * pan_l;
                out[frame * 2 + 1] += sample * pan_r;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelState;

    fn channels_default() -> [ChannelState; CHANNEL_COUNT] {
        std::array::from_fn(|_| ChannelState::default())
    }

    #[test]
    fn waveform_sine_is_zero_at_phase_zero_and_half() {
        assert!(waveform(0, 0.0).abs() < 1e-5);
        assert!(waveform(0, 0.5).abs() < 1e-4);
    }

    #[test]
    fn half_sine_never_goes_negative() {
        for i in 0..100 {
            let t = i as f32 / 100.0;
            assert!(waveform(1, t) >= 0.0);
        }
    }

    #[test]
    fn render_block_produces_nonzero_output_for_active_voice() {
        let mut synth = FmSynth::new(4);
        let mut pool = VoiceAllocator::new(4);
        let idx = pool.trigger(0, 60, 100, 0, false).voice_index;
        synth.on_trigger(idx, 60, 100, 0, false);

        let channels = channels_default();
        let mut out = vec![0.0f32; 256 * 2];
        synth.render_block(&pool, &channels, 44100, 100, &mut out);

        assert!(out.iter().any(|&s| s.abs() > 1e-6));
    }

    #[test]
    fn percussion_note_out_of_range_renders_silence() {
        let mut synth = FmSynth::new(4);
        let mut pool = VoiceAllocator::new(4);
        let idx = pool.trigger(9, 10, 100, 128, true).voice_index; // note 10 < base note 35
        synth.on_trigger(idx, 10, 100, 128, true);

        let channels = channels_default();
        let mut out = vec![0.0f32; 64 * 2];
        synth.render_block(&pool, &channels, 44100, 100, &mut out);

        assert!(out.iter().all(|&s| s == 0.0));
    }
}
