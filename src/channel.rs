//! Per-channel MIDI state and event dispatch — spec §4.5.

use crate::midi::{cc, meta, MidiEvent, PERCUSSION_CHANNEL};
use crate::voice_allocator::VoiceAllocator;

pub const CHANNEL_COUNT: usize = 16;
pub const DEFAULT_BEND_RANGE_SEMITONES: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct ChannelState {
    pub program: u8,
    pub bank_msb: u8,
    pub bank_lsb: u8,
    pub volume: u8,
    pub pan: u8,
    pub sustain: bool,
    pub pitch_bend: i16,
    pub bend_range_semitones: f32,
    /// note -> voice index, for Note-Off / re-trigger lookup (§4.6 step 1).
    pub active_notes: [Option<usize>; 128],
    /// notes held down by sustain pedal once released, to be cut on pedal-up.
    pub sustained_notes: Vec<u8>,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            program: 0,
            bank_msb: 0,
            bank_lsb: 0,
            volume: 127,
            pan: 64,
            sustain: false,
            pitch_bend: 0,
            bend_range_semitones: DEFAULT_BEND_RANGE_SEMITONES,
            active_notes: [None; 128],
            sustained_notes: Vec::new(),
        }
    }
}

impl ChannelState {
    pub fn bend_semitones(&self) -> f32 {
        (self.pitch_bend as f32 / 8192.0) * self.bend_range_semitones
    }
}

/// Outcome of dispatching one event, consumed by the scheduler/Player to
/// drive scoreboard-level bookkeeping (tempo, loop markers, track-done).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    EndOfTrack,
    /// Meta events (tempo, text) the scheduler already intercepted.
    Scheduler,
    Ignored,
}

/// Apply one `MidiEvent` to the channel table and the voice pool, per the
/// dispatch table in spec §4.5. `is_percussion` lets the caller decide
/// patch lookup (channel 9 vs melodic) without this module depending on
/// `Bank` directly. `on_trigger` is invoked with `(voice_index, channel,
/// note, velocity, program, bank_msb, is_percussion)` every time a voice is
/// (re-)triggered, so the caller's synthesis engine can reset its matching
/// per-voice phase/position state (and, for sample playback, resolve the
/// channel's Bank-Select-chosen preset bank) without this module depending
/// on `SynthEngine` directly.
pub fn dispatch(
    channels: &mut [ChannelState; CHANNEL_COUNT],
    voices: &mut VoiceAllocator,
    event: &MidiEvent,
    mut on_trigger: impl FnMut(usize, u8, u8, u8, u8, u8, bool),
) -> DispatchOutcome {
    match *event {
        MidiEvent::NoteOn(ch, note, vel) if vel > 0 => {
            let is_perc = ch == PERCUSSION_CHANNEL;
            let program = channels[ch as usize].program;
            let bank_msb = channels[ch as usize].bank_msb;
            let result = voices.trigger(ch, note, vel, program, is_perc);
            // Stealing a voice out from under another (channel, note) must
            // clear that channel's own bookkeeping too, or a later Note-Off
            // for the victim note releases whichever voice now sits at that
            // index instead of silently no-op'ing (§4.6's collision step,
            // grounded in `deallocateActiveNote`'s call from `triggerNote`).
            if let Some((victim_ch, victim_note)) = result.stolen_from {
                let victim_slot = &mut channels[victim_ch as usize].active_notes[victim_note as usize];
                if *victim_slot == Some(result.voice_index) {
                    *victim_slot = None;
                }
            }
            channels[ch as usize].active_notes[note as usize] = Some(result.voice_index);
            on_trigger(result.voice_index, ch, note, vel, program, bank_msb, is_perc);
            DispatchOutcome::Handled
        }
        MidiEvent::NoteOn(ch, note, 0) | MidiEvent::NoteOff(ch, note, _) => {
            let channel = &mut channels[ch as usize];
            if channel.sustain {
                if !channel.sustained_notes.contains(&note) {
                    channel.sustained_notes.push(note);
                }
            } else if let Some(voice) = channel.active_notes[note as usize].take() {
                voices.release(voice);
            }
            DispatchOutcome::Handled
        }
        MidiEvent::Program(ch, prog) => {
            channels[ch as usize].program = prog;
            DispatchOutcome::Handled
        }
        MidiEvent::Control(ch, cc_num, val) => {
            apply_control_change(&mut channels[ch as usize], voices, cc_num, val);
            DispatchOutcome::Handled
        }
        MidiEvent::PitchBend(ch, raw) => {
            channels[ch as usize].pitch_bend = raw as i16 - 8192;
            DispatchOutcome::Handled
        }
        MidiEvent::ChanPressure(..) | MidiEvent::PolyPressure(..) => DispatchOutcome::Handled,
        MidiEvent::Meta(kind, _) if kind == meta::END_OF_TRACK => DispatchOutcome::EndOfTrack,
        MidiEvent::Meta(kind, _) if kind == meta::TEMPO || kind == meta::TEXT => {
            DispatchOutcome::Scheduler
        }
        MidiEvent::Meta(..) | MidiEvent::SysEx(..) => DispatchOutcome::Ignored,
        _ => DispatchOutcome::Ignored,
    }
}

fn apply_control_change(channel: &mut ChannelState, voices: &mut VoiceAllocator, cc_num: u8, val: u8) {
    match cc_num {
        cc::BANK_SELECT_MSB => channel.bank_msb = val,
        cc::BANK_SELECT_LSB => channel.bank_lsb = val,
        cc::VOLUME => channel.volume = val,
        cc::PAN => channel.pan = val,
        cc::SUSTAIN => {
            let was_on = channel.sustain;
            channel.sustain = val >= 64;
            if was_on && !channel.sustain {
                for note in channel.sustained_notes.drain(..) {
                    if let Some(voice) = channel.active_notes[note as usize].take() {
                        voices.release(voice);
                    }
                }
            }
        }
        cc::ALL_SOUND_OFF => {
            for slot in channel.active_notes.iter_mut() {
                if let Some(voice) = slot.take() {
                    voices.silence(voice);
                }
            }
            channel.sustained_notes.clear();
        }
        cc::RESET_CONTROLLERS => {
            // Clear bend and vibrato; retain volume and pan (§3 grounding).
            channel.pitch_bend = 0;
            channel.bend_range_semitones = DEFAULT_BEND_RANGE_SEMITONES;
        }
        cc::ALL_NOTES_OFF => {
            for note in 0..128u8 {
                if channel.active_notes[note as usize].is_none() {
                    continue;
                }
                if channel.sustain {
                    if !channel.sustained_notes.contains(&note) {
                        channel.sustained_notes.push(note);
                    }
                } else if let Some(voice) = channel.active_notes[note as usize].take() {
                    voices.release(voice);
                }
            }
        }
        _ => {}
    }
}
