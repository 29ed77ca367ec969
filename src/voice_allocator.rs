//! Fixed voice pool and triggering/stealing policy — spec §4.6, steal
//! formula grounded per SPEC_FULL.md §3 (`original_source/linux2/midiplayer.cpp`).

use crate::midi::PERCUSSION_CHANNEL;

const FREE_VOICE_BONUS: f64 = 3000.0;
const SAME_INSTRUMENT_BONUS: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct Voice {
    pub active: bool,
    pub channel: u8,
    pub note: u8,
    pub velocity: u8,
    pub program: u8,
    pub is_percussion: bool,
    pub triggered_at_seconds: f64,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            active: false,
            channel: 0,
            note: 0,
            velocity: 0,
            program: 0,
            is_percussion: false,
            triggered_at_seconds: 0.0,
        }
    }
}

/// Outcome of `VoiceAllocator::trigger`: which voice was (re-)used, and,
/// when triggering stole an active voice out from under another
/// (channel, note), which one — the caller owns the channel-side
/// note->voice mapping and must clear that slot itself (spec §4.6's
/// "Handle collision with existing note" step; grounded in
/// `deallocateActiveNote`'s call from `triggerNote` in
/// `original_source/linux2/midiplayer.cpp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerResult {
    pub voice_index: usize,
    pub stolen_from: Option<(u8, u8)>,
}

pub struct VoiceAllocator {
    voices: Vec<Voice>,
    clock_seconds: f64,
}

impl VoiceAllocator {
    pub fn new(pool_size: usize) -> Self {
        Self {
            voices: vec![Voice::default(); pool_size],
            clock_seconds: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn voice(&self, index: usize) -> &Voice {
        &self.voices[index]
    }

    /// Advance the allocator's notion of elapsed time; called once per
    /// rendered block so voice ages (used by the steal formula) track
    /// wall/DSP time rather than event count.
    pub fn advance_clock(&mut self, dt_seconds: f64) {
        self.clock_seconds += dt_seconds;
    }

    /// Trigger `(channel, note)`: re-trigger in place if already active
    /// (step 1), else take the first inactive voice (step 2), else steal
    /// the highest-scoring active voice (step 3).
    pub fn trigger(
        &mut self,
        channel: u8,
        note: u8,
        velocity: u8,
        program: u8,
        is_percussion: bool,
    ) -> TriggerResult {
        if let Some(index) = self
            .voices
            .iter()
            .position(|v| v.active && v.channel == channel && v.note == note)
        {
            self.activate(index, channel, note, velocity, program, is_percussion);
            return TriggerResult { voice_index: index, stolen_from: None };
        }

        if let Some(index) = self.voices.iter().position(|v| !v.active) {
            self.activate(index, channel, note, velocity, program, is_percussion);
            return TriggerResult { voice_index: index, stolen_from: None };
        }

        let index = self.steal_target(program, is_percussion);
        let victim = self.voices[index];
        let stolen_from = victim.active.then_some((victim.channel, victim.note));
        self.activate(index, channel, note, velocity, program, is_percussion);
        TriggerResult { voice_index: index, stolen_from }
    }

    fn activate(
        &mut self,
        index: usize,
        channel: u8,
        note: u8,
        velocity: u8,
        program: u8,
        is_percussion: bool,
    ) {
        self.voices[index] = Voice {
            active: true,
            channel,
            note,
            velocity,
            program,
            is_percussion,
            triggered_at_seconds: self.clock_seconds,
        };
    }

    fn steal_target(&self, incoming_program: u8, incoming_is_percussion: bool) -> usize {
        let mut best_index = 0;
        let mut best_score = f64::MIN;
        for (i, voice) in self.voices.iter().enumerate() {
            let mut score = if voice.active {
                self.clock_seconds - voice.triggered_at_seconds
            } else {
                FREE_VOICE_BONUS
            };
            if voice.active && voice.program == incoming_program {
                score += SAME_INSTRUMENT_BONUS;
            }
            if voice.active && voice.is_percussion && !incoming_is_percussion {
                score = score * 2.0 + 9.0;
            }
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }
        best_index
    }

    pub fn release(&mut self, index: usize) {
        if index < self.voices.len() {
            self.voices[index].active = false;
        }
    }

    /// Immediate silence (All-Sound-Off): identical to `release` in the
    /// simplified no-release-envelope model (spec §4.6).
    pub fn silence(&mut self, index: usize) {
        self.release(index);
    }

    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.voices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.active)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrigger_same_channel_note_reuses_voice() {
        let mut pool = VoiceAllocator::new(4);
        let a = pool.trigger(0, 60, 100, 0, false).voice_index;
        let b = pool.trigger(0, 60, 80, 0, false).voice_index;
        assert_eq!(a, b);
        assert_eq!(pool.voice(a).velocity, 80);
    }

    #[test]
    fn fills_free_voices_before_stealing() {
        let mut pool = VoiceAllocator::new(2);
        let a = pool.trigger(0, 60, 100, 0, false).voice_index;
        let b = pool.trigger(0, 61, 100, 0, false).voice_index;
        assert_ne!(a, b);
        assert!(pool.voice(a).active);
        assert!(pool.voice(b).active);
    }

    #[test]
    fn steals_oldest_voice_when_pool_saturated() {
        let mut pool = VoiceAllocator::new(1);
        let first = pool.trigger(0, 60, 100, 5, false).voice_index;
        pool.advance_clock(1.0);
        let second = pool.trigger(0, 61, 100, 5, false).voice_index;
        assert_eq!(first, second, "only one voice exists, it must be reused");
        assert_eq!(pool.voice(second).note, 61);
    }

    #[test]
    fn stealing_an_active_voice_reports_the_victim_channel_and_note() {
        let mut pool = VoiceAllocator::new(1);
        pool.trigger(0, 60, 100, 5, false);
        pool.advance_clock(1.0);
        let result = pool.trigger(1, 61, 100, 5, false);
        assert_eq!(result.stolen_from, Some((0, 60)));
    }

    #[test]
    fn triggering_into_a_free_voice_reports_no_theft() {
        let mut pool = VoiceAllocator::new(2);
        let result = pool.trigger(0, 60, 100, 0, false);
        assert_eq!(result.stolen_from, None);
    }

    #[test]
    fn percussion_voice_is_favored_as_steal_target_over_melodic_by_formula() {
        let mut pool = VoiceAllocator::new(2);
        // Voice 0: percussion, old. Voice 1: melodic, fresh.
        pool.trigger(PERCUSSION_CHANNEL, 38, 100, 128, true);
        pool.advance_clock(0.5);
        pool.trigger(1, 60, 100, 0, false);

        let target = pool.steal_target(0, false);
        assert_eq!(target, 0, "percussion scores highest under the doubled-plus-nine term");
    }

    #[test]
    fn release_frees_the_voice_for_reuse() {
        let mut pool = VoiceAllocator::new(1);
        let idx = pool.trigger(0, 60, 100, 0, false).voice_index;
        pool.release(idx);
        assert!(!pool.voice(idx).active);
        let idx2 = pool.trigger(0, 72, 100, 0, false).voice_index;
        assert_eq!(idx, idx2);
    }
}
