//! MIDI event payloads — spec §3 "MidiEvent". Timing lives outside the
//! payload (on the `TrackCursor`/scheduler), per spec.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOff(u8, u8, u8),
    NoteOn(u8, u8, u8),
    PolyPressure(u8, u8, u8),
    Control(u8, u8, u8),
    Program(u8, u8),
    ChanPressure(u8, u8),
    PitchBend(u8, u16),
    Meta(u8, Vec<u8>),
    SysEx(Vec<u8>),
}

impl MidiEvent {
    pub fn channel(&self) -> Option<u8> {
        match self {
            MidiEvent::NoteOff(c, ..)
            | MidiEvent::NoteOn(c, ..)
            | MidiEvent::PolyPressure(c, ..)
            | MidiEvent::Control(c, ..)
            | MidiEvent::Program(c, ..)
            | MidiEvent::ChanPressure(c, ..)
            | MidiEvent::PitchBend(c, ..) => Some(*c),
            MidiEvent::Meta(..) | MidiEvent::SysEx(..) => None,
        }
    }
}

pub mod meta {
    pub const END_OF_TRACK: u8 = 0x2F;
    pub const TEMPO: u8 = 0x51;
    pub const TEXT: u8 = 0x01;
}

pub mod cc {
    pub const BANK_SELECT_MSB: u8 = 0;
    pub const BANK_SELECT_LSB: u8 = 32;
    pub const VOLUME: u8 = 7;
    pub const PAN: u8 = 10;
    pub const SUSTAIN: u8 = 64;
    pub const ALL_SOUND_OFF: u8 = 120;
    pub const RESET_CONTROLLERS: u8 = 121;
    pub const ALL_NOTES_OFF: u8 = 123;
}

pub const PERCUSSION_CHANNEL: u8 = 9;
