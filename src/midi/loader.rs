//! SMF loader — spec §4.3 "MIDI Loader", §3 "TrackCursor"/"MidiScore".

use super::event::{meta, MidiEvent};
use crate::error::{truncated, PlayerError, Result, UnsupportedFeature};
use crate::readers::{read_be_u32, read_smf_header, read_vlq, ByteStream};
use std::io::SeekFrom;

pub const DEFAULT_TEMPO_US_PER_QUARTER: u32 = 500_000; // 120 BPM

#[derive(Debug, Clone)]
pub struct TrackCursor {
    /// Offset of the first event byte in this track (constant; used to
    /// rewind on stop/loop).
    pub track_start: u64,
    /// Offset one past the last byte of this track's body.
    pub track_end: u64,
    /// Current read position (advances as events are dispatched).
    pub file_offset: u64,
    /// Ticks until this track's next event.
    pub delay_ticks: u64,
    pub running_status: u8,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct MidiScore {
    pub format: u16,
    pub ticks_per_quarter: u32,
    pub tracks: Vec<TrackCursor>,
    pub tempo_us_per_quarter: u32,
    pub loop_start: bool,
    pub loop_end: bool,
}

impl MidiScore {
    pub fn all_tracks_done(&self) -> bool {
        self.tracks.iter().all(|t| t.done)
    }
}

/// Parse `MThd` + all `MTrk` chunks. Per spec §4.3: each track cursor
/// records its starting file offset and initial delta without scanning
/// the whole track body; a malformed or truncated file fails with
/// `ParseError` and no partial score is exposed.
pub fn load_smf<R: ByteStream>(r: &mut R) -> Result<MidiScore> {
    let (format, track_count, division) = read_smf_header(r)?;
    if division & 0x8000 != 0 {
        return Err(PlayerError::Unsupported(UnsupportedFeature::SmpteDivision));
    }
    let ticks_per_quarter = division as u32;

    let mut tracks = Vec::with_capacity(track_count as usize);
    for _ in 0..track_count {
        let tag = crate::readers::read_tag(r)?;
        if &tag != b"MTrk" {
            return Err(PlayerError::Parse("expected MTrk chunk".into()));
        }
        let size = read_be_u32(r)?;
        let track_start = r.tell()?;
        let track_end = track_start + size as u64;

        let initial_delay = if size == 0 {
            0
        } else {
            read_vlq(r)? as u64
        };
        let file_offset = r.tell()?;

        tracks.push(TrackCursor {
            track_start,
            track_end,
            file_offset,
            delay_ticks: initial_delay,
            running_status: 0,
            done: size == 0,
        });

        r.seek(SeekFrom::Start(track_end))
            .map_err(|e| PlayerError::Parse(e.to_string()))?;
    }

    Ok(MidiScore {
        format,
        ticks_per_quarter,
        tracks,
        tempo_us_per_quarter: DEFAULT_TEMPO_US_PER_QUARTER,
        loop_start: false,
        loop_end: false,
    })
}

/// Dispatch exactly one event from `cursor`, updating running status and
/// the cursor's `file_offset`. Does NOT advance `delay_ticks` — the caller
/// (scheduler) reads the following VLQ delta separately per spec §4.4
/// step 1 ("...emitting the event... Then read the following VLQ delta").
pub fn read_event<R: ByteStream>(r: &mut R, cursor: &mut TrackCursor) -> Result<MidiEvent> {
    r.seek(SeekFrom::Start(cursor.file_offset))
        .map_err(|e| PlayerError::Parse(e.to_string()))?;

    let mut status = crate::readers::read_bytes(r, 1)?[0];
    if status & 0x80 == 0 {
        // Running status: this byte is actually the first data byte.
        r.seek(SeekFrom::Start(cursor.file_offset))
            .map_err(|e| PlayerError::Parse(e.to_string()))?;
        status = cursor.running_status;
        if status == 0 {
            return Err(PlayerError::Parse("running status used before any status byte".into()));
        }
    } else {
        cursor.running_status = status;
    }

    let event = match status {
        0xFF => {
            let meta_type = crate::readers::read_bytes(r, 1)?[0];
            let len = read_vlq(r)? as usize;
            let data = crate::readers::read_bytes(r, len)?;
            if meta_type == meta::END_OF_TRACK {
                cursor.done = true;
            }
            MidiEvent::Meta(meta_type, data)
        }
        0xF0 | 0xF7 => {
            let len = read_vlq(r)? as usize;
            let data = crate::readers::read_bytes(r, len)?;
            MidiEvent::SysEx(data)
        }
        s if (0x80..0xF0).contains(&s) => {
            let kind = s & 0xF0;
            let channel = s & 0x0F;
            match kind {
                0x80 => {
                    let note = crate::readers::read_bytes(r, 1)?[0];
                    let vel = crate::readers::read_bytes(r, 1)?[0];
                    MidiEvent::NoteOff(channel, note, vel)
                }
                0x90 => {
                    let note = crate::readers::read_bytes(r, 1)?[0];
                    let vel = crate::readers::read_bytes(r, 1)?[0];
                    if vel == 0 {
                        MidiEvent::NoteOff(channel, note, 0)
                    } else {
                        MidiEvent::NoteOn(channel, note, vel)
                    }
                }
                0xA0 => {
                    let note = crate::readers::read_bytes(r, 1)?[0];
                    let val = crate::readers::read_bytes(r, 1)?[0];
                    MidiEvent::PolyPressure(channel, note, val)
                }
                0xB0 => {
                    let cc = crate::readers::read_bytes(r, 1)?[0];
                    let val = crate::readers::read_bytes(r, 1)?[0];
                    MidiEvent::Control(channel, cc, val)
                }
                0xC0 => {
                    let prog = crate::readers::read_bytes(r, 1)?[0];
                    MidiEvent::Program(channel, prog)
                }
                0xD0 => {
                    let val = crate::readers::read_bytes(r, 1)?[0];
                    MidiEvent::ChanPressure(channel, val)
                }
                0xE0 => {
                    let lsb = crate::readers::read_bytes(r, 1)?[0] as u16;
                    let msb = crate::readers::read_bytes(r, 1)?[0] as u16;
                    MidiEvent::PitchBend(channel, (msb << 7) | lsb)
                }
                _ => return Err(truncated("unknown status byte")),
            }
        }
        _ => return Err(PlayerError::Parse(format!("bad status byte 0x{status:02X}"))),
    };

    cursor.file_offset = r.tell()?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn track_bytes(events: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"MTrk");
        out.extend_from_slice(&(events.len() as u32).to_be_bytes());
        out.extend_from_slice(events);
        out
    }

    fn smf(format: u16, tracks: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"MThd");
        out.extend_from_slice(&6u32.to_be_bytes());
        out.extend_from_slice(&format.to_be_bytes());
        out.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
        out.extend_from_slice(&480u16.to_be_bytes());
        for t in tracks {
            out.extend_from_slice(t);
        }
        out
    }

    #[test]
    fn zero_length_track_is_immediately_done() {
        let bytes = smf(0, &[track_bytes(&[])]);
        let mut c = Cursor::new(bytes);
        let score = load_smf(&mut c).unwrap();
        assert_eq!(score.tracks.len(), 1);
        assert!(score.tracks[0].done);
    }

    #[test]
    fn single_note_track_roundtrips() {
        // delta0 ProgramChange(0,0), delta0 NoteOn(0,60,100), delta480 NoteOff, delta0 EndOfTrack
        let events = vec![
            0x00, 0xC0, 0x00, // program change ch0 prog0
            0x00, 0x90, 60, 100, // note on
            0x83, 0x60, 0x80, 60, 0, // delta=480 (VLQ 0x83 0x60), note off
            0x00, 0xFF, 0x2F, 0x00, // end of track
        ];
        let bytes = smf(0, &[track_bytes(&events)]);
        let mut c = Cursor::new(bytes);
        let score = load_smf(&mut c).unwrap();
        assert_eq!(score.ticks_per_quarter, 480);
        let mut cursor = score.tracks[0].clone();
        assert_eq!(cursor.delay_ticks, 0);

        let ev = read_event(&mut c, &mut cursor).unwrap();
        assert_eq!(ev, MidiEvent::Program(0, 0));
        let delta = read_vlq(&mut c).unwrap();
        assert_eq!(delta, 0);
        cursor.file_offset = c.position();

        let ev = read_event(&mut c, &mut cursor).unwrap();
        assert_eq!(ev, MidiEvent::NoteOn(0, 60, 100));
    }

    #[test]
    fn smpte_division_is_unsupported() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0x8001u16.to_be_bytes()); // SMPTE (high bit set)
        let mut c = Cursor::new(bytes);
        assert!(matches!(
            load_smf(&mut c),
            Err(PlayerError::Unsupported(UnsupportedFeature::SmpteDivision))
        ));
    }
}
