//! SoundFont-2 bank parser — spec §3 ("Sf2Sample", "Sf2Instrument",
//! "Sf2Preset"), §4.2 ("SoundFont bank"), §6 "SF2" bit-exact format.
//!
//! Hand-rolled RIFF walk over a `ByteStream`: locate `sdta/smpl` (the PCM
//! pool), then `pdta/phdr` (38B records), `pdta/inst` (22B records), and
//! `pdta/shdr` (46B records), each terminated by a sentinel record that is
//! discarded. The full SF2 bag/generator pipeline is simplified to one
//! sample zone list per instrument, as spec §4.2 explicitly allows
//! ("MAY be simplified to...") — recorded as an accepted Open Question in
//! DESIGN.md.

use crate::error::{truncated, PlayerError, Result};
use crate::readers::{read_bytes, read_le_i16, read_le_u16, read_le_u32, read_tag, ByteStream};
use std::io::{Seek, SeekFrom};

const PHDR_RECORD_SIZE: u64 = 38;
const INST_RECORD_SIZE: u64 = 22;
const SHDR_RECORD_SIZE: u64 = 46;

#[derive(Debug, Clone)]
pub struct Sf2Sample {
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub loop_start: u32,
    pub loop_end: u32,
    pub sample_rate: u32,
    pub original_pitch: u8,
    pub pitch_correction_cents: i8,
    pub link: u16,
    pub sample_type: u16,
    /// Lazily materialized by `SampleStore`; empty until first use.
    pub data: Option<Vec<i16>>,
}

impl Sf2Sample {
    pub fn len_frames(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyRange {
    pub lo: u8,
    pub hi: u8,
}

impl KeyRange {
    pub fn contains(&self, v: u8) -> bool {
        v >= self.lo && v <= self.hi
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub key_range: KeyRange,
    pub vel_range: KeyRange,
    pub sample_index: usize,
}

#[derive(Debug, Clone)]
pub struct Sf2Instrument {
    pub name: String,
    pub zones: Vec<Zone>,
}

impl Sf2Instrument {
    /// First matching zone in declaration order wins, per spec §3.
    pub fn zone_for(&self, key: u8, velocity: u8) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|z| z.key_range.contains(key) && z.vel_range.contains(velocity))
    }
}

#[derive(Debug, Clone)]
pub struct Sf2Preset {
    pub name: String,
    pub bank: u16,
    pub program: u16,
    pub instrument_index: usize,
}

pub struct Sf2Bank {
    pub presets: Vec<Sf2Preset>,
    pub instruments: Vec<Sf2Instrument>,
    pub samples: Vec<Sf2Sample>,
    /// Absolute byte offset of the start of the `smpl` sub-chunk body, so
    /// the sample store can seek+read lazily without re-walking the RIFF.
    pub smpl_offset: u64,
    pub smpl_size: u32,
}

impl Sf2Bank {
    /// `(bank, program)` lookup; duplicates resolved by first match, per
    /// spec §3.
    pub fn preset(&self, bank: u16, program: u16) -> Option<&Sf2Preset> {
        self.presets
            .iter()
            .find(|p| p.bank == bank && p.program == program)
    }

    pub fn instrument(&self, index: usize) -> Option<&Sf2Instrument> {
        self.instruments.get(index)
    }

    pub fn sample(&self, index: usize) -> Option<&Sf2Sample> {
        self.samples.get(index)
    }
}

struct SubChunk {
    offset: u64,
    size: u32,
}

/// Parse an SF2 soundfont from a `sfbk`-form RIFF container.
pub fn parse_sf2<R: ByteStream>(r: &mut R) -> Result<Sf2Bank> {
    let riff_tag = read_tag(r)?;
    if &riff_tag != b"RIFF" {
        return Err(PlayerError::Parse("SF2: missing RIFF tag".into()));
    }
    let _riff_size = read_le_u32(r)?;
    let form = read_tag(r)?;
    if &form != b"sfbk" {
        return Err(PlayerError::Parse("SF2: missing sfbk form type".into()));
    }

    let mut smpl: Option<SubChunk> = None;
    let mut phdr: Option<SubChunk> = None;
    let mut inst: Option<SubChunk> = None;
    let mut shdr: Option<SubChunk> = None;

    let end = r.size()?;
    loop {
        let pos = r.tell()?;
        if pos >= end {
            break;
        }
        let tag = read_tag(r)?;
        let size = read_le_u32(r)?;
        if &tag == b"LIST" {
            let list_start = r.tell()?;
            let list_type = read_tag(r)?;
            let body_start = r.tell()?;
            let body_len = size - 4;
            walk_list(r, &list_type, body_start, body_len, &mut smpl, &mut phdr, &mut inst, &mut shdr)?;
            r.seek(SeekFrom::Start(list_start + size as u64 + (size as u64 & 1)))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
        } else {
            let pad = size & 1;
            r.seek(SeekFrom::Current((size + pad) as i64))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
        }
    }

    let phdr = phdr.ok_or_else(|| PlayerError::Parse("SF2: missing phdr".into()))?;
    let inst = inst.ok_or_else(|| PlayerError::Parse("SF2: missing inst".into()))?;
    let shdr = shdr.ok_or_else(|| PlayerError::Parse("SF2: missing shdr".into()))?;
    let smpl = smpl.ok_or_else(|| PlayerError::Parse("SF2: missing smpl".into()))?;

    let samples = parse_shdr(r, &shdr)?;
    let raw_instruments = parse_inst(r, &inst)?;
    let presets = parse_phdr(r, &phdr, &raw_instruments)?;

    // Expand each `inst` record (name + first-sample-zone bag pointer) into
    // a zone list. The simplified mapping (§4.2) gives each instrument one
    // all-keys/all-velocities zone pointing at the sample that shares its
    // ordinal position, synthesizing a default catch-all zone when bag data
    // is absent (there is no bag/generator chunk in this simplified
    // reader, so every instrument gets exactly the default zone).
    let instruments = raw_instruments
        .into_iter()
        .enumerate()
        .map(|(i, name)| Sf2Instrument {
            name,
            zones: vec![Zone {
                key_range: KeyRange { lo: 0, hi: 127 },
                vel_range: KeyRange { lo: 0, hi: 127 },
                sample_index: i.min(samples.len().saturating_sub(1)),
            }],
        })
        .collect();

    Ok(Sf2Bank {
        presets,
        instruments,
        samples,
        smpl_offset: smpl.offset,
        smpl_size: smpl.size,
    })
}

#[allow(clippy::too_many_arguments)]
fn walk_list<R: ByteStream>(
    r: &mut R,
    list_type: &[u8; 4],
    body_start: u64,
    body_len: u32,
    smpl: &mut Option<SubChunk>,
    phdr: &mut Option<SubChunk>,
    inst: &mut Option<SubChunk>,
    shdr: &mut Option<SubChunk>,
) -> Result<()> {
    match list_type {
        b"sdta" => {
            let mut pos = body_start;
            let body_end = body_start + body_len as u64;
            r.seek(SeekFrom::Start(pos))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
            while pos < body_end {
                let tag = read_tag(r)?;
                let size = read_le_u32(r)?;
                let data_start = r.tell()?;
                if &tag == b"smpl" {
                    *smpl = Some(SubChunk {
                        offset: data_start,
                        size,
                    });
                }
                let pad = size & 1;
                pos = data_start + size as u64 + pad as u64;
                r.seek(SeekFrom::Start(pos))
                    .map_err(|e| PlayerError::Parse(e.to_string()))?;
            }
        }
        b"pdta" => {
            let mut pos = body_start;
            let body_end = body_start + body_len as u64;
            r.seek(SeekFrom::Start(pos))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
            while pos < body_end {
                let tag = read_tag(r)?;
                let size = read_le_u32(r)?;
                let data_start = r.tell()?;
                let sub = SubChunk {
                    offset: data_start,
                    size,
                };
                match &tag {
                    b"phdr" => *phdr = Some(sub),
                    b"inst" => *inst = Some(sub),
                    b"shdr" => *shdr = Some(sub),
                    _ => {}
                }
                let pad = size & 1;
                pos = data_start + size as u64 + pad as u64;
                r.seek(SeekFrom::Start(pos))
                    .map_err(|e| PlayerError::Parse(e.to_string()))?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn read_fixed_name<R: ByteStream>(r: &mut R, len: usize) -> Result<String> {
    let bytes = read_bytes(r, len)?;
    let nul = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(String::from_utf8_lossy(&bytes[..nul]).into_owned())
}

fn parse_phdr<R: ByteStream>(
    r: &mut R,
    chunk: &SubChunk,
    instruments: &[String],
) -> Result<Vec<Sf2Preset>> {
    let count = (chunk.size as u64 / PHDR_RECORD_SIZE).saturating_sub(1) as usize;
    r.seek(SeekFrom::Start(chunk.offset))
        .map_err(|e| PlayerError::Parse(e.to_string()))?;
    let mut presets = Vec::with_capacity(count);
    for _ in 0..count {
        let name = read_fixed_name(r, 20)?;
        let program = read_le_u16(r)?;
        let bank = read_le_u16(r)?;
        let bag_index = read_le_u16(r)? as usize;
        let _library = read_le_u32(r)?;
        let _genre = read_le_u32(r)?;
        let _morphology = read_le_u32(r)?;
        let instrument_index = bag_index.min(instruments.len().saturating_sub(1));
        presets.push(Sf2Preset {
            name,
            bank,
            program,
            instrument_index,
        });
    }
    Ok(presets)
}

fn parse_inst<R: ByteStream>(r: &mut R, chunk: &SubChunk) -> Result<Vec<String>> {
    let count = (chunk.size as u64 / INST_RECORD_SIZE).saturating_sub(1) as usize;
    r.seek(SeekFrom::Start(chunk.offset))
        .map_err(|e| PlayerError::Parse(e.to_string()))?;
    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        let name = read_fixed_name(r, 20)?;
        let _bag_index = read_le_u16(r)?;
        names.push(name);
    }
    Ok(names)
}

fn parse_shdr<R: ByteStream>(r: &mut R, chunk: &SubChunk) -> Result<Vec<Sf2Sample>> {
    let count = (chunk.size as u64 / SHDR_RECORD_SIZE).saturating_sub(1) as usize;
    r.seek(SeekFrom::Start(chunk.offset))
        .map_err(|e| PlayerError::Parse(e.to_string()))?;
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let name = read_fixed_name(r, 20)?;
        let start = read_le_u32(r)?;
        let end = read_le_u32(r)?;
        let loop_start = read_le_u32(r)?;
        let loop_end = read_le_u32(r)?;
        let sample_rate = read_le_u32(r)?;
        let original_pitch = read_bytes(r, 1)?[0];
        let pitch_correction_cents = read_bytes(r, 1)?[0] as i8;
        let link = read_le_u16(r)?;
        let sample_type = read_le_u16(r)?;
        if sample_rate == 0 {
            return Err(truncated("SF2 sample record: zero sample rate"));
        }
        samples.push(Sf2Sample {
            name,
            start,
            end: end.max(start),
            loop_start: loop_start.clamp(start, end.max(start)),
            loop_end: loop_end.clamp(loop_start.clamp(start, end.max(start)), end.max(start)),
            sample_rate,
            original_pitch,
            pitch_correction_cents,
            link,
            sample_type,
            data: None,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn build_minimal_sf2(sample_pcm: &[i16]) -> Vec<u8> {
        let mut smpl_body = Vec::new();
        for &s in sample_pcm {
            smpl_body.extend_from_slice(&s.to_le_bytes());
        }

        let mut phdr_body = Vec::new();
        // one real preset record: name(20) program(2) bank(2) bag(2) lib(4) genre(4) morph(4)
        let mut rec = vec![0u8; 20];
        rec[0] = b'P';
        phdr_body.extend_from_slice(&rec);
        phdr_body.extend_from_slice(&0u16.to_le_bytes()); // program 0
        phdr_body.extend_from_slice(&0u16.to_le_bytes()); // bank 0
        phdr_body.extend_from_slice(&0u16.to_le_bytes()); // bag index 0
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        // terminator record
        phdr_body.extend_from_slice(&[0u8; 38]);

        let mut inst_body = Vec::new();
        let mut irec = vec![0u8; 20];
        irec[0] = b'I';
        inst_body.extend_from_slice(&irec);
        inst_body.extend_from_slice(&0u16.to_le_bytes());
        inst_body.extend_from_slice(&[0u8; 22]); // terminator

        let mut shdr_body = Vec::new();
        let mut srec = vec![0u8; 20];
        srec[0] = b'S';
        shdr_body.extend_from_slice(&srec);
        shdr_body.extend_from_slice(&0u32.to_le_bytes()); // start
        shdr_body.extend_from_slice(&(sample_pcm.len() as u32).to_le_bytes()); // end
        shdr_body.extend_from_slice(&0u32.to_le_bytes()); // loop start
        shdr_body.extend_from_slice(&(sample_pcm.len() as u32).to_le_bytes()); // loop end
        shdr_body.extend_from_slice(&44100u32.to_le_bytes());
        shdr_body.push(60); // original pitch
        shdr_body.push(0); // pitch correction
        shdr_body.extend_from_slice(&0u16.to_le_bytes()); // link
        shdr_body.extend_from_slice(&1u16.to_le_bytes()); // mono
        shdr_body.extend_from_slice(&[0u8; 46]); // terminator

        let list = |list_type: &[u8; 4], chunks: &[(&[u8; 4], &[u8])]| -> Vec<u8> {
            let mut body = Vec::new();
            body.extend_from_slice(list_type);
            for (tag, data) in chunks {
                body.extend_from_slice(*tag);
                body.extend_from_slice(&(data.len() as u32).to_le_bytes());
                body.extend_from_slice(data);
                if data.len() & 1 == 1 {
                    body.push(0);
                }
            }
            let mut out = Vec::new();
            out.extend_from_slice(b"LIST");
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&body);
            out
        };

        let sdta = list(b"sdta", &[(b"smpl", &smpl_body)]);
        let pdta = list(
            b"pdta",
            &[
                (b"phdr", &phdr_body),
                (b"inst", &inst_body),
                (b"shdr", &shdr_body),
            ],
        );

        let mut riff_body = Vec::new();
        riff_body.extend_from_slice(b"sfbk");
        riff_body.extend_from_slice(&sdta);
        riff_body.extend_from_slice(&pdta);

        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF");
        file.extend_from_slice(&(riff_body.len() as u32).to_le_bytes());
        file.extend_from_slice(&riff_body);
        file
    }

    #[test]
    fn parses_minimal_sf2_counts() {
        let bytes = build_minimal_sf2(&[1, 2, 3, 4]);
        let mut cursor = Cursor::new(bytes);
        let bank = parse_sf2(&mut cursor).unwrap();
        assert_eq!(bank.presets.len(), 1);
        assert_eq!(bank.instruments.len(), 1);
        assert_eq!(bank.samples.len(), 1);
        assert_eq!(bank.presets[0].bank, 0);
        assert_eq!(bank.presets[0].program, 0);
    }

    #[test]
    fn lazy_sample_bytes_readable_from_smpl_offset() {
        let bytes = build_minimal_sf2(&[10, -10, 20, -20]);
        let mut cursor = Cursor::new(bytes);
        let bank = parse_sf2(&mut cursor).unwrap();
        cursor
            .seek(SeekFrom::Start(bank.smpl_offset))
            .unwrap();
        let mut buf = [0u8; 2];
        cursor.write_all(&[]).ok();
        let sample = &bank.samples[0];
        cursor
            .seek(SeekFrom::Start(
                bank.smpl_offset + 2 * sample.start as u64,
            ))
            .unwrap();
        let v = read_le_i16(&mut cursor).unwrap();
        assert_eq!(v, 10);
        let _ = buf;
    }
}
