//! Lazy-loaded sample PCM store — spec §3 "Lifecycle", §4.2 "Sample lazy
//! load".
//!
//! On first use of sample index `i`, reads `(end_i - start_i)` 16-bit
//! words from `smpl_offset + 2*start_i`, normalizes to host endianness,
//! and retains the buffer for the remainder of the session.

use crate::bank::sf2::Sf2Bank;
use crate::error::{PlayerError, Result};
use crate::readers::{read_le_i16, ByteStream};
use std::io::SeekFrom;

pub struct SampleStore {
    loaded: Vec<Option<Vec<i16>>>,
}

impl SampleStore {
    pub fn new(sample_count: usize) -> Self {
        Self {
            loaded: vec![None; sample_count],
        }
    }

    /// Fetch (loading if necessary) the PCM frames for sample `index`.
    /// Returns `ResourceExhausted` only if the stream read itself fails;
    /// an absent sample index returns an empty slice (spec §7: out of
    /// memory on sample load silently drops the triggering note — the
    /// caller that asked for this sample's data is the voice allocator,
    /// which treats an empty result as "nothing to play").
    pub fn get<'a, R: ByteStream>(
        &'a mut self,
        bank: &Sf2Bank,
        index: usize,
        stream: &mut R,
    ) -> Result<&'a [i16]> {
        if index >= self.loaded.len() {
            return Ok(&[]);
        }
        if self.loaded[index].is_none() {
            let sample = match bank.sample(index) {
                Some(s) => s,
                None => {
                    self.loaded[index] = Some(Vec::new());
                    return Ok(self.loaded[index].as_deref().unwrap());
                }
            };
            let frame_count = sample.len_frames() as usize;
            let byte_offset = bank.smpl_offset + 2 * sample.start as u64;
            stream
                .seek(SeekFrom::Start(byte_offset))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
            let mut frames = Vec::with_capacity(frame_count);
            for _ in 0..frame_count {
                match read_le_i16(stream) {
                    Ok(v) => frames.push(v),
                    Err(_) => break, // truncated smpl data: keep what we got
                }
            }
            self.loaded[index] = Some(frames);
        }
        Ok(self.loaded[index].as_deref().unwrap())
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).map(|o| o.is_some()).unwrap_or(false)
    }

    /// Non-loading accessor for already-materialized PCM, used by the
    /// render path (which has no `ByteStream` handy mid-block).
    pub fn peek(&self, index: usize) -> Option<&[i16]> {
        self.loaded.get(index).and_then(|o| o.as_deref())
    }

    /// Evict all materialized sample data, e.g. on bank unload.
    pub fn clear(&mut self) {
        for slot in &mut self.loaded {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::sf2::parse_sf2;
    use std::io::Cursor;

    fn minimal_sf2_with_one_sample(pcm: &[i16]) -> Vec<u8> {
        // Reuses the builder logic from bank::sf2 tests via a local copy
        // to avoid a pub(test) dependency across modules.
        let mut smpl_body = Vec::new();
        for &s in pcm {
            smpl_body.extend_from_slice(&s.to_le_bytes());
        }
        let mut phdr_body = vec![0u8; 20];
        phdr_body.extend_from_slice(&0u16.to_le_bytes());
        phdr_body.extend_from_slice(&0u16.to_le_bytes());
        phdr_body.extend_from_slice(&0u16.to_le_bytes());
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        phdr_body.extend_from_slice(&0u32.to_le_bytes());
        phdr_body.extend_from_slice(&[0u8; 38]);

        let mut inst_body = vec![0u8; 20];
        inst_body.extend_from_slice(&0u16.to_le_bytes());
        inst_body.extend_from_slice(&[0u8; 22]);

        let mut shdr_body = vec![0u8; 20];
        shdr_body.extend_from_slice(&0u32.to_le_bytes());
        shdr_body.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
        shdr_body.extend_from_slice(&0u32.to_le_bytes());
        shdr_body.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
        shdr_body.extend_from_slice(&44100u32.to_le_bytes());
        shdr_body.push(60);
        shdr_body.push(0);
        shdr_body.extend_from_slice(&0u16.to_le_bytes());
        shdr_body.extend_from_slice(&1u16.to_le_bytes());
        shdr_body.extend_from_slice(&[0u8; 46]);

        let list = |list_type: &[u8; 4], chunks: &[(&[u8; 4], &[u8])]| -> Vec<u8> {
            let mut body = Vec::new();
            body.extend_from_slice(list_type);
            for (tag, data) in chunks {
                body.extend_from_slice(*tag);
                body.extend_from_slice(&(data.len() as u32).to_le_bytes());
                body.extend_from_slice(data);
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
    fn loads_once_and_caches() {
        let bytes = minimal_sf2_with_one_sample(&[5, -5, 7, -7]);
        let mut cursor = Cursor::new(bytes);
        let bank = parse_sf2(&mut cursor).unwrap();
        let mut store = SampleStore::new(bank.samples.len());

        assert!(!store.is_loaded(0));
        let data = store.get(&bank, 0, &mut cursor).unwrap().to_vec();
        assert_eq!(data, vec![5, -5, 7, -7]);
        assert!(store.is_loaded(0));

        // Second fetch reuses the cached buffer without re-reading.
        let data2 = store.get(&bank, 0, &mut cursor).unwrap();
        assert_eq!(data2, &[5, -5, 7, -7]);
    }
}
