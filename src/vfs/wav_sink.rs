//! Virtual WAV sink and loader — spec §4.11, §6 "WAV (PCM)".
//!
//! Grounded in `examples/original_source/gtk3/vfs.cpp`'s
//! `VirtualWAVConverter`: the header is written once with placeholder
//! sizes, PCM is appended incrementally block-by-block as the mixer
//! renders, and the two size fields are patched on `finalize`.

use super::VirtualFile;
use crate::error::{truncated, PlayerError, Result};
use crate::readers::{read_le_i16, read_le_u16, read_le_u32, read_tag, ByteStream};
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex};

const HEADER_LEN: usize = 44;

/// Writes a canonical 44-byte WAV PCM header with placeholder size fields,
/// then appends interleaved 16-bit PCM blocks. `finalize` patches the
/// `RIFF` and `data` chunk sizes once the total length is known.
pub struct VirtualWavSink {
    file: Arc<Mutex<VirtualFile>>,
    sample_rate: u32,
    channels: u16,
    samples_written: u64,
    finalized: bool,
}

impl VirtualWavSink {
    pub fn new(file: Arc<Mutex<VirtualFile>>, sample_rate: u32, channels: u16) -> Result<Self> {
        {
            let mut f = file
                .lock()
                .map_err(|_| PlayerError::Parse("virtual file lock poisoned".into()))?;
            f.seek(SeekFrom::Start(0))
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
            write_header(&mut *f, sample_rate, channels, 0)?;
        }
        Ok(Self {
            file,
            sample_rate,
            channels,
            samples_written: 0,
            finalized: false,
        })
    }

    /// Append one block of interleaved i16 PCM (already clamped by the
    /// mixer) to the sink.
    pub fn write_block(&mut self, pcm: &[i16]) -> Result<()> {
        let mut f = self
            .file
            .lock()
            .map_err(|_| PlayerError::Parse("virtual file lock poisoned".into()))?;
        f.seek(SeekFrom::End(0))
            .map_err(|e| PlayerError::Parse(e.to_string()))?;
        for &s in pcm {
            f.write_all(&s.to_le_bytes())
                .map_err(|e| PlayerError::Parse(e.to_string()))?;
        }
        self.samples_written += pcm.len() as u64;
        Ok(())
    }

    /// Patch the RIFF and data chunk sizes. Idempotent.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        let data_size = self.samples_written * 2;
        let total = HEADER_LEN as u64 + data_size;
        let mut f = self
            .file
            .lock()
            .map_err(|_| PlayerError::Parse("virtual file lock poisoned".into()))?;
        f.patch(4, &((total - 8) as u32).to_le_bytes());
        f.patch(40, &(data_size as u32).to_le_bytes());
        self.finalized = true;
        Ok(())
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames_written(&self) -> u64 {
        self.samples_written / self.channels.max(1) as u64
    }
}

impl Drop for VirtualWavSink {
    fn drop(&mut self) {
        // Cancellation per spec §5: a pending finalize must complete or the
        // WAV is invalid.
        let _ = self.finalize();
    }
}

fn write_header<W: Write>(w: &mut W, sample_rate: u32, channels: u16, data_size: u32) -> Result<()> {
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels * 2;
    let io = |r: std::io::Result<()>| r.map_err(|e| PlayerError::Parse(e.to_string()));
    io(w.write_all(b"RIFF"))?;
    io(w.write_all(&(36 + data_size).to_le_bytes()))?;
    io(w.write_all(b"WAVE"))?;
    io(w.write_all(b"fmt "))?;
    io(w.write_all(&16u32.to_le_bytes()))?;
    io(w.write_all(&1u16.to_le_bytes()))?;
    io(w.write_all(&channels.to_le_bytes()))?;
    io(w.write_all(&sample_rate.to_le_bytes()))?;
    io(w.write_all(&byte_rate.to_le_bytes()))?;
    io(w.write_all(&block_align.to_le_bytes()))?;
    io(w.write_all(&16u16.to_le_bytes()))?;
    io(w.write_all(b"data"))?;
    io(w.write_all(&data_size.to_le_bytes()))?;
    Ok(())
}

/// A decoded canonical PCM WAV: header fields plus interleaved samples.
pub struct WavFile {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub samples: Vec<i16>,
}

/// Parse a canonical WAV PCM file (`fmt ` then `data`, extra chunks
/// skipped). Non-PCM formats (`audio_format != 1`) are rejected as
/// `UnsupportedFeature::NonPcmWav`.
pub fn load_wav<R: ByteStream>(r: &mut R) -> Result<WavFile> {
    let riff_tag = read_tag(r)?;
    if &riff_tag != b"RIFF" {
        return Err(PlayerError::Parse("missing RIFF tag".into()));
    }
    let _riff_size = read_le_u32(r)?;
    let wave_tag = read_tag(r)?;
    if &wave_tag != b"WAVE" {
        return Err(PlayerError::Parse("missing WAVE tag".into()));
    }

    let mut sample_rate = 0u32;
    let mut channels = 0u16;
    let mut bits_per_sample = 0u16;
    let mut audio_format = 0u16;
    let mut samples: Option<Vec<i16>> = None;

    loop {
        let tag = match read_tag(r) {
            Ok(t) => t,
            Err(_) => break,
        };
        let size = read_le_u32(r)?;
        match &tag {
            b"fmt " => {
                audio_format = read_le_u16(r)?;
                channels = read_le_u16(r)?;
                sample_rate = read_le_u32(r)?;
                let _byte_rate = read_le_u32(r)?;
                let _block_align = read_le_u16(r)?;
                bits_per_sample = read_le_u16(r)?;
                let consumed = 16u32;
                if size > consumed {
                    r.seek(SeekFrom::Current((size - consumed) as i64))
                        .map_err(|e| PlayerError::Parse(e.to_string()))?;
                }
            }
            b"data" => {
                if audio_format != 1 {
                    return Err(PlayerError::Unsupported(
                        crate::error::UnsupportedFeature::NonPcmWav,
                    ));
                }
                let count = size as usize / 2;
                let mut buf = Vec::with_capacity(count);
                for _ in 0..count {
                    buf.push(read_le_i16(r).map_err(|_| truncated("WAV PCM data"))?);
                }
                samples = Some(buf);
                if size & 1 == 1 {
                    r.seek(SeekFrom::Current(1))
                        .map_err(|e| PlayerError::Parse(e.to_string()))?;
                }
            }
            _ => {
                let pad = size & 1;
                r.seek(SeekFrom::Current((size + pad) as i64))
                    .map_err(|e| PlayerError::Parse(e.to_string()))?;
            }
        }
    }

    let samples = samples.ok_or_else(|| PlayerError::Parse("missing data chunk".into()))?;
    if bits_per_sample != 16 {
        return Err(PlayerError::Unsupported(
            crate::error::UnsupportedFeature::NonPcmWav,
        ));
    }

    Ok(WavFile {
        sample_rate,
        channels,
        bits_per_sample,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::VirtualFileSystem;
    use std::io::Cursor;

    #[test]
    fn finalize_patches_sizes_correctly() {
        let mut fs = VirtualFileSystem::new();
        let handle = fs.create("out.wav");
        let mut sink = VirtualWavSink::new(handle.clone(), 44_100, 2).unwrap();
        sink.write_block(&[100, -100, 200, -200]).unwrap();
        sink.finalize().unwrap();

        let bytes = handle.lock().unwrap().as_slice().to_vec();
        let total = bytes.len();
        let riff_size = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let data_size = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(riff_size as usize, total - 8);
        assert_eq!(data_size as usize, total - 44);
        assert_eq!(data_size, 8);
    }

    #[test]
    fn roundtrip_written_wav_is_loadable() {
        let mut fs = VirtualFileSystem::new();
        let handle = fs.create("out.wav");
        let mut sink = VirtualWavSink::new(handle.clone(), 22_050, 1).unwrap();
        sink.write_block(&[1, 2, 3, 4, 5]).unwrap();
        sink.finalize().unwrap();

        let bytes = handle.lock().unwrap().as_slice().to_vec();
        let mut cursor = Cursor::new(bytes);
        let wav = load_wav(&mut cursor).unwrap();
        assert_eq!(wav.sample_rate, 22_050);
        assert_eq!(wav.channels, 1);
        assert_eq!(wav.bits_per_sample, 16);
        assert_eq!(wav.samples, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_non_pcm_format() {
        // audio_format = 3 (IEEE float) in the fmt chunk
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&36u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&44100u32.to_le_bytes());
        bytes.extend_from_slice(&(44100u32 * 4).to_le_bytes());
        bytes.extend_from_slice(&4u16.to_le_bytes());
        bytes.extend_from_slice(&32u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        let mut cursor = Cursor::new(bytes);
        assert!(load_wav(&mut cursor).is_err());
    }
}
