//! Binary readers shared by the SF2 parser, MIDI loader, and WAV loader.
//!
//! `ByteStream` is the read-only abstraction spec §6 calls for: the same
//! trait is implemented for on-disk files and for `VirtualFile`, so every
//! parser in this crate is source-agnostic.

use crate::error::{truncated, PlayerError, Result};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

pub trait ByteStream: Read + Seek {
    fn tell(&mut self) -> Result<u64> {
        self.stream_position()
            .map_err(|e| PlayerError::Parse(e.to_string()))
    }

    fn size(&mut self) -> Result<u64> {
        let cur = self.tell()?;
        let end = self
            .seek(SeekFrom::End(0))
            .map_err(|e| PlayerError::Parse(e.to_string()))?;
        self.seek(SeekFrom::Start(cur))
            .map_err(|e| PlayerError::Parse(e.to_string()))?;
        Ok(end)
    }
}

impl ByteStream for std::fs::File {}
impl<T: AsRef<[u8]>> ByteStream for std::io::Cursor<T> {}

/// Read a MIDI variable-length quantity: accumulate the low 7 bits of each
/// byte until one with the high bit clear. Fails with `Parse` on EOF
/// mid-sequence.
pub fn read_vlq<R: Read>(r: &mut R) -> Result<u32> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let byte = r.read_u8().map_err(|_| truncated("VLQ"))?;
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(truncated("VLQ (too long)"))
}

pub fn read_be_u16<R: Read>(r: &mut R) -> Result<u16> {
    r.read_u16::<BigEndian>().map_err(|_| truncated("u16 (BE)"))
}

pub fn read_be_u32<R: Read>(r: &mut R) -> Result<u32> {
    r.read_u32::<BigEndian>().map_err(|_| truncated("u32 (BE)"))
}

pub fn read_le_u16<R: Read>(r: &mut R) -> Result<u16> {
    r.read_u16::<LittleEndian>().map_err(|_| truncated("u16 (LE)"))
}

pub fn read_le_u32<R: Read>(r: &mut R) -> Result<u32> {
    r.read_u32::<LittleEndian>().map_err(|_| truncated("u32 (LE)"))
}

pub fn read_le_i16<R: Read>(r: &mut R) -> Result<i16> {
    r.read_i16::<LittleEndian>().map_err(|_| truncated("i16 (LE)"))
}

pub fn read_tag<R: Read>(r: &mut R) -> Result<[u8; 4]> {
    let mut tag = [0u8; 4];
    r.read_exact(&mut tag).map_err(|_| truncated("4-byte tag"))?;
    Ok(tag)
}

pub fn read_bytes<R: Read>(r: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(|_| truncated("byte block"))?;
    Ok(buf)
}

/// A RIFF chunk header: 4-byte tag + little-endian 32-bit size.
pub struct RiffChunk {
    pub tag: [u8; 4],
    pub size: u32,
}

impl RiffChunk {
    pub fn tag_str(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

/// Read one RIFF chunk header at the stream's current position.
pub fn read_riff_chunk_header<R: Read>(r: &mut R) -> Result<RiffChunk> {
    let tag = read_tag(r)?;
    let size = read_le_u32(r)?;
    Ok(RiffChunk { tag, size })
}

/// Skip past a chunk body of `size` bytes, honoring RIFF word alignment:
/// an odd-sized chunk is followed by one pad byte.
pub fn skip_riff_body<R: Read + Seek>(r: &mut R, size: u32) -> Result<()> {
    let pad = size & 1;
    r.seek(SeekFrom::Current((size + pad) as i64))
        .map_err(|e| PlayerError::Parse(e.to_string()))?;
    Ok(())
}

/// Validate an SMF `MThd` header and return (format, track_count, division).
pub fn read_smf_header<R: Read>(r: &mut R) -> Result<(u16, u16, u16)> {
    let tag = read_tag(r)?;
    if &tag != b"MThd" {
        return Err(PlayerError::Parse("missing MThd tag".into()));
    }
    let header_len = read_be_u32(r)?;
    if header_len != 6 {
        return Err(PlayerError::Parse(format!(
            "invalid MThd header length: {header_len}"
        )));
    }
    let format = read_be_u16(r)?;
    let track_count = read_be_u16(r)?;
    let division = read_be_u16(r)?;
    Ok((format, track_count, division))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn vlq_single_byte() {
        let mut c = Cursor::new(vec![0x40]);
        assert_eq!(read_vlq(&mut c).unwrap(), 0x40);
    }

    #[test]
    fn vlq_multi_byte() {
        // 0x81 0x00 => 0x80 per the MIDI spec example table
        let mut c = Cursor::new(vec![0x81, 0x00]);
        assert_eq!(read_vlq(&mut c).unwrap(), 0x80);
    }

    #[test]
    fn vlq_truncated_errors() {
        let mut c = Cursor::new(vec![0x81]);
        assert!(read_vlq(&mut c).is_err());
    }

    #[test]
    fn smf_header_rejects_bad_tag() {
        let mut c = Cursor::new(b"XXXX\x00\x00\x00\x06\x00\x01\x00\x01\x01\xe0".to_vec());
        assert!(read_smf_header(&mut c).is_err());
    }

    #[test]
    fn smf_header_parses() {
        let mut c = Cursor::new(b"MThd\x00\x00\x00\x06\x00\x01\x00\x02\x01\xe0".to_vec());
        let (fmt, tracks, div) = read_smf_header(&mut c).unwrap();
        assert_eq!(fmt, 1);
        assert_eq!(tracks, 2);
        assert_eq!(div, 0x01e0);
    }

    #[test]
    fn riff_chunk_header_and_pad_skip() {
        let mut c = Cursor::new(vec![b'f', b'o', b'o', b' ', 0x03, 0, 0, 0, 1, 2, 3, 0xAA]);
        let chunk = read_riff_chunk_header(&mut c).unwrap();
        assert_eq!(&chunk.tag, b"foo ");
        assert_eq!(chunk.size, 3);
        skip_riff_body(&mut c, chunk.size).unwrap();
        // padded odd-size chunk consumes the trailing 0xAA pad byte too
        assert_eq!(c.position(), 12);
    }
}
