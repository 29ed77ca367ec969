//! In-memory virtual filesystem.
//!
//! Grounded in `examples/original_source/gtk3/vfs.cpp`'s `VirtualFile` /
//! `init_virtual_filesystem` / `create_virtual_file` / `get_virtual_file`.
//! Design note §9 asks for this to be an owned object rather than a
//! process-global, so a `Player` (or a test) can hold its own
//! `VirtualFileSystem` without cross-talk.

pub mod wav_sink;

use crate::error::{PlayerError, Result};
use crate::readers::ByteStream;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex};

/// A growable in-memory byte buffer, addressed by a stable name in the
/// owning `VirtualFileSystem`'s name table.
#[derive(Debug, Default)]
pub struct VirtualFile {
    data: Vec<u8>,
    position: usize,
}

impl VirtualFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Overwrite `len` bytes starting at `offset`, growing the buffer if
    /// needed. Used by the WAV sink to patch header size fields after the
    /// fact without disturbing the write cursor.
    pub fn patch(&mut self, offset: usize, bytes: &[u8]) {
        let end = offset + bytes.len();
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[offset..end].copy_from_slice(bytes);
    }
}

impl Read for VirtualFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = self.data.len().saturating_sub(self.position);
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }
}

impl Write for VirtualFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let end = self.position + buf.len();
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(buf);
        self.position = end;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Seek for VirtualFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        let new_pos = match pos {
            SeekFrom::Start(p) => p as i64,
            SeekFrom::End(p) => self.data.len() as i64 + p,
            SeekFrom::Current(p) => self.position as i64 + p,
        };
        if new_pos < 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seek before start of virtual file",
            ));
        }
        self.position = new_pos as usize;
        Ok(self.position as u64)
    }
}

impl ByteStream for VirtualFile {}

/// Process-lifetime (or session-lifetime, when owned per-`Player`) name →
/// file map.
#[derive(Default)]
pub struct VirtualFileSystem {
    files: HashMap<String, Arc<Mutex<VirtualFile>>>,
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Arc<Mutex<VirtualFile>> {
        let handle = Arc::new(Mutex::new(VirtualFile::new()));
        self.files.insert(name.to_string(), handle.clone());
        handle
    }

    pub fn get(&self, name: &str) -> Option<Arc<Mutex<VirtualFile>>> {
        self.files.get(name).cloned()
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.files.remove(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }
}

/// Snapshot a virtual file's bytes into a `Cursor`, suitable for handing to
/// a parser that wants a fresh read cursor without holding the filesystem
/// lock for the duration of the parse.
pub fn snapshot(vf: &Arc<Mutex<VirtualFile>>) -> Result<Cursor<Vec<u8>>> {
    let guard = vf
        .lock()
        .map_err(|_| PlayerError::Parse("virtual file lock poisoned".into()))?;
    Ok(Cursor::new(guard.as_slice().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_seek_roundtrip() {
        let mut vf = VirtualFile::new();
        vf.write_all(b"hello world").unwrap();
        assert_eq!(vf.size(), 11);
        vf.seek(SeekFrom::Start(0)).unwrap();
        let mut buf = [0u8; 5];
        vf.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn patch_overwrites_without_moving_cursor() {
        let mut vf = VirtualFile::new();
        vf.write_all(&[0u8; 8]).unwrap();
        vf.patch(0, &[1, 2, 3, 4]);
        assert_eq!(&vf.as_slice()[0..4], &[1, 2, 3, 4]);
        assert_eq!(vf.position, 8);
    }

    #[test]
    fn filesystem_create_get_delete() {
        let mut fs = VirtualFileSystem::new();
        let handle = fs.create("a.wav");
        handle.lock().unwrap().write_all(b"abc").unwrap();
        assert_eq!(fs.get("a.wav").unwrap().lock().unwrap().size(), 3);
        assert!(fs.delete("a.wav"));
        assert!(fs.get("a.wav").is_none());
    }
}
