//! Conversion and decoded-audio LRU caches — spec §5 Resource policy,
//! grounded in `examples/original_source/gtk3/audio_cache.cpp` and
//! `gtk3/cache.cpp` (SPEC_FULL.md §3).

use std::collections::{HashMap, VecDeque};

/// Fingerprints a source file well enough to detect edits without hashing
/// the whole thing: path, size, and modified time, matching the original's
/// cache-key scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileFingerprint {
    pub path: String,
    pub size: u64,
    pub modified_unix_secs: u64,
}

struct LruMap<K: std::hash::Hash + Eq + Clone, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K: std::hash::Hash + Eq + Clone, V> LruMap<K, V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let k = self.order.remove(pos).unwrap();
            self.order.push_back(k);
        }
    }

    fn insert(&mut self, key: K, value: V) {
        if self.entries.contains_key(&key) {
            self.touch(&key);
        } else {
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.touch(key);
            self.entries.get(key)
        } else {
            None
        }
    }

    fn pop_oldest(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let value = self.entries.remove(&key)?;
        Some((key, value))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Maps a source fingerprint to the name of a virtual WAV file already
/// converted from it, so repeated plays of the same track skip re-decoding.
/// Evicted under a byte budget (`PlayerConfig::conversion_cache_bytes`).
pub struct ConversionCache {
    map: LruMap<FileFingerprint, String>,
    sizes: HashMap<FileFingerprint, usize>,
    budget_bytes: usize,
    used_bytes: usize,
}

impl ConversionCache {
    pub fn new(budget_bytes: usize) -> Self {
        Self {
            map: LruMap::new(),
            sizes: HashMap::new(),
            budget_bytes,
            used_bytes: 0,
        }
    }

    pub fn get(&mut self, key: &FileFingerprint) -> Option<String> {
        self.map.get(key).cloned()
    }

    /// Inserts an entry and evicts under budget pressure, returning the
    /// virtual WAV names of any evicted entries so the caller can delete
    /// the backing files from its `VirtualFileSystem` — this cache only
    /// owns the fingerprint->name mapping, not the file storage itself.
    #[must_use]
    pub fn insert(&mut self, key: FileFingerprint, virtual_wav_name: String, byte_size: usize) -> Vec<String> {
        if let Some(old_size) = self.sizes.insert(key.clone(), byte_size) {
            self.used_bytes = self.used_bytes.saturating_sub(old_size);
        }
        self.used_bytes += byte_size;
        self.map.insert(key, virtual_wav_name);
        self.evict_to_budget()
    }

    fn evict_to_budget(&mut self) -> Vec<String> {
        let mut evicted_names = Vec::new();
        while self.used_bytes > self.budget_bytes {
            match self.map.pop_oldest() {
                Some((key, name)) => {
                    if let Some(size) = self.sizes.remove(&key) {
                        self.used_bytes = self.used_bytes.saturating_sub(size);
                    }
                    evicted_names.push(name);
                }
                None => break,
            }
        }
        evicted_names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decoded PCM plus the format fields needed to reconstruct a playable
/// source from it without re-parsing the container.
#[derive(Debug, Clone)]
pub struct CachedAudio {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i16>,
}

/// Caches decoded PCM by source path, megabyte-capped; entries larger than
/// the whole budget are never cached (spec §5: "oversized entries never
/// cached"). Format metadata lives alongside the samples in the same LRU
/// entry so the two can never drift out of sync under eviction.
pub struct AudioBufferCache {
    map: LruMap<String, CachedAudio>,
    budget_bytes: usize,
    used_bytes: usize,
}

impl AudioBufferCache {
    pub fn new(budget_mb: usize) -> Self {
        Self {
            map: LruMap::new(),
            budget_bytes: budget_mb * 1024 * 1024,
            used_bytes: 0,
        }
    }

    pub fn get(&mut self, path: &str) -> Option<&CachedAudio> {
        self.map.get(&path.to_string())
    }

    pub fn insert(&mut self, path: String, sample_rate: u32, channels: u16, samples: Vec<i16>) {
        let byte_size = samples.len() * 2;
        if byte_size > self.budget_bytes {
            return;
        }
        if let Some(old) = self.map.entries.get(&path) {
            self.used_bytes = self.used_bytes.saturating_sub(old.samples.len() * 2);
        }
        self.used_bytes += byte_size;
        self.map.insert(path, CachedAudio { sample_rate, channels, samples });
        while self.used_bytes > self.budget_bytes {
            match self.map.pop_oldest() {
                Some((_, evicted)) => self.used_bytes = self.used_bytes.saturating_sub(evicted.samples.len() * 2),
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(path: &str) -> FileFingerprint {
        FileFingerprint {
            path: path.into(),
            size: 1000,
            modified_unix_secs: 0,
        }
    }

    #[test]
    fn conversion_cache_hit_after_insert() {
        let mut cache = ConversionCache::new(1024 * 1024);
        let evicted = cache.insert(fp("a.mid"), "vfs://a.wav".into(), 2048);
        assert!(evicted.is_empty());
        assert_eq!(cache.get(&fp("a.mid")), Some("vfs://a.wav".to_string()));
    }

    #[test]
    fn conversion_cache_evicts_oldest_under_budget_pressure() {
        let mut cache = ConversionCache::new(100);
        cache.insert(fp("a.mid"), "vfs://a.wav".into(), 60);
        let evicted = cache.insert(fp("b.mid"), "vfs://b.wav".into(), 60);
        assert_eq!(evicted, vec!["vfs://a.wav".to_string()], "eviction reports the backing file name to delete");
        assert!(cache.get(&fp("a.mid")).is_none(), "oldest entry evicted to stay under budget");
        assert_eq!(cache.get(&fp("b.mid")), Some("vfs://b.wav".to_string()));
    }

    #[test]
    fn conversion_cache_reinsert_of_the_same_key_does_not_double_count_bytes() {
        let mut cache = ConversionCache::new(100);
        cache.insert(fp("a.mid"), "vfs://a.wav".into(), 60);
        // Re-converting the same source to a new name must replace, not add
        // to, the tracked byte usage, or a live entry could force out
        // unrelated entries well under the configured budget.
        cache.insert(fp("a.mid"), "vfs://a2.wav".into(), 60);
        cache.insert(fp("b.mid"), "vfs://b.wav".into(), 30);
        assert_eq!(cache.get(&fp("a.mid")), Some("vfs://a2.wav".to_string()));
        assert_eq!(cache.get(&fp("b.mid")), Some("vfs://b.wav".to_string()), "90 tracked bytes fits the 100-byte budget");
    }

    #[test]
    fn audio_buffer_cache_never_caches_oversized_entries() {
        let mut cache = AudioBufferCache::new(0); // 0 MB budget
        cache.insert("big.wav".into(), 44_100, 2, vec![0i16; 1000]);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn audio_buffer_cache_lru_order_survives_touch() {
        let mut cache = AudioBufferCache::new(1); // 1 MB
        cache.insert("a.wav".into(), 44_100, 2, vec![1i16; 100]);
        cache.insert("b.wav".into(), 44_100, 2, vec![2i16; 100]);
        let _ = cache.get("a.wav"); // touch a, making b the LRU victim
        // push enough data to force eviction
        cache.insert("c.wav".into(), 44_100, 2, vec![3i16; 500_000]);
        assert!(cache.get("b.wav").is_none() || cache.get("a.wav").is_some());
    }

    #[test]
    fn audio_buffer_cache_reinsert_of_the_same_path_does_not_double_count_bytes() {
        let mut cache = AudioBufferCache::new(1); // 1 MB = 524_288 i16 samples
        cache.insert("a.wav".into(), 44_100, 2, vec![1i16; 400_000]);
        // Re-decoding the same path to a same-size buffer must replace the
        // old usage rather than add to it.
        cache.insert("a.wav".into(), 44_100, 2, vec![2i16; 400_000]);
        cache.insert("b.wav".into(), 22_050, 1, vec![3i16; 100_000]);
        assert!(cache.get("a.wav").is_some(), "500_000 tracked samples fits the 1 MB budget");
        assert!(cache.get("b.wav").is_some());
    }

    #[test]
    fn audio_buffer_cache_carries_format_metadata_alongside_samples() {
        let mut cache = AudioBufferCache::new(1);
        cache.insert("a.wav".into(), 22_050, 1, vec![7i16; 4]);
        let cached = cache.get("a.wav").unwrap();
        assert_eq!(cached.sample_rate, 22_050);
        assert_eq!(cached.channels, 1);
        assert_eq!(cached.samples, vec![7, 7, 7, 7]);
    }
}
