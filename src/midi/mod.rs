//! Standard MIDI File parsing — spec §4.3.

pub mod event;
pub mod loader;

pub use event::{cc, meta, MidiEvent, PERCUSSION_CHANNEL};
pub use loader::{load_smf, read_event, MidiScore, TrackCursor};
