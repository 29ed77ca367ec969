//! Transport state machine — spec §4.10.
//!
//! ```text
//!     Empty  --load-->  Loaded  --play-->  Playing <--pause--> Paused
//!                         ^                   |                   |
//!                         +------- stop ------+------- stop ------+
//! ```

use crate::error::{PlayerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Empty,
    Loaded,
    Playing,
    Paused,
}

pub struct Transport {
    state: TransportState,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        Self {
            state: TransportState::Empty,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Called once a score/WAV has finished loading.
    pub fn loaded(&mut self) {
        self.state = TransportState::Loaded;
    }

    pub fn play(&mut self) -> Result<()> {
        match self.state {
            TransportState::Loaded | TransportState::Paused => {
                self.state = TransportState::Playing;
                Ok(())
            }
            TransportState::Playing => Ok(()), // already playing, no-op
            TransportState::Empty => Err(PlayerError::IllegalState(
                "play requires a loaded source".into(),
            )),
        }
    }

    pub fn pause(&mut self) -> Result<()> {
        match self.state {
            TransportState::Playing => {
                self.state = TransportState::Paused;
                Ok(())
            }
            TransportState::Paused => Ok(()),
            _ => Err(PlayerError::IllegalState(
                "pause requires an active playback session".into(),
            )),
        }
    }

    /// `stop` is idempotent from any state except `Empty`, per spec §5
    /// cancellation semantics; the caller (Player) is responsible for
    /// releasing voices, resetting channels, and rewinding the scheduler —
    /// this type only tracks the state transition itself.
    pub fn stop(&mut self) -> Result<()> {
        match self.state {
            TransportState::Empty => Err(PlayerError::IllegalState(
                "stop requires a loaded source".into(),
            )),
            _ => {
                self.state = TransportState::Loaded;
                Ok(())
            }
        }
    }

    pub fn seek_allowed(&self) -> bool {
        matches!(self.state, TransportState::Playing | TransportState::Paused)
    }
}

/// Per spec §4.10: `seek` branches on whether the loaded source is the
/// synthesized MIDI score or a decoded WAV buffer.
#[derive(Debug, Clone, Copy)]
pub enum SeekTarget {
    /// Rewind to the loop-start snapshot (or track-start) then fast-forward
    /// the scheduler silently to `seconds`, honoring channel-state updates.
    Midi { seconds: f64 },
    /// Set the PCM cursor directly: `floor(seconds * sample_rate) * channels`.
    Wav { frame_index: u64 },
}

pub fn wav_seek_frame(seconds: f64, sample_rate: u32) -> u64 {
    (seconds * sample_rate as f64).floor().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_state_machine_happy_path() {
        let mut t = Transport::new();
        assert_eq!(t.state(), TransportState::Empty);
        t.loaded();
        assert_eq!(t.state(), TransportState::Loaded);
        t.play().unwrap();
        assert_eq!(t.state(), TransportState::Playing);
        t.pause().unwrap();
        assert_eq!(t.state(), TransportState::Paused);
        t.play().unwrap();
        assert_eq!(t.state(), TransportState::Playing);
        t.stop().unwrap();
        assert_eq!(t.state(), TransportState::Loaded);
    }

    #[test]
    fn play_before_load_is_illegal() {
        let mut t = Transport::new();
        assert!(t.play().is_err());
    }

    #[test]
    fn stop_is_idempotent_once_loaded() {
        let mut t = Transport::new();
        t.loaded();
        t.play().unwrap();
        t.stop().unwrap();
        t.stop().unwrap();
        assert_eq!(t.state(), TransportState::Loaded);
    }

    #[test]
    fn seek_only_allowed_while_playing_or_paused() {
        let mut t = Transport::new();
        t.loaded();
        assert!(!t.seek_allowed());
        t.play().unwrap();
        assert!(t.seek_allowed());
        t.pause().unwrap();
        assert!(t.seek_allowed());
    }

    #[test]
    fn wav_seek_frame_floors_and_never_negative() {
        assert_eq!(wav_seek_frame(1.5, 44100), 66150);
        assert_eq!(wav_seek_frame(0.0, 44100), 0);
    }
}
