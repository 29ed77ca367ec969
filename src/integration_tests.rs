//! End-to-end pipeline tests exercising the full MIDI-in, PCM-out path
//! through `Player`, mirroring the teacher's `tracker/spu/pipeline_test.rs`
//! convention of a dedicated sibling test file for cross-module scenarios
//! that don't belong to any single unit.

#[cfg(test)]
mod tests {
    use crate::config::{LoopPolicy, PlayerConfig, SynthChoice};
    use crate::player::Player;
    use crate::transport::TransportState;
    use crate::vfs::wav_sink::load_wav;
    use std::io::Cursor;

    fn track_chunk(events: &[u8]) -> Vec<u8> {
        let mut track = Vec::new();
        track.extend_from_slice(b"MTrk");
        track.extend_from_slice(&(events.len() as u32).to_be_bytes());
        track.extend_from_slice(events);
        track
    }

    fn single_track_smf(ticks_per_quarter: u16, events: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"MThd");
        out.extend_from_slice(&6u32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&ticks_per_quarter.to_be_bytes());
        out.extend_from_slice(&track_chunk(events));
        out
    }

    #[test]
    fn single_note_render_produces_nonzero_audio_then_silence() {
        let events = [
            0x00, 0x90, 60, 100, // note on
            0x60, 0x80, 60, 0, // note off after 96 ticks
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut player = Player::new(PlayerConfig::default());
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();

        let during = player.render_block(2048).unwrap();
        assert!(during.iter().any(|&s| s != 0), "a held note should produce audible samples");

        // Drain well past the note-off and end-of-track; playback should
        // transition back to Loaded and subsequent blocks are silent.
        for _ in 0..20 {
            let _ = player.render_block(2048).unwrap();
            if player.state() != TransportState::Playing {
                break;
            }
        }
        assert_eq!(player.state(), TransportState::Loaded);
    }

    #[test]
    fn polyphony_beyond_pool_size_steals_the_oldest_free_or_inactive_voice() {
        // 4 simultaneous notes on a 2-voice pool: the third and fourth
        // note-ons must steal rather than silently drop.
        let mut events = Vec::new();
        for note in [60u8, 64, 67, 72] {
            events.extend_from_slice(&[0x00, 0x90, note, 100]);
        }
        events.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

        let mut config = PlayerConfig::default();
        config.voice_pool_size = 2;
        config.fm_or_sample = SynthChoice::Fm;
        let mut player = Player::new(config);
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();

        let block = player.render_block(512).unwrap();
        assert!(block.iter().any(|&s| s != 0), "stolen voices should still render audio");
    }

    #[test]
    fn tempo_change_mid_song_speeds_up_playwait_accumulation() {
        // Default tempo (500000us/qn) then an explicit fast tempo
        // (250000us/qn, i.e. double speed) partway through.
        let events = [
            0x00, 0x90, 60, 100, // note on at t=0
            0x60, 0xFF, 0x51, 0x03, 0x03, 0xD0, 0x90, // tempo -> 250000us/qn after 96 ticks
            0x60, 0x80, 60, 0, // note off 96 ticks later (now at half the duration)
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut player = Player::new(PlayerConfig::default());
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();

        // First 96 ticks at the default tempo take 0.5s; render blocks
        // until just past that boundary and confirm playwait has advanced
        // by roughly that much, not more (no tempo change has applied yet).
        let mut rendered_seconds = 0.0;
        let sample_rate = player.config().output_sample_rate as f64;
        while rendered_seconds < 0.4 {
            let _ = player.render_block(2048).unwrap();
            rendered_seconds += 2048.0 / sample_rate;
        }
        // Sanity: playback is still active and has not errored out.
        assert_eq!(player.state(), TransportState::Playing);
    }

    #[test]
    fn loop_marker_text_events_restore_the_scheduler_cursor() {
        let events = [
            0x00, 0xFF, 0x01, 0x09, b'l', b'o', b'o', b'p', b'S', b't', b'a', b'r', b't',
            0x00, 0x90, 60, 100,
            0x60, 0x80, 60, 0,
            0x00, 0xFF, 0x01, 0x07, b'l', b'o', b'o', b'p', b'E', b'n', b'd',
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut config = PlayerConfig::default();
        config.loop_policy = LoopPolicy::Marker;
        let mut player = Player::new(config);
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();

        // With a loopEnd marker restoring to loopStart, the track never
        // reaches its own end; render several blocks and confirm playback
        // is still active (it would transition to Loaded on natural end).
        for _ in 0..10 {
            let _ = player.render_block(512).unwrap();
        }
        assert_eq!(player.state(), TransportState::Playing);
    }

    #[test]
    fn loop_policy_once_ignores_loop_markers() {
        let events = [
            0x00, 0xFF, 0x01, 0x09, b'l', b'o', b'o', b'p', b'S', b't', b'a', b'r', b't',
            0x00, 0x90, 60, 100,
            0x60, 0x80, 60, 0,
            0x00, 0xFF, 0x01, 0x07, b'l', b'o', b'o', b'p', b'E', b'n', b'd',
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut config = PlayerConfig::default();
        config.loop_policy = LoopPolicy::Once;
        let mut player = Player::new(config);
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();

        for _ in 0..20 {
            let _ = player.render_block(512).unwrap();
            if player.state() != TransportState::Playing {
                break;
            }
        }
        assert_eq!(player.state(), TransportState::Loaded, "Once policy plays through end-of-track without looping");
    }

    #[test]
    fn virtual_wav_round_trip_is_loadable_pcm() {
        let events = [
            0x00, 0x90, 60, 100,
            0x60, 0x80, 60, 0,
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut player = Player::new(PlayerConfig::default());
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.render_to_virtual_wav("round_trip.wav", 1024).unwrap();

        let handle = player.vfs.get("round_trip.wav").unwrap();
        let bytes = handle.lock().unwrap().as_slice().to_vec();
        let mut cursor = Cursor::new(bytes);
        let wav = load_wav(&mut cursor).unwrap();
        assert_eq!(wav.sample_rate, 44_100);
        assert_eq!(wav.channels, 2);
        assert!(!wav.samples.is_empty());
    }

    #[test]
    fn pause_then_resume_leaves_position_unchanged_across_silent_blocks() {
        let events = [
            0x00, 0x90, 60, 100,
            0x78, 0x80, 60, 0,
            0x00, 0xFF, 0x2F, 0x00,
        ];
        let mut player = Player::new(PlayerConfig::default());
        player.load_midi(single_track_smf(96, &events), None).unwrap();
        player.play().unwrap();
        let _ = player.render_block(256).unwrap();
        let position_before_pause = player.position_seconds();

        player.pause().unwrap();
        let silent = player.render_block(4096).unwrap();
        assert!(silent.iter().all(|&s| s == 0));
        assert_eq!(player.position_seconds(), position_before_pause, "paused render must not advance the scheduler");

        player.play().unwrap();
        let resumed = player.render_block(256).unwrap();
        assert!(resumed.iter().any(|&s| s != 0), "resuming should continue rendering the still-held note");
    }
}
