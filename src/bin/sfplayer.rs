//! CLI front end: render a MIDI file to a WAV file, or play it live.
//!
//! Follows the `adakite1-dse` tool binaries' shape: one `clap`-derived
//! `Cli`, one subcommand per top-level operation.

use clap::{Parser, Subcommand, ValueEnum};
use midisynth_core::config::{PlayerConfig, SynthChoice};
use midisynth_core::error::Result;
use midisynth_core::Player;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sfplayer", about = "Render or play Standard MIDI Files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a MIDI file to a WAV file.
    Render {
        midi: PathBuf,
        #[arg(long)]
        bank: Option<PathBuf>,
        #[arg(long)]
        engine: Option<EngineArg>,
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2048)]
        block_size: usize,
        #[arg(long)]
        volume: Option<u32>,
    },
    /// Play a MIDI file through the default audio device.
    #[cfg(feature = "device")]
    Play {
        midi: PathBuf,
        #[arg(long)]
        bank: Option<PathBuf>,
        #[arg(long)]
        engine: Option<EngineArg>,
        #[arg(long)]
        volume: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Fm,
    Sample,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("sfplayer: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render { midi, bank, engine, out, block_size, volume } => {
            let mut player = build_player(engine, volume);
            load(&mut player, &midi, bank.as_deref())?;
            let out_name = "sfplayer://render.wav";
            player.render_to_virtual_wav(out_name, block_size)?;
            let handle = player
                .vfs
                .get(out_name)
                .expect("render_to_virtual_wav creates the named virtual file");
            let bytes = handle.lock().expect("virtual file mutex poisoned").as_slice().to_vec();
            fs::write(&out, bytes).map_err(|e| {
                midisynth_core::PlayerError::Device(format!("writing {}: {e}", out.display()))
            })?;
            log::info!("rendered {} -> {}", midi.display(), out.display());
            Ok(())
        }
        #[cfg(feature = "device")]
        Command::Play { midi, bank, engine, volume } => {
            use midisynth_core::mixer::{CpalSink, AudioSink};
            let mut player = build_player(engine, volume);
            load(&mut player, &midi, bank.as_deref())?;
            let sink = CpalSink::open(player.config().output_sample_rate, player.config().output_channels)?;
            player.play()?;
            let mut sink = sink;
            let block_size = player.config().block_size_frames;
            loop {
                let block = player.render_block(block_size)?;
                sink.push_block(&block)?;
                if player.state() != midisynth_core::transport::TransportState::Playing {
                    break;
                }
            }
            Ok(())
        }
    }
}

fn build_player(engine: Option<EngineArg>, volume: Option<u32>) -> Player {
    let mut config = PlayerConfig::default();
    if let Some(engine) = engine {
        config.fm_or_sample = match engine {
            EngineArg::Fm => SynthChoice::Fm,
            EngineArg::Sample => SynthChoice::Sample,
        };
    }
    if let Some(volume) = volume {
        config.global_volume_percent = volume;
    }
    Player::new(config)
}

fn load(player: &mut Player, midi: &PathBuf, bank: Option<&std::path::Path>) -> Result<()> {
    player.load_midi_file(midi, bank)
}
