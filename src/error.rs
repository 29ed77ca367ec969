//! Error taxonomy for the synthesis core.
//!
//! Every boundary operation (load, render, transport command) returns one
//! of these. Local anomalies that spec §7 classifies as "never surface as
//! errors" (clamped pan, coerced program numbers, dropped percussion,
//! skipped unknown meta/SysEx) are handled silently at the call site and
//! never reach this type.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFeature {
    SmpteDivision,
    Sf2CompressedSamples,
    NonPcmWav,
}

impl std::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnsupportedFeature::SmpteDivision => "SMPTE division",
            UnsupportedFeature::Sf2CompressedSamples => "SF2 compressed samples",
            UnsupportedFeature::NonPcmWav => "non-PCM WAV",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("malformed or truncated input: {0}")]
    Parse(String),

    #[error("unsupported feature: {0}")]
    Unsupported(UnsupportedFeature),

    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("audio device error: {0}")]
    Device(String),

    #[error("illegal transport command for current state: {0}")]
    IllegalState(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;

/// Shorthand for a truncated-input parse error, used throughout the
/// binary readers.
pub fn truncated(what: &str) -> PlayerError {
    PlayerError::Parse(format!("truncated: {what}"))
}
