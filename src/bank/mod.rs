//! Instrument bank abstraction — spec §3 "PatchId", §4.2.

pub mod fm;
pub mod sf2;

use sf2::Sf2Bank;

/// A loaded instrument bank: either the fixed FM patch table or a parsed
/// SoundFont-2 bank. Selected at session start per design note §9 (no
/// per-frame dynamic dispatch between engines, only per-session).
pub enum Bank {
    Fm,
    Sf2(Sf2Bank),
}

impl Bank {
    pub fn is_sf2(&self) -> bool {
        matches!(self, Bank::Sf2(_))
    }
}
