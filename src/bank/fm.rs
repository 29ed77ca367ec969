//! FM (OPL3-style) instrument bank — spec §3 "FmPatch", §4.2 "FM bank".
//!
//! Each patch describes a two-operator FM voice: modulator, carrier,
//! feedback/connection, and an optional percussion note override. Layout
//! mirrors `examples/original_source/linux2/midiplayer.h`'s `FMInstrument`
//! (`modChar1..carChar5`, `fbConn`, `percNote`), generalized to named
//! fields per spec's "two operator descriptors ... a feedback/connection
//! byte". The 181 patch values themselves are ported verbatim from
//! `examples/original_source/linux2/instruments.cpp`'s
//! `initFMInstruments` (128 melodic GM programs, then 53 GM percussion
//! notes).

/// One OPL operator: AM/VIB/SUS/KSR/MULT, key-scale+level, attack/decay,
/// sustain/release, and waveform-select bytes, as packed on real OPL3
/// hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorDesc {
    pub am_vib_sus_ksr_mult: u8,
    pub ksl_level: u8,
    pub attack_decay: u8,
    pub sustain_release: u8,
    pub waveform: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct FmPatch {
    pub modulator: OperatorDesc,
    pub carrier: OperatorDesc,
    pub feedback_connection: u8,
    /// For percussion patches (index 128..180), overrides the key the
    /// sample/operator pair is tuned for.
    pub percussion_note: Option<u8>,
}

pub const PATCH_COUNT: usize = 181;
pub const PERCUSSION_BASE_NOTE: u8 = 35;

/// Lookup a patch for a melodic program (0..127).
pub fn melodic_patch(program: u8) -> &'static FmPatch {
    &FM_PATCHES[(program as usize) % 128]
}

/// Lookup a patch for a percussion note on channel 9. Spec §4.2: notes
/// outside the mapped range are dropped rather than falling through to an
/// undefined entry (resolves spec §9 open question: clamp, don't fall
/// through).
pub fn percussion_patch(note: u8) -> Option<&'static FmPatch> {
    if note < PERCUSSION_BASE_NOTE {
        return None;
    }
    let index = 128 + (note - PERCUSSION_BASE_NOTE) as usize;
    FM_PATCHES.get(index)
}

/// The 181-entry GM FM bank, ported byte-for-byte from
/// `instruments.cpp::initFMInstruments` (indices 0..127 are the GM1..GM128
/// melodic programs; 128..180 are the GM percussion notes 35..87).
pub static FM_PATCHES: [FmPatch; PATCH_COUNT] = [
    // 0: GM1: Acoustic Grand Piano
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 143, attack_decay: 242, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 6, attack_decay: 242, sustain_release: 247, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 1: GM2: Bright Acoustic Grand
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 75, attack_decay: 242, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 242, sustain_release: 247, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 2: GM3: Electric Grand Piano
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 73, attack_decay: 242, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 242, sustain_release: 246, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 3: GM4: Honky-tonk Piano
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 129, ksl_level: 18, attack_decay: 242, sustain_release: 247, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 65, ksl_level: 0, attack_decay: 242, sustain_release: 247, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 4: GM5: Rhodes Piano
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 87, attack_decay: 241, sustain_release: 247, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 242, sustain_release: 247, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 5: GM6: Chorused Piano
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 147, attack_decay: 241, sustain_release: 247, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 242, sustain_release: 247, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 6: GM7: Harpsichord
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 128, attack_decay: 161, sustain_release: 242, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 22, ksl_level: 14, attack_decay: 242, sustain_release: 245, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 7: GM8: Clavinet
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 146, attack_decay: 194, sustain_release: 248, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 194, sustain_release: 248, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 8: GM9: Celesta
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 92, attack_decay: 246, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 129, ksl_level: 0, attack_decay: 243, sustain_release: 245, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 9: GM10: Glockenspiel
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 151, attack_decay: 243, sustain_release: 242, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 128, attack_decay: 242, sustain_release: 241, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 10: GM11: Music box
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 23, ksl_level: 33, attack_decay: 84, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 244, sustain_release: 244, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 11: GM12: Vibraphone
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 152, ksl_level: 98, attack_decay: 243, sustain_release: 246, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 129, ksl_level: 0, attack_decay: 242, sustain_release: 246, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 12: GM13: Marimba
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 24, ksl_level: 35, attack_decay: 246, sustain_release: 246, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 231, sustain_release: 247, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 13: GM14: Xylophone
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 21, ksl_level: 145, attack_decay: 246, sustain_release: 246, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 246, sustain_release: 246, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 14: GM15: Tubular Bells
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 69, ksl_level: 89, attack_decay: 211, sustain_release: 243, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 129, ksl_level: 128, attack_decay: 163, sustain_release: 243, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 15: GM16: Dulcimer
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 73, attack_decay: 117, sustain_release: 245, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 129, ksl_level: 128, attack_decay: 181, sustain_release: 245, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 16: GM17: Hammond Organ
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 113, ksl_level: 146, attack_decay: 246, sustain_release: 20, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 241, sustain_release: 7, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 17: GM18: Percussive Organ
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 114, ksl_level: 20, attack_decay: 199, sustain_release: 88, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 48, ksl_level: 0, attack_decay: 199, sustain_release: 8, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 18: GM19: Rock Organ
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 112, ksl_level: 68, attack_decay: 170, sustain_release: 24, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 177, ksl_level: 0, attack_decay: 138, sustain_release: 8, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 19: GM20: Church Organ
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 35, ksl_level: 147, attack_decay: 151, sustain_release: 35, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 177, ksl_level: 0, attack_decay: 85, sustain_release: 20, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 20: GM21: Reed Organ
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 19, attack_decay: 151, sustain_release: 4, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 177, ksl_level: 128, attack_decay: 85, sustain_release: 4, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 21: GM22: Accordion
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 36, ksl_level: 72, attack_decay: 152, sustain_release: 42, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 177, ksl_level: 0, attack_decay: 70, sustain_release: 26, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 22: GM23: Harmonica
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 19, attack_decay: 145, sustain_release: 6, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 97, sustain_release: 7, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 23: GM24: Tango Accordion
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 19, attack_decay: 113, sustain_release: 6, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 137, attack_decay: 97, sustain_release: 7, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 24: GM25: Acoustic Guitar1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 156, attack_decay: 243, sustain_release: 148, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 65, ksl_level: 128, attack_decay: 243, sustain_release: 200, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 25: GM26: Acoustic Guitar2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 84, attack_decay: 243, sustain_release: 154, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 241, sustain_release: 231, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 26: GM27: Electric Guitar1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 35, ksl_level: 95, attack_decay: 241, sustain_release: 58, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 242, sustain_release: 248, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 27: GM28: Electric Guitar2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 135, attack_decay: 246, sustain_release: 34, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 128, attack_decay: 243, sustain_release: 248, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 28: GM29: Electric Guitar3
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 71, attack_decay: 249, sustain_release: 84, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 246, sustain_release: 58, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 29: GM30: Overdrive Guitar
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 35, ksl_level: 74, attack_decay: 145, sustain_release: 65, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 5, attack_decay: 132, sustain_release: 25, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 30: GM31: Distortion Guitar
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 35, ksl_level: 74, attack_decay: 149, sustain_release: 25, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 148, sustain_release: 25, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 31: GM32: Guitar Harmonics
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 9, ksl_level: 161, attack_decay: 32, sustain_release: 79, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 132, ksl_level: 128, attack_decay: 209, sustain_release: 248, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 32: GM33: Acoustic Bass
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 30, attack_decay: 148, sustain_release: 6, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 162, ksl_level: 0, attack_decay: 195, sustain_release: 166, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 33: GM34: Electric Bass 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 18, attack_decay: 241, sustain_release: 40, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 241, sustain_release: 24, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 34: GM35: Electric Bass 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 141, attack_decay: 241, sustain_release: 232, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 241, sustain_release: 120, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 35: GM36: Fretless Bass
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 91, attack_decay: 81, sustain_release: 40, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 50, ksl_level: 0, attack_decay: 113, sustain_release: 72, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 36: GM37: Slap Bass 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 139, attack_decay: 161, sustain_release: 154, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 64, attack_decay: 242, sustain_release: 223, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 37: GM38: Slap Bass 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 139, attack_decay: 162, sustain_release: 22, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 8, attack_decay: 161, sustain_release: 223, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 38: GM39: Synth Bass 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 139, attack_decay: 244, sustain_release: 232, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 241, sustain_release: 120, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 39: GM40: Synth Bass 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 18, attack_decay: 241, sustain_release: 40, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 241, sustain_release: 24, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 40: GM41: Violin
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 21, attack_decay: 221, sustain_release: 19, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 86, sustain_release: 38, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 41: GM42: Viola
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 22, attack_decay: 221, sustain_release: 19, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 102, sustain_release: 6, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 42: GM43: Cello
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 113, ksl_level: 73, attack_decay: 209, sustain_release: 28, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 0, attack_decay: 97, sustain_release: 12, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 43: GM44: Contrabass
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 77, attack_decay: 113, sustain_release: 18, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 35, ksl_level: 128, attack_decay: 114, sustain_release: 6, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 44: GM45: Tremulo Strings
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 241, ksl_level: 64, attack_decay: 241, sustain_release: 33, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 0, attack_decay: 111, sustain_release: 22, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 45: GM46: Pizzicato String
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 26, attack_decay: 245, sustain_release: 117, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 128, attack_decay: 133, sustain_release: 53, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 46: GM47: Orchestral Harp
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 29, attack_decay: 245, sustain_release: 117, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 128, attack_decay: 243, sustain_release: 244, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 47: GM48: Timpany
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 65, attack_decay: 245, sustain_release: 5, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 242, sustain_release: 195, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 48: GM49: String Ensemble1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 155, attack_decay: 177, sustain_release: 37, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 162, ksl_level: 1, attack_decay: 114, sustain_release: 8, waveform: 0 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 49: GM50: String Ensemble2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 152, attack_decay: 127, sustain_release: 3, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 63, sustain_release: 7, waveform: 1 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 50: GM51: Synth Strings 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 147, attack_decay: 193, sustain_release: 18, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 79, sustain_release: 5, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 51: GM52: SynthStrings 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 24, attack_decay: 193, sustain_release: 34, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 79, sustain_release: 5, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 52: GM53: Choir Aahs
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 91, attack_decay: 244, sustain_release: 21, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 114, ksl_level: 131, attack_decay: 138, sustain_release: 5, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 53: GM54: Voice Oohs
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 144, attack_decay: 116, sustain_release: 57, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 113, sustain_release: 103, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 54: GM55: Synth Voice
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 113, ksl_level: 87, attack_decay: 84, sustain_release: 5, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 114, ksl_level: 0, attack_decay: 122, sustain_release: 5, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 55: GM56: Orchestra Hit
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 144, ksl_level: 0, attack_decay: 84, sustain_release: 99, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 65, ksl_level: 0, attack_decay: 165, sustain_release: 69, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 56: GM57: Trumpet
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 146, attack_decay: 133, sustain_release: 23, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 1, attack_decay: 143, sustain_release: 9, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 57: GM58: Trombone
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 148, attack_decay: 117, sustain_release: 23, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 5, attack_decay: 143, sustain_release: 9, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 58: GM59: Tuba
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 148, attack_decay: 118, sustain_release: 21, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 130, sustain_release: 55, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 59: GM60: Muted Trumpet
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 67, attack_decay: 158, sustain_release: 23, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 98, sustain_release: 44, waveform: 1 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 60: GM61: French Horn
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 155, attack_decay: 97, sustain_release: 106, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 127, sustain_release: 10, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 61: GM62: Brass Section
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 138, attack_decay: 117, sustain_release: 31, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 6, attack_decay: 116, sustain_release: 15, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 62: GM63: Synth Brass 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 134, attack_decay: 114, sustain_release: 85, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 131, attack_decay: 113, sustain_release: 24, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 63: GM64: Synth Brass 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 77, attack_decay: 84, sustain_release: 60, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 166, sustain_release: 28, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 64: GM65: Soprano Sax
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 143, attack_decay: 147, sustain_release: 2, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 114, sustain_release: 11, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 65: GM66: Alto Sax
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 142, attack_decay: 147, sustain_release: 3, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 114, sustain_release: 9, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 66: GM67: Tenor Sax
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 145, attack_decay: 147, sustain_release: 3, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 130, sustain_release: 9, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 67: GM68: Baritone Sax
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 142, attack_decay: 147, sustain_release: 15, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 114, sustain_release: 15, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 68: GM69: Oboe
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 75, attack_decay: 170, sustain_release: 22, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 143, sustain_release: 10, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 69: GM70: English Horn
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 144, attack_decay: 126, sustain_release: 23, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 139, sustain_release: 12, waveform: 1 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 70: GM71: Bassoon
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 129, attack_decay: 117, sustain_release: 25, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 50, ksl_level: 0, attack_decay: 97, sustain_release: 25, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 71: GM72: Clarinet
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 50, ksl_level: 144, attack_decay: 155, sustain_release: 33, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 114, sustain_release: 23, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 72: GM73: Piccolo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 31, attack_decay: 133, sustain_release: 95, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 0, attack_decay: 101, sustain_release: 26, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 73: GM74: Flute
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 70, attack_decay: 136, sustain_release: 95, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 0, attack_decay: 101, sustain_release: 26, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 74: GM75: Recorder
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 156, attack_decay: 117, sustain_release: 31, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 117, sustain_release: 10, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 75: GM76: Pan Flute
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 139, attack_decay: 132, sustain_release: 88, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 101, sustain_release: 26, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 76: GM77: Bottle Blow
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 225, ksl_level: 76, attack_decay: 102, sustain_release: 86, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 101, sustain_release: 38, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 77: GM78: Shakuhachi
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 98, ksl_level: 203, attack_decay: 118, sustain_release: 70, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 85, sustain_release: 54, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 78: GM79: Whistle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 98, ksl_level: 153, attack_decay: 87, sustain_release: 7, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 86, sustain_release: 7, waveform: 0 },
        feedback_connection: 59,
        percussion_note: None,
    },
    // 79: GM80: Ocarina
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 98, ksl_level: 147, attack_decay: 119, sustain_release: 7, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 118, sustain_release: 7, waveform: 0 },
        feedback_connection: 59,
        percussion_note: None,
    },
    // 80: GM81: Lead 1 squareea
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 89, attack_decay: 255, sustain_release: 3, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 255, sustain_release: 15, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 81: GM82: Lead 2 sawtooth
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 14, attack_decay: 255, sustain_release: 15, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 255, sustain_release: 15, waveform: 1 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 82: GM83: Lead 3 calliope
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 70, attack_decay: 134, sustain_release: 85, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 128, attack_decay: 100, sustain_release: 24, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 83: GM84: Lead 4 chiff
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 69, attack_decay: 102, sustain_release: 18, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 150, sustain_release: 10, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 84: GM85: Lead 5 charang
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 139, attack_decay: 146, sustain_release: 42, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 0, attack_decay: 145, sustain_release: 42, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 85: GM86: Lead 6 voice
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 162, ksl_level: 158, attack_decay: 223, sustain_release: 5, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 64, attack_decay: 111, sustain_release: 7, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 86: GM87: Lead 7 fifths
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 32, ksl_level: 26, attack_decay: 239, sustain_release: 1, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 96, ksl_level: 0, attack_decay: 143, sustain_release: 6, waveform: 2 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 87: GM88: Lead 8 brass
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 143, attack_decay: 241, sustain_release: 41, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 128, attack_decay: 244, sustain_release: 9, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 88: GM89: Pad 1 new age
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 119, ksl_level: 165, attack_decay: 83, sustain_release: 148, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 0, attack_decay: 160, sustain_release: 5, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 89: GM90: Pad 2 warm
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 31, attack_decay: 168, sustain_release: 17, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 177, ksl_level: 128, attack_decay: 37, sustain_release: 3, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 90: GM91: Pad 3 polysynth
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 23, attack_decay: 145, sustain_release: 52, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 85, sustain_release: 22, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 91: GM92: Pad 4 choir
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 113, ksl_level: 93, attack_decay: 84, sustain_release: 1, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 114, ksl_level: 0, attack_decay: 106, sustain_release: 3, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 92: GM93: Pad 5 bowedpad
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 151, attack_decay: 33, sustain_release: 67, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 162, ksl_level: 0, attack_decay: 66, sustain_release: 53, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 93: GM94: Pad 6 metallic
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 28, attack_decay: 161, sustain_release: 119, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 49, sustain_release: 71, waveform: 1 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 94: GM95: Pad 7 halo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 137, attack_decay: 17, sustain_release: 51, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 3, attack_decay: 66, sustain_release: 37, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 95: GM96: Pad 8 sweep
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 21, attack_decay: 17, sustain_release: 71, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 207, sustain_release: 7, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 96: GM97: FX 1 rain
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 58, ksl_level: 206, attack_decay: 248, sustain_release: 246, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 81, ksl_level: 0, attack_decay: 134, sustain_release: 2, waveform: 0 },
        feedback_connection: 50,
        percussion_note: None,
    },
    // 97: GM98: FX 2 soundtrack
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 21, attack_decay: 33, sustain_release: 35, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 65, sustain_release: 19, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 98: GM99: FX 3 crystal
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 91, attack_decay: 116, sustain_release: 149, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 165, sustain_release: 114, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 99: GM100: FX 4 atmosphere
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 146, attack_decay: 177, sustain_release: 129, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 131, attack_decay: 242, sustain_release: 38, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 100: GM101: FX 5 brightness
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 65, ksl_level: 77, attack_decay: 241, sustain_release: 81, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 66, ksl_level: 0, attack_decay: 242, sustain_release: 245, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 101: GM102: FX 6 goblins
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 148, attack_decay: 17, sustain_release: 81, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 163, ksl_level: 128, attack_decay: 17, sustain_release: 19, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 102: GM103: FX 7 echoes
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 140, attack_decay: 17, sustain_release: 49, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 161, ksl_level: 128, attack_decay: 29, sustain_release: 3, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 103: GM104: FX 8 sci-fi
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 164, ksl_level: 76, attack_decay: 243, sustain_release: 115, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 97, ksl_level: 0, attack_decay: 129, sustain_release: 35, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 104: GM105: Sitar
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 133, attack_decay: 210, sustain_release: 83, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 3, attack_decay: 242, sustain_release: 246, waveform: 1 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 105: GM106: Banjo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 12, attack_decay: 163, sustain_release: 17, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 19, ksl_level: 128, attack_decay: 162, sustain_release: 229, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 106: GM107: Shamisen
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 6, attack_decay: 246, sustain_release: 65, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 242, sustain_release: 230, waveform: 2 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 107: GM108: Koto
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 147, ksl_level: 145, attack_decay: 212, sustain_release: 50, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 145, ksl_level: 0, attack_decay: 235, sustain_release: 17, waveform: 1 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 108: GM109: Kalimba
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 4, ksl_level: 79, attack_decay: 250, sustain_release: 86, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 194, sustain_release: 5, waveform: 0 },
        feedback_connection: 60,
        percussion_note: None,
    },
    // 109: GM110: Bagpipe
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 73, attack_decay: 124, sustain_release: 32, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 34, ksl_level: 0, attack_decay: 111, sustain_release: 12, waveform: 1 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 110: GM111: Fiddle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 49, ksl_level: 133, attack_decay: 221, sustain_release: 51, waveform: 1 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 0, attack_decay: 86, sustain_release: 22, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 111: GM112: Shanai
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 32, ksl_level: 4, attack_decay: 218, sustain_release: 5, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 33, ksl_level: 129, attack_decay: 143, sustain_release: 11, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 112: GM113: Tinkle Bell
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 5, ksl_level: 106, attack_decay: 241, sustain_release: 229, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 128, attack_decay: 195, sustain_release: 229, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 113: GM114: Agogo Bells
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 21, attack_decay: 236, sustain_release: 38, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 248, sustain_release: 22, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 114: GM115: Steel Drums
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 5, ksl_level: 157, attack_decay: 103, sustain_release: 53, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 223, sustain_release: 5, waveform: 0 },
        feedback_connection: 56,
        percussion_note: None,
    },
    // 115: GM116: Woodblock
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 24, ksl_level: 150, attack_decay: 250, sustain_release: 40, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 0, attack_decay: 248, sustain_release: 229, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 116: GM117: Taiko Drum
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 134, attack_decay: 168, sustain_release: 7, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 3, attack_decay: 250, sustain_release: 3, waveform: 0 },
        feedback_connection: 54,
        percussion_note: None,
    },
    // 117: GM118: Melodic Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 65, attack_decay: 248, sustain_release: 71, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 3, attack_decay: 243, sustain_release: 3, waveform: 0 },
        feedback_connection: 52,
        percussion_note: None,
    },
    // 118: GM119: Synth Drum
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 142, attack_decay: 241, sustain_release: 6, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 0, attack_decay: 243, sustain_release: 2, waveform: 0 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 119: GM120: Reverse Cymbal
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 31, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 192, ksl_level: 0, attack_decay: 31, sustain_release: 255, waveform: 3 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 120: GM121: Guitar FretNoise
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 128, attack_decay: 248, sustain_release: 36, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 136, attack_decay: 86, sustain_release: 132, waveform: 2 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 121: GM122: Breath Noise
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 248, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 208, ksl_level: 5, attack_decay: 52, sustain_release: 4, waveform: 3 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 122: GM123: Seashore
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 246, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 192, ksl_level: 0, attack_decay: 31, sustain_release: 2, waveform: 3 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 123: GM124: Bird Tweet
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 213, ksl_level: 149, attack_decay: 55, sustain_release: 163, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 218, ksl_level: 64, attack_decay: 86, sustain_release: 55, waveform: 0 },
        feedback_connection: 48,
        percussion_note: None,
    },
    // 124: GM125: Telephone
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 53, ksl_level: 92, attack_decay: 178, sustain_release: 97, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 20, ksl_level: 8, attack_decay: 244, sustain_release: 21, waveform: 0 },
        feedback_connection: 58,
        percussion_note: None,
    },
    // 125: GM126: Helicopter
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 246, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 208, ksl_level: 0, attack_decay: 79, sustain_release: 245, waveform: 3 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 126: GM127: Applause/Noise
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 38, ksl_level: 0, attack_decay: 255, sustain_release: 1, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 228, ksl_level: 0, attack_decay: 18, sustain_release: 22, waveform: 1 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 127: GM128: Gunshot
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 243, sustain_release: 240, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 201, waveform: 2 },
        feedback_connection: 62,
        percussion_note: None,
    },
    // 128: GP35: Ac Bass Drum
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 68, attack_decay: 248, sustain_release: 119, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 243, sustain_release: 6, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(35),
    },
    // 129: GP36: Bass Drum 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 68, attack_decay: 248, sustain_release: 119, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 243, sustain_release: 6, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(35),
    },
    // 130: GP37: Side Stick
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 7, attack_decay: 249, sustain_release: 255, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 248, sustain_release: 255, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(52),
    },
    // 131: GP38: Acoustic Snare
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 252, sustain_release: 5, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 250, sustain_release: 23, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(48),
    },
    // 132: GP39: Hand Clap
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 2, attack_decay: 255, sustain_release: 7, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 255, sustain_release: 8, waveform: 0 },
        feedback_connection: 48,
        percussion_note: Some(58),
    },
    // 133: GP40: Electric Snare
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 252, sustain_release: 5, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 250, sustain_release: 23, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(60),
    },
    // 134: GP41: Low Floor Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(47),
    },
    // 135: GP42: Closed High Hat
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 0, attack_decay: 246, sustain_release: 8, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 0, attack_decay: 251, sustain_release: 71, waveform: 2 },
        feedback_connection: 58,
        percussion_note: Some(43),
    },
    // 136: GP43: High Floor Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(49),
    },
    // 137: GP44: Pedal High Hat
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 0, attack_decay: 246, sustain_release: 8, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 5, attack_decay: 123, sustain_release: 71, waveform: 2 },
        feedback_connection: 58,
        percussion_note: Some(43),
    },
    // 138: GP45: Low Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(51),
    },
    // 139: GP46: Open High Hat
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 0, attack_decay: 246, sustain_release: 2, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 0, attack_decay: 203, sustain_release: 67, waveform: 2 },
        feedback_connection: 58,
        percussion_note: Some(43),
    },
    // 140: GP47: Low-Mid Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(54),
    },
    // 141: GP48: High-Mid Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(57),
    },
    // 142: GP49: Crash Cymbal 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 246, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 208, ksl_level: 0, attack_decay: 159, sustain_release: 2, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(72),
    },
    // 143: GP50: High Tom
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(60),
    },
    // 144: GP51: Ride Cymbal 1
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 8, attack_decay: 248, sustain_release: 66, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 74, attack_decay: 244, sustain_release: 228, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(76),
    },
    // 145: GP52: Chinese Cymbal
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 245, sustain_release: 48, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 208, ksl_level: 10, attack_decay: 159, sustain_release: 2, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(84),
    },
    // 146: GP53: Ride Bell
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 10, attack_decay: 228, sustain_release: 228, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 93, attack_decay: 245, sustain_release: 229, waveform: 1 },
        feedback_connection: 54,
        percussion_note: Some(36),
    },
    // 147: GP54: Tambourine
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 3, attack_decay: 180, sustain_release: 4, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 5, ksl_level: 10, attack_decay: 151, sustain_release: 247, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(65),
    },
    // 148: GP55: Splash Cymbal
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 78, ksl_level: 0, attack_decay: 246, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 158, ksl_level: 0, attack_decay: 159, sustain_release: 2, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(84),
    },
    // 149: GP56: Cow Bell
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 69, attack_decay: 248, sustain_release: 55, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 8, attack_decay: 243, sustain_release: 5, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(83),
    },
    // 150: GP57: Crash Cymbal 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 0, attack_decay: 246, sustain_release: 0, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 208, ksl_level: 0, attack_decay: 159, sustain_release: 2, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(84),
    },
    // 151: GP58: Vibraslap
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 128, ksl_level: 0, attack_decay: 255, sustain_release: 3, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 16, ksl_level: 13, attack_decay: 255, sustain_release: 20, waveform: 0 },
        feedback_connection: 60,
        percussion_note: Some(24),
    },
    // 152: GP59: Ride Cymbal 2
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 8, attack_decay: 248, sustain_release: 66, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 74, attack_decay: 244, sustain_release: 228, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(77),
    },
    // 153: GP60: High Bongo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 11, attack_decay: 245, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 245, sustain_release: 8, waveform: 0 },
        feedback_connection: 54,
        percussion_note: Some(60),
    },
    // 154: GP61: Low Bongo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 250, sustain_release: 191, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 200, sustain_release: 151, waveform: 0 },
        feedback_connection: 55,
        percussion_note: Some(65),
    },
    // 155: GP62: Mute High Conga
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 81, attack_decay: 250, sustain_release: 135, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 250, sustain_release: 183, waveform: 0 },
        feedback_connection: 54,
        percussion_note: Some(59),
    },
    // 156: GP63: Open High Conga
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 84, attack_decay: 250, sustain_release: 141, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 248, sustain_release: 184, waveform: 0 },
        feedback_connection: 54,
        percussion_note: Some(51),
    },
    // 157: GP64: Low Conga
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 89, attack_decay: 250, sustain_release: 136, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 248, sustain_release: 182, waveform: 0 },
        feedback_connection: 54,
        percussion_note: Some(45),
    },
    // 158: GP65: High Timbale
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 0, attack_decay: 249, sustain_release: 10, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 250, sustain_release: 6, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(71),
    },
    // 159: GP66: Low Timbale
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 128, attack_decay: 249, sustain_release: 137, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 108, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(60),
    },
    // 160: GP67: High Agogo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 128, attack_decay: 248, sustain_release: 136, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 8, attack_decay: 246, sustain_release: 182, waveform: 0 },
        feedback_connection: 63,
        percussion_note: Some(58),
    },
    // 161: GP68: Low Agogo
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 133, attack_decay: 248, sustain_release: 136, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 12, ksl_level: 0, attack_decay: 246, sustain_release: 182, waveform: 0 },
        feedback_connection: 63,
        percussion_note: Some(53),
    },
    // 162: GP69: Cabasa
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 64, attack_decay: 118, sustain_release: 79, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 8, attack_decay: 119, sustain_release: 24, waveform: 2 },
        feedback_connection: 62,
        percussion_note: Some(64),
    },
    // 163: GP70: Maracas
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 64, attack_decay: 200, sustain_release: 73, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 3, ksl_level: 0, attack_decay: 155, sustain_release: 105, waveform: 2 },
        feedback_connection: 62,
        percussion_note: Some(71),
    },
    // 164: GP71: Short Whistle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 215, ksl_level: 220, attack_decay: 173, sustain_release: 5, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 199, ksl_level: 0, attack_decay: 141, sustain_release: 5, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(61),
    },
    // 165: GP72: Long Whistle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 215, ksl_level: 220, attack_decay: 168, sustain_release: 4, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 199, ksl_level: 0, attack_decay: 136, sustain_release: 4, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(61),
    },
    // 166: GP73: Short Guiro
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 128, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 0, attack_decay: 103, sustain_release: 23, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(44),
    },
    // 167: GP74: Long Guiro
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 128, ksl_level: 0, attack_decay: 245, sustain_release: 5, waveform: 2 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 17, ksl_level: 9, attack_decay: 70, sustain_release: 22, waveform: 3 },
        feedback_connection: 62,
        percussion_note: Some(40),
    },
    // 168: GP75: Claves
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 63, attack_decay: 0, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 21, ksl_level: 0, attack_decay: 247, sustain_release: 245, waveform: 0 },
        feedback_connection: 49,
        percussion_note: Some(69),
    },
    // 169: GP76: High Wood Block
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 63, attack_decay: 0, sustain_release: 244, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 0, attack_decay: 247, sustain_release: 245, waveform: 0 },
        feedback_connection: 48,
        percussion_note: Some(68),
    },
    // 170: GP77: Low Wood Block
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 6, ksl_level: 63, attack_decay: 0, sustain_release: 244, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 18, ksl_level: 0, attack_decay: 247, sustain_release: 245, waveform: 0 },
        feedback_connection: 49,
        percussion_note: Some(63),
    },
    // 171: GP78: Mute Cuica
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 88, attack_decay: 103, sustain_release: 231, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 117, sustain_release: 7, waveform: 0 },
        feedback_connection: 48,
        percussion_note: Some(74),
    },
    // 172: GP79: Open Cuica
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 65, ksl_level: 69, attack_decay: 248, sustain_release: 72, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 66, ksl_level: 8, attack_decay: 117, sustain_release: 5, waveform: 0 },
        feedback_connection: 48,
        percussion_note: Some(60),
    },
    // 173: GP80: Mute Triangle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 10, ksl_level: 64, attack_decay: 224, sustain_release: 240, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 30, ksl_level: 78, attack_decay: 255, sustain_release: 5, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(80),
    },
    // 174: GP81: Open Triangle
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 10, ksl_level: 124, attack_decay: 224, sustain_release: 240, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 30, ksl_level: 82, attack_decay: 255, sustain_release: 2, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(64),
    },
    // 175: GP82
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 64, attack_decay: 122, sustain_release: 74, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 8, attack_decay: 123, sustain_release: 27, waveform: 2 },
        feedback_connection: 62,
        percussion_note: Some(72),
    },
    // 176: GP83
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 14, ksl_level: 10, attack_decay: 228, sustain_release: 228, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 7, ksl_level: 64, attack_decay: 85, sustain_release: 57, waveform: 1 },
        feedback_connection: 54,
        percussion_note: Some(73),
    },
    // 177: GP84
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 5, ksl_level: 5, attack_decay: 249, sustain_release: 50, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 4, ksl_level: 64, attack_decay: 214, sustain_release: 165, waveform: 0 },
        feedback_connection: 62,
        percussion_note: Some(70),
    },
    // 178: GP85
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 63, attack_decay: 0, sustain_release: 243, waveform: 3 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 21, ksl_level: 0, attack_decay: 247, sustain_release: 245, waveform: 0 },
        feedback_connection: 56,
        percussion_note: Some(68),
    },
    // 179: GP86
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 1, ksl_level: 79, attack_decay: 250, sustain_release: 141, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 2, ksl_level: 0, attack_decay: 248, sustain_release: 181, waveform: 0 },
        feedback_connection: 55,
        percussion_note: Some(48),
    },
    // 180: GP87
    FmPatch {
        modulator: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 12, waveform: 0 },
        carrier: OperatorDesc { am_vib_sus_ksr_mult: 0, ksl_level: 0, attack_decay: 246, sustain_release: 6, waveform: 0 },
        feedback_connection: 52,
        percussion_note: Some(53),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_181_entries() {
        assert_eq!(FM_PATCHES.len(), PATCH_COUNT);
    }

    #[test]
    fn acoustic_grand_piano_matches_the_original_byte_values() {
        let p = melodic_patch(0);
        assert_eq!(p.modulator.am_vib_sus_ksr_mult, 1);
        assert_eq!(p.modulator.ksl_level, 143);
        assert_eq!(p.modulator.attack_decay, 242);
        assert_eq!(p.modulator.sustain_release, 244);
        assert_eq!(p.carrier.am_vib_sus_ksr_mult, 1);
        assert_eq!(p.carrier.ksl_level, 6);
        assert_eq!(p.feedback_connection, 56);
        assert!(p.percussion_note.is_none());
    }

    #[test]
    fn melodic_lookup_wraps_programs_above_127() {
        // spec §7: program numbers outside 0..127 coerced via modulo.
        let a = melodic_patch(3);
        let b = melodic_patch(3 + 128);
        assert_eq!(a.modulator.am_vib_sus_ksr_mult, b.modulator.am_vib_sus_ksr_mult);
    }

    #[test]
    fn percussion_out_of_range_is_dropped() {
        assert!(percussion_patch(10).is_none());
        assert!(percussion_patch(200).is_none());
    }

    #[test]
    fn percussion_in_range_resolves() {
        assert!(percussion_patch(35).is_some());
        assert!(percussion_patch(35 + 52).is_some());
        assert_eq!(percussion_patch(35).unwrap().percussion_note, Some(35));
    }
}
