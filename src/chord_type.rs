//! Interval Catalog
//!
//! Chord types are plain data: a name, a family and a list of intervals above
//! the root. Adding a chord type means adding an entry to [`CHORD_TYPES`].

use std::fmt::Display;

/// Number of registered chord types.
pub const NUM_CHORD_TYPES: usize = 69;

/// A directed offset above a chord root.
///
/// Offsets never wrap: a ninth is stored as 14 semitones and 8 scale steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Distance in semitones.
    pub semitones: u8,
    /// Zero-based distance in diatonic steps.
    pub scale_steps: u8,
}

impl Interval {
    /// `degree` is the one-based interval number (third = 3, ninth = 9).
    pub const fn new(semitones: u8, degree: u8) -> Self {
        Interval {
            semitones,
            scale_steps: degree - 1,
        }
    }
}

const MAJ2: Interval = Interval::new(2, 2);
const MIN3: Interval = Interval::new(3, 3);
const MAJ3: Interval = Interval::new(4, 3);
const P4: Interval = Interval::new(5, 4);
const DIM5: Interval = Interval::new(6, 5);
const P5: Interval = Interval::new(7, 5);
const AUG5: Interval = Interval::new(8, 5);
const MAJ6: Interval = Interval::new(9, 6);
const MIN7: Interval = Interval::new(10, 7);
const MAJ7: Interval = Interval::new(11, 7);
const MIN9: Interval = Interval::new(13, 9);
const MAJ9: Interval = Interval::new(14, 9);
const P11: Interval = Interval::new(17, 11);
const AUG11: Interval = Interval::new(18, 11);
const MIN13: Interval = Interval::new(20, 13);
const MAJ13: Interval = Interval::new(21, 13);

/// Chord family, which decides which drop voicings apply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChordFamily {
    /// Built on a three-note triad (plain triads, sixths and added-tone chords).
    Triad,
    /// Built on a four-note seventh chord, including its extensions.
    Tetrad,
}

impl Display for ChordFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A named interval formula.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChordType {
    /// Label appended to the root name, e.g. `"Maj7(9)"`.
    pub name: &'static str,
    /// Intervals above the root, root excluded.
    pub intervals: &'static [Interval],
    /// Family classification.
    pub family: ChordFamily,
}

impl ChordType {
    /// Declare a chord type.
    pub const fn new(name: &'static str, intervals: &'static [Interval], family: ChordFamily) -> Self {
        ChordType {
            name,
            intervals,
            family,
        }
    }

    /// Modulus for inversion and drop arithmetic: 3 for three-note chords, 4 otherwise.
    pub const fn inversion_cycle(&self) -> usize {
        if self.intervals.len() == 2 {
            3
        } else {
            4
        }
    }

    /// Number of notes in root position, root included.
    pub const fn note_count(&self) -> usize {
        self.intervals.len() + 1
    }

    /// Whether `drop` may be applied to this chord type.
    ///
    /// Three-note triads take drop 2 only, tetrads take drops 1 through 4 and
    /// everything else takes none.
    pub fn is_drop_compatible(&self, drop: usize) -> bool {
        match (self.family, self.inversion_cycle()) {
            (ChordFamily::Triad, 3) => drop == 2,
            (ChordFamily::Tetrad, _) => (1..=4).contains(&drop),
            _ => false,
        }
    }

    /// Every registered chord type.
    pub fn all() -> &'static [ChordType] {
        &CHORD_TYPES
    }
}

impl Display for ChordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

use ChordFamily::{Tetrad, Triad};

/// The chord type registry.
#[rustfmt::skip]
pub static CHORD_TYPES: [ChordType; NUM_CHORD_TYPES] = [
    // triads
    ChordType::new("Maj",   &[MAJ3, P5],   Triad),
    ChordType::new("Min",   &[MIN3, P5],   Triad),
    ChordType::new("Dim",   &[MIN3, DIM5], Triad),
    ChordType::new("Aug",   &[MAJ3, AUG5], Triad),
    ChordType::new("sus2",  &[MAJ2, P5],   Triad),
    ChordType::new("sus4",  &[P4, P5],     Triad),
    ChordType::new("Majb5", &[MAJ3, DIM5], Triad),

    // sixths and added tones
    ChordType::new("add9",       &[MAJ3, P5, MAJ9],       Triad),
    ChordType::new("Min(add9)",  &[MIN3, P5, MAJ9],       Triad),
    ChordType::new("add11",      &[MAJ3, P5, P11],        Triad),
    ChordType::new("Min(add11)", &[MIN3, P5, P11],        Triad),
    ChordType::new("add#11",     &[MAJ3, P5, AUG11],      Triad),
    ChordType::new("6",          &[MAJ3, P5, MAJ6],       Triad),
    ChordType::new("Min6",       &[MIN3, P5, MAJ6],       Triad),
    ChordType::new("6(9)",       &[MAJ3, P5, MAJ6, MAJ9], Triad),
    ChordType::new("Min6(9)",    &[MIN3, P5, MAJ6, MAJ9], Triad),
    ChordType::new("sus4(add9)", &[P4, P5, MAJ9],         Triad),

    // sevenths
    ChordType::new("Maj7",      &[MAJ3, P5, MAJ7],   Tetrad),
    ChordType::new("Min7",      &[MIN3, P5, MIN7],   Tetrad),
    ChordType::new("-7b5",      &[MIN3, DIM5, MIN7], Tetrad),
    ChordType::new("7",         &[MAJ3, P5, MIN7],   Tetrad),
    ChordType::new("Min(Maj7)", &[MIN3, P5, MAJ7],   Tetrad),
    ChordType::new("Maj7#5",    &[MAJ3, AUG5, MAJ7], Tetrad),
    ChordType::new("Maj7b5",    &[MAJ3, DIM5, MAJ7], Tetrad),
    ChordType::new("7#5",       &[MAJ3, AUG5, MIN7], Tetrad),
    ChordType::new("7b5",       &[MAJ3, DIM5, MIN7], Tetrad),
    ChordType::new("Min7#5",    &[MIN3, AUG5, MIN7], Tetrad),
    ChordType::new("7sus4",     &[P4, P5, MIN7],     Tetrad),
    ChordType::new("7sus2",     &[MAJ2, P5, MIN7],   Tetrad),
    ChordType::new("Maj7sus4",  &[P4, P5, MAJ7],     Tetrad),
    ChordType::new("Maj7sus2",  &[MAJ2, P5, MAJ7],   Tetrad),

    // major seventh extensions
    ChordType::new("Maj7(9)",        &[MAJ3, P5, MAJ7, MAJ9],                Tetrad),
    ChordType::new("Maj7(#11)",      &[MAJ3, P5, MAJ7, AUG11],               Tetrad),
    ChordType::new("Maj7(13)",       &[MAJ3, P5, MAJ7, MAJ13],               Tetrad),
    ChordType::new("Maj7(9,#11)",    &[MAJ3, P5, MAJ7, MAJ9, AUG11],         Tetrad),
    ChordType::new("Maj7(9,13)",     &[MAJ3, P5, MAJ7, MAJ9, MAJ13],         Tetrad),
    ChordType::new("Maj7(9,#11,13)", &[MAJ3, P5, MAJ7, MAJ9, AUG11, MAJ13],  Tetrad),

    // minor seventh extensions
    ChordType::new("Min7(9)",         &[MIN3, P5, MIN7, MAJ9],            Tetrad),
    ChordType::new("Min7(11)",        &[MIN3, P5, MIN7, P11],             Tetrad),
    ChordType::new("Min7(13)",        &[MIN3, P5, MIN7, MAJ13],           Tetrad),
    ChordType::new("Min7(9,11)",      &[MIN3, P5, MIN7, MAJ9, P11],       Tetrad),
    ChordType::new("Min7(9,13)",      &[MIN3, P5, MIN7, MAJ9, MAJ13],     Tetrad),
    ChordType::new("Min7(9,11,13)",   &[MIN3, P5, MIN7, MAJ9, P11, MAJ13], Tetrad),
    ChordType::new("Min(Maj7)(9)",    &[MIN3, P5, MAJ7, MAJ9],            Tetrad),
    ChordType::new("Min(Maj7)(9,11)", &[MIN3, P5, MAJ7, MAJ9, P11],       Tetrad),
    ChordType::new("-7b5(9)",         &[MIN3, DIM5, MIN7, MAJ9],          Tetrad),
    ChordType::new("-7b5(11)",        &[MIN3, DIM5, MIN7, P11],           Tetrad),
    ChordType::new("-7b5(9,11)",      &[MIN3, DIM5, MIN7, MAJ9, P11],     Tetrad),
    ChordType::new("-7b5(b13)",       &[MIN3, DIM5, MIN7, MIN13],         Tetrad),

    // dominant extensions
    ChordType::new("7(9)",          &[MAJ3, P5, MIN7, MAJ9],               Tetrad),
    ChordType::new("7(b9)",         &[MAJ3, P5, MIN7, MIN9],               Tetrad),
    ChordType::new("7(#11)",        &[MAJ3, P5, MIN7, AUG11],              Tetrad),
    ChordType::new("7(13)",         &[MAJ3, P5, MIN7, MAJ13],              Tetrad),
    ChordType::new("7(b13)",        &[MAJ3, P5, MIN7, MIN13],              Tetrad),
    ChordType::new("7(9,#11)",      &[MAJ3, P5, MIN7, MAJ9, AUG11],        Tetrad),
    ChordType::new("7(9,13)",       &[MAJ3, P5, MIN7, MAJ9, MAJ13],        Tetrad),
    ChordType::new("7(b9,13)",      &[MAJ3, P5, MIN7, MIN9, MAJ13],        Tetrad),
    ChordType::new("7(b9,b13)",     &[MAJ3, P5, MIN7, MIN9, MIN13],        Tetrad),
    ChordType::new("7(9,b13)",      &[MAJ3, P5, MIN7, MAJ9, MIN13],        Tetrad),
    ChordType::new("7(b9,#11)",     &[MAJ3, P5, MIN7, MIN9, AUG11],        Tetrad),
    ChordType::new("7(#11,13)",     &[MAJ3, P5, MIN7, AUG11, MAJ13],       Tetrad),
    ChordType::new("7(9,#11,13)",   &[MAJ3, P5, MIN7, MAJ9, AUG11, MAJ13], Tetrad),
    ChordType::new("7(b9,#11,13)",  &[MAJ3, P5, MIN7, MIN9, AUG11, MAJ13], Tetrad),
    ChordType::new("7(b9,#11,b13)", &[MAJ3, P5, MIN7, MIN9, AUG11, MIN13], Tetrad),
    ChordType::new("7sus4(9)",      &[P4, P5, MIN7, MAJ9],                 Tetrad),
    ChordType::new("7sus4(b9)",     &[P4, P5, MIN7, MIN9],                 Tetrad),
    ChordType::new("7sus4(13)",     &[P4, P5, MIN7, MAJ13],                Tetrad),
    ChordType::new("Maj7#5(9)",     &[MAJ3, AUG5, MAJ7, MAJ9],             Tetrad),
    ChordType::new("7#5(9)",        &[MAJ3, AUG5, MIN7, MAJ9],             Tetrad),
];

/// Find a chord type by its exact name.
pub fn find_by_name(name: &str) -> Option<&'static ChordType> {
    CHORD_TYPES.iter().find(|t| t.name == name)
}
