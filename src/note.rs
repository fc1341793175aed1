//! Note Table
//!
//! The fixed catalog of 33 spelled pitch names a chord can be built from.
//! Every spelling is keyed by its (pitch class, scale step) pair so that
//! enharmonic spellings such as C# and Db never collide.

use std::fmt;

const SEMITONES: i32 = 12;

/// Octave every chord construction starts from.
pub const BASE_OCTAVE: i32 = 2;

/// Number of spellings in [`NOTES`].
pub const NUM_NOTES: usize = 33;

/// A spelled pitch, optionally placed in an octave.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    /// Spelling, e.g. `"C#"` or `"Bbb"`.
    pub name: &'static str,
    /// Position relative to C in `0..12`.
    pub pitch_class: u8,
    /// Diatonic letter class in `0..7` (C = 0 … B = 6).
    pub scale_step: u8,
    /// Whether the spelling is offered as a chord root.
    pub can_be_root: bool,
    /// Octave register; only meaningful for notes inside a [`Chord`](crate::Chord).
    pub octave: i32,
}

impl Note {
    /// `semitone` is relative to C and may fall outside `0..12` (`Cbb` is -2,
    /// `B#` is 12); `degree` is the one-based letter (C = 1 … B = 7).
    const fn spelled(name: &'static str, semitone: i8, degree: u8, can_be_root: bool) -> Self {
        Note {
            name,
            pitch_class: semitone.rem_euclid(SEMITONES as i8) as u8,
            scale_step: degree - 1,
            can_be_root,
            octave: BASE_OCTAVE,
        }
    }

    /// Absolute height in semitones: `octave * 12 + pitch_class`.
    pub fn pitch_height(&self) -> i32 {
        self.octave * SEMITONES + i32::from(self.pitch_class)
    }

    /// MIDI note number, with C4 = 60.
    pub fn midi_number(&self) -> i32 {
        self.pitch_height() + SEMITONES
    }

    /// Copy of this note moved `octaves` registers up (or down when negative).
    pub fn transposed(mut self, octaves: i32) -> Self {
        self.octave += octaves;
        self
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Every spelling, in declaration order (by letter, flattest first).
#[rustfmt::skip]
pub static NOTES: [Note; NUM_NOTES] = [
    Note::spelled("Cbb", -2, 1, false),
    Note::spelled("Cb",  -1, 1, false),
    Note::spelled("C",    0, 1, true),
    Note::spelled("C#",   1, 1, true),
    Note::spelled("Cx",   2, 1, false),
    Note::spelled("Dbb",  0, 2, false),
    Note::spelled("Db",   1, 2, true),
    Note::spelled("D",    2, 2, true),
    Note::spelled("D#",   3, 2, true),
    Note::spelled("Dx",   4, 2, false),
    Note::spelled("Ebb",  2, 3, false),
    Note::spelled("Eb",   3, 3, true),
    Note::spelled("E",    4, 3, true),
    Note::spelled("E#",   5, 3, false),
    Note::spelled("Ex",   6, 3, false),
    Note::spelled("Fb",   4, 4, false),
    Note::spelled("F",    5, 4, true),
    Note::spelled("F#",   6, 4, true),
    Note::spelled("Fx",   7, 4, false),
    Note::spelled("Gbb",  5, 5, false),
    Note::spelled("Gb",   6, 5, true),
    Note::spelled("G",    7, 5, true),
    Note::spelled("G#",   8, 5, true),
    Note::spelled("Gx",   9, 5, false),
    Note::spelled("Abb",  7, 6, false),
    Note::spelled("Ab",   8, 6, true),
    Note::spelled("A",    9, 6, true),
    Note::spelled("A#",  10, 6, true),
    Note::spelled("Ax",  11, 6, false),
    Note::spelled("Bbb",  9, 7, false),
    Note::spelled("Bb",  10, 7, true),
    Note::spelled("B",   11, 7, true),
    Note::spelled("B#",  12, 7, false),
];

/// Find the spelling for a (pitch class, scale step) pair.
pub fn find_by_class_and_step(pitch_class: u8, scale_step: u8) -> Option<&'static Note> {
    NOTES
        .iter()
        .find(|n| n.pitch_class == pitch_class && n.scale_step == scale_step)
}

/// Find a spelling by its exact name.
pub fn find_by_name(name: &str) -> Option<&'static Note> {
    NOTES.iter().find(|n| n.name == name)
}

/// Spellings that may serve as a chord root, in table order.
pub fn root_candidates() -> impl Iterator<Item = &'static Note> {
    NOTES.iter().filter(|n| n.can_be_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_classes_wrap_into_range() {
        assert_eq!(find_by_name("Cbb").unwrap().pitch_class, 10);
        assert_eq!(find_by_name("Cb").unwrap().pitch_class, 11);
        assert_eq!(find_by_name("B#").unwrap().pitch_class, 0);
        assert!(NOTES.iter().all(|n| n.pitch_class < 12 && n.scale_step < 7));
    }

    #[test]
    fn enharmonics_resolve_by_scale_step() {
        assert_eq!(find_by_class_and_step(1, 0).unwrap().name, "C#");
        assert_eq!(find_by_class_and_step(1, 1).unwrap().name, "Db");
        assert_eq!(find_by_class_and_step(0, 6).unwrap().name, "B#");
        assert!(find_by_class_and_step(1, 6).is_none());
    }

    #[test]
    fn class_and_step_pairs_are_unique() {
        for (i, a) in NOTES.iter().enumerate() {
            for b in &NOTES[i + 1..] {
                assert!(
                    (a.pitch_class, a.scale_step) != (b.pitch_class, b.scale_step),
                    "{} and {} share a key",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn root_candidates_skip_double_accidentals_and_theoretical_spellings() {
        let roots: Vec<_> = root_candidates().map(|n| n.name).collect();
        assert_eq!(
            roots,
            [
                "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A",
                "A#", "Bb", "B"
            ]
        );
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(find_by_name("H").is_none());
        assert!(find_by_name("c").is_none());
    }

    #[test]
    fn heights_and_display() {
        let e = find_by_name("E").unwrap().transposed(1);
        assert_eq!(e.octave, 3);
        assert_eq!(e.pitch_height(), 40);
        assert_eq!(e.midi_number(), 52);
        assert_eq!(e.to_string(), "E3");
    }
}
