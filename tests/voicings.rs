//! Integration tests for chord construction across the whole catalog.

use chord_voicer::{
    build, chord_type, from_name, note, Chord, ChordFamily, ChordType, Diagnostic, LookupError,
    Note, CHORD_TYPES, NOTES,
};
use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::sync::{Arc, Mutex};

/// One (root, chord type) pair of the catalog sweep
#[derive(Debug, Clone, Copy)]
struct Case {
    root: &'static Note,
    chord_type: &'static ChordType,
}

impl Case {
    fn label(&self) -> String {
        format!("{}{}", self.root.name, self.chord_type.name)
    }

    fn build(&self, inversion: usize, drops: &[usize]) -> (Chord, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let chord = Chord::builder(self.root, self.chord_type)
            .inversion(inversion)
            .drops(drops.iter().copied())
            .build_with(&mut diagnostics);
        (chord, diagnostics)
    }

    /// Every interval sits inside one octave, so inverting walks the
    /// construction order up through the bass.
    fn is_close(&self) -> bool {
        self.chord_type.intervals.iter().all(|i| i.semitones < 12)
    }
}

lazy_static! {
    static ref CASES: Vec<Case> = note::root_candidates()
        .flat_map(|root| CHORD_TYPES.iter().map(move |chord_type| Case { root, chord_type }))
        .collect();
}

fn names(chord: &Chord) -> Vec<&'static str> {
    chord.notes().iter().map(|n| n.name).collect()
}

fn spelled(chord: &Chord) -> Vec<String> {
    chord.notes().iter().map(Note::to_string).collect()
}

/// Run `check` on every case in parallel and panic with every failure message.
fn sweep<F>(check: F)
where
    F: Fn(&Case) -> Option<String> + Sync,
{
    let failures = Arc::new(Mutex::new(Vec::<String>::new()));

    CASES.par_iter().for_each(|case| {
        if let Some(msg) = check(case) {
            failures.lock().unwrap().push(format!("{}: {msg}", case.label()));
        }
    });

    let mut failures = Arc::try_unwrap(failures).unwrap().into_inner().unwrap();
    if !failures.is_empty() {
        failures.sort();
        panic!("{} cases failed:\n{}", failures.len(), failures.join("\n"));
    }
}

#[test]
fn sweep_covers_every_root_and_type() {
    assert_eq!(CASES.len(), 17 * CHORD_TYPES.len());
}

#[test]
fn catalog_is_complete_for_every_root() {
    sweep(|case| {
        let (chord, diagnostics) = case.build(0, &[]);
        if !diagnostics.is_empty() {
            return Some(format!("{diagnostics:?}"));
        }
        if chord.notes().len() != case.chord_type.note_count() {
            return Some(format!("only {} notes", chord.notes().len()));
        }
        None
    });
}

#[test]
fn root_position_keeps_root_in_bass() {
    sweep(|case| {
        let (chord, _) = case.build(0, &[]);
        let Some(bass) = chord.bass() else {
            return Some("no notes".to_string());
        };
        let root = case.root;
        if (bass.pitch_class, bass.scale_step) != (root.pitch_class, root.scale_step) {
            return Some(format!("bass is {bass}"));
        }
        if chord.name() != case.label() {
            return Some(format!("named {}", chord.name()));
        }
        None
    });
}

#[test]
fn notes_are_sorted_low_to_high() {
    sweep(|case| {
        for inversion in 0..case.chord_type.inversion_cycle() {
            let drop_sets: [&[usize]; 6] = [&[], &[1], &[2], &[3], &[4], &[2, 4]];
            for drops in drop_sets {
                let (chord, _) = case.build(inversion, drops);
                let heights: Vec<i32> = chord.notes().iter().map(Note::pitch_height).collect();
                if heights.windows(2).any(|w| w[0] > w[1]) {
                    return Some(format!("unsorted {:?}", spelled(&chord)));
                }
            }
        }
        None
    });
}

#[test]
fn inversions_past_the_cycle_wrap_around() {
    sweep(|case| {
        let cycle = case.chord_type.inversion_cycle();
        for (requested, expected) in [(cycle, 0), (cycle + 1, 1), (2 * cycle, 0), (2 * cycle + 2, 2)]
        {
            let (wrapped, _) = case.build(requested, &[]);
            let (reference, _) = case.build(expected, &[]);
            if wrapped.name() != reference.name() || wrapped.notes() != reference.notes() {
                return Some(format!(
                    "inversion {requested}: {} {:?} vs {} {:?}",
                    wrapped.name(),
                    spelled(&wrapped),
                    reference.name(),
                    spelled(&reference)
                ));
            }
            if wrapped.inversion() != expected {
                return Some(format!("inversion {requested} reported as {}", wrapped.inversion()));
            }
        }
        None
    });
}

#[test]
fn inversion_puts_the_chord_tone_in_bass() {
    sweep(|case| {
        if !case.is_close() {
            return None;
        }
        let (root_position, _) = case.build(0, &[]);
        let order = names(&root_position);
        for inversion in 0..case.chord_type.inversion_cycle() {
            let (chord, _) = case.build(inversion, &[]);
            if chord.notes()[0].name != order[inversion] {
                return Some(format!("inversion {inversion}: {:?}", spelled(&chord)));
            }
        }
        None
    });
}

#[test]
fn drops_land_on_the_requested_inversion() {
    sweep(|case| {
        if !case.is_close() {
            return None;
        }
        let (root_position, _) = case.build(0, &[]);
        let order = names(&root_position);
        for drop in (1..=4).filter(|&d| case.chord_type.is_drop_compatible(d)) {
            for inversion in 0..case.chord_type.inversion_cycle() {
                let (chord, diagnostics) = case.build(inversion, &[drop]);
                if !diagnostics.is_empty() {
                    return Some(format!("drop {drop}: {diagnostics:?}"));
                }
                if chord.notes()[0].name != order[inversion] {
                    return Some(format!(
                        "drop {drop} inversion {inversion}: {:?}",
                        spelled(&chord)
                    ));
                }
                if !chord.name().ends_with(&format!(" drop {drop}")) {
                    return Some(format!("named {}", chord.name()));
                }
            }
        }
        None
    });
}

#[test]
fn incompatible_drops_change_nothing() {
    sweep(|case| {
        let (plain, _) = case.build(1, &[]);
        let rejected: Vec<usize> = (0..=5)
            .filter(|&d| !case.chord_type.is_drop_compatible(d))
            .collect();
        let (chord, diagnostics) = case.build(1, &rejected);
        if chord != plain {
            return Some(format!("{} vs {}", chord.name(), plain.name()));
        }
        (diagnostics.len() != rejected.len()).then(|| format!("{diagnostics:?}"))
    });
}

#[test]
fn triad_drop_gating() {
    let sus2 = chord_type::find_by_name("sus2").unwrap();
    assert_eq!(sus2.family, ChordFamily::Triad);

    let c = note::find_by_name("C").unwrap();
    let plain = build(c, sus2, 0, &[]);
    let gated = build(c, sus2, 0, &[3]);
    assert_eq!(gated, plain);
    assert!(!gated.name().contains(" drop"));
}

#[test]
fn tetrad_drop_gating() {
    let c = note::find_by_name("C").unwrap();
    for chord_type in CHORD_TYPES.iter().filter(|t| t.family == ChordFamily::Tetrad) {
        let plain = build(c, chord_type, 0, &[]);
        assert_eq!(build(c, chord_type, 0, &[0]), plain);
        assert_eq!(build(c, chord_type, 0, &[5]), plain);
    }
}

#[test]
fn chords_are_independent_values() {
    let table_before = NOTES;

    let first = from_name("G", "7(b9,#11,13)", 2, &[3]).unwrap();
    let second = from_name("G", "7(b9,#11,13)", 2, &[3]).unwrap();
    assert_eq!(first, second);

    let mut notes = second.into_notes();
    for n in &mut notes {
        n.octave += 5;
    }
    assert_ne!(notes, first.notes());
    assert_eq!(NOTES, table_before);
    assert!(notes.iter().all(|n| {
        let entry = note::find_by_name(n.name).unwrap();
        entry.pitch_class == n.pitch_class
            && entry.scale_step == n.scale_step
            && entry.octave == chord_voicer::BASE_OCTAVE
    }));
}

#[test]
fn first_inversion_maj7() {
    let chord = from_name("C", "Maj7", 1, &[]).unwrap();
    assert_eq!(chord.name(), "CMaj7/E");
    assert_eq!(spelled(&chord), ["E2", "G2", "B2", "C3"]);
}

#[test]
fn drop_two_maj7() {
    let chord = from_name("C", "Maj7", 0, &[2]).unwrap();
    assert_eq!(chord.name(), "CMaj7 drop 2");
    assert_eq!(spelled(&chord), ["C2", "G2", "B2", "E3"]);
}

#[test]
fn unknown_root_is_absent() {
    assert_eq!(
        from_name("X", "Maj7", 0, &[]),
        Err(LookupError::UnknownRoot("X".to_string()))
    );
}

#[test]
fn drop_three_second_inversion_dominant() {
    // inversion (2 + 3) % 4 = 1 raises G; sorted B D F G, then D drops an octave
    let chord = from_name("G", "7", 2, &[3]).unwrap();
    assert_eq!(chord.name(), "G7/D drop 3");
    assert_eq!(spelled(&chord), ["D2", "B2", "F3", "G3"]);
    assert_eq!(chord.midi_notes(), [38, 47, 53, 55]);
}

#[test]
fn added_ninth_third_inversion_keeps_root_in_bass() {
    // C, E and G rise to octave 3 while the ninth already sits at D3
    let chord = from_name("C", "add9", 3, &[]).unwrap();
    assert_eq!(chord.name(), "Cadd9");
    assert_eq!(spelled(&chord), ["C3", "D3", "E3", "G3"]);
}
