//! Chord Builder
//!
//! Turns a root, a chord type, an inversion and a list of drops into an
//! ordered, octave-placed voicing with a display name.

use std::fmt::Display;

use crate::chord_type::ChordType;
use crate::diagnostic::{Diagnostic, DiagnosticSink, LogSink};
use crate::note::{self, Note, BASE_OCTAVE};

const SEMITONES: i32 = 12;
const SCALE_STEPS: u8 = 7;

/// A built chord: spelled notes from lowest to highest plus a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    name: String,
    root: Note,
    chord_type: &'static ChordType,
    notes: Vec<Note>,
    inversion: usize,
    drops: Vec<usize>,
}

impl Chord {
    /// Start configuring a chord on `root`.
    pub fn builder(root: &Note, chord_type: &'static ChordType) -> ChordBuilder {
        ChordBuilder::new(root, chord_type)
    }

    /// Display name, e.g. `"CMaj7/E"` or `"CMaj7 drop 2"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root as resolved, in the base octave.
    pub fn root(&self) -> &Note {
        &self.root
    }

    /// The chord type the chord was built from.
    pub fn chord_type(&self) -> &'static ChordType {
        self.chord_type
    }

    /// Notes from lowest to highest.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Take ownership of the notes.
    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    /// Lowest sounding note.
    pub fn bass(&self) -> Option<&Note> {
        self.notes.first()
    }

    /// Inversion actually applied, after reduction and drop compensation.
    pub fn inversion(&self) -> usize {
        self.inversion
    }

    /// Drops that survived validation, in request order.
    pub fn drops(&self) -> &[usize] {
        &self.drops
    }

    /// MIDI note numbers from lowest to highest.
    pub fn midi_notes(&self) -> Vec<i32> {
        self.notes.iter().map(Note::midi_number).collect()
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for [`Chord`] to choose inversion and drop voicings.
#[derive(Debug, Clone)]
pub struct ChordBuilder {
    root: Note,
    chord_type: &'static ChordType,
    inversion: usize,
    drops: Vec<usize>,
}

impl ChordBuilder {
    /// Root position, no drops.
    pub fn new(root: &Note, chord_type: &'static ChordType) -> Self {
        ChordBuilder {
            root: *root,
            chord_type,
            inversion: 0,
            drops: Vec::new(),
        }
    }

    /// Set the requested inversion; it is reduced modulo the inversion cycle.
    pub fn inversion(mut self, inversion: usize) -> Self {
        self.inversion = inversion;
        self
    }

    /// Replace the requested drops.
    pub fn drops<I: IntoIterator<Item = usize>>(mut self, drops: I) -> Self {
        self.drops = drops.into_iter().collect();
        self
    }

    /// Append one requested drop.
    pub fn add_drop(mut self, drop: usize) -> Self {
        self.drops.push(drop);
        self
    }

    /// Build, sending diagnostics to the log.
    pub fn build(self) -> Chord {
        self.build_with(&mut LogSink)
    }

    /// Build, sending diagnostics to `sink`.
    pub fn build_with<S: DiagnosticSink + ?Sized>(self, sink: &mut S) -> Chord {
        let ChordBuilder {
            mut root,
            chord_type,
            inversion,
            drops,
        } = self;
        root.octave = BASE_OCTAVE;
        let cycle = chord_type.inversion_cycle();

        // 1) drop validation
        let drops: Vec<usize> = drops
            .into_iter()
            .filter(|&drop| {
                let ok = chord_type.is_drop_compatible(drop);
                if !ok {
                    sink.report(Diagnostic::IncompatibleDrop {
                        chord_type: chord_type.name,
                        drop,
                    });
                }
                ok
            })
            .collect();

        // 2) interval resolution, in construction order
        let mut notes = resolve_intervals(&root, chord_type, sink);

        // 3) effective inversion
        let inversion = match drops.last() {
            Some(&last) => (inversion + last) % cycle,
            None => inversion % cycle,
        };

        // 4) raise the first `inversion` notes before any sorting
        for note in notes.iter_mut().take(inversion) {
            note.octave += 1;
        }

        // 5) close position
        notes.sort_by_key(Note::pitch_height);

        // 6) lower the dropped voices, counted on the sorted chord
        let len = notes.len();
        for &drop in &drops {
            match cycle.checked_sub(drop).filter(|&position| position < len) {
                Some(position) => notes[position].octave -= 1,
                None => sink.report(Diagnostic::DropOutOfRange { drop, cycle, len }),
            }
        }

        // 7) final order
        notes.sort_by_key(Note::pitch_height);

        let name = chord_name(&root, chord_type, &notes, &drops);
        log::debug!("built {name}: {}", note_list(&notes));

        Chord {
            name,
            root,
            chord_type,
            notes,
            inversion,
            drops,
        }
    }
}

/// Root followed by every interval that has a spelling, octaves assigned.
fn resolve_intervals<S: DiagnosticSink + ?Sized>(
    root: &Note,
    chord_type: &ChordType,
    sink: &mut S,
) -> Vec<Note> {
    let mut notes = Vec::with_capacity(chord_type.note_count());
    notes.push(*root);

    for interval in chord_type.intervals {
        let absolute = i32::from(root.pitch_class) + i32::from(interval.semitones);
        let pitch_class = absolute.rem_euclid(SEMITONES) as u8;
        let scale_step = (root.scale_step + interval.scale_steps) % SCALE_STEPS;

        match note::find_by_class_and_step(pitch_class, scale_step) {
            Some(found) => {
                let mut note = *found;
                note.octave = BASE_OCTAVE + absolute.div_euclid(SEMITONES);
                notes.push(note);
            }
            None => sink.report(Diagnostic::UnresolvedInterval {
                root: root.name,
                semitones: interval.semitones,
                scale_steps: interval.scale_steps,
                pitch_class,
                scale_step,
            }),
        }
    }
    notes
}

/// Root and type, then a slash bass when inverted, then the drops.
fn chord_name(root: &Note, chord_type: &ChordType, notes: &[Note], drops: &[usize]) -> String {
    let mut name = format!("{}{}", root.name, chord_type.name);
    if let Some(bass) = notes.first() {
        if bass.name != root.name {
            name.push('/');
            name.push_str(bass.name);
        }
    }
    if !drops.is_empty() {
        let list: Vec<String> = drops.iter().map(usize::to_string).collect();
        name.push_str(" drop ");
        name.push_str(&list.join(","));
    }
    name
}

fn note_list(notes: &[Note]) -> String {
    notes
        .iter()
        .map(Note::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a chord with an explicit inversion and drop list, logging diagnostics.
pub fn build(root: &Note, chord_type: &'static ChordType, inversion: usize, drops: &[usize]) -> Chord {
    ChordBuilder::new(root, chord_type)
        .inversion(inversion)
        .drops(drops.iter().copied())
        .build()
}
