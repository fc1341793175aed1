//! Lookup Facade
//!
//! Resolve a root name and a chord-type name, then build the chord.

use thiserror::Error;

use crate::chord::{Chord, ChordBuilder};
use crate::chord_type;
use crate::diagnostic::{DiagnosticSink, LogSink};
use crate::note;

/// Errors when resolving chord names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The root name is not a root-capable spelling.
    #[error("unknown root note `{0}`")]
    UnknownRoot(String),

    /// The chord type is not registered.
    #[error("unknown chord type `{0}`")]
    UnknownChordType(String),
}

/// Build a chord from a root name such as `"F#"` and a chord-type name such as `"Maj7"`.
///
/// Returns `Err(LookupError::UnknownRoot)` when the root is missing or is a
/// spelling that cannot be a root (double accidentals, `E#`, `B#`), and
/// `Err(LookupError::UnknownChordType)` when the chord type is not registered.
pub fn from_name(
    root_name: &str,
    chord_type_name: &str,
    inversion: usize,
    drops: &[usize],
) -> Result<Chord, LookupError> {
    from_name_with(root_name, chord_type_name, inversion, drops, &mut LogSink)
}

/// Same as [`from_name`], sending build diagnostics to `sink`.
pub fn from_name_with<S: DiagnosticSink + ?Sized>(
    root_name: &str,
    chord_type_name: &str,
    inversion: usize,
    drops: &[usize],
    sink: &mut S,
) -> Result<Chord, LookupError> {
    let root = note::root_candidates()
        .find(|n| n.name == root_name)
        .ok_or_else(|| LookupError::UnknownRoot(root_name.to_string()))?;
    let chord_type = chord_type::find_by_name(chord_type_name)
        .ok_or_else(|| LookupError::UnknownChordType(chord_type_name.to_string()))?;

    Ok(ChordBuilder::new(root, chord_type)
        .inversion(inversion)
        .drops(drops.iter().copied())
        .build_with(sink))
}
