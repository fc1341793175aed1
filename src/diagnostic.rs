//! Diagnostics
//!
//! Conditions the chord builder recovers from on its own. They never change
//! whether a chord is returned; they only describe what was left out.

use thiserror::Error;

/// A recovered problem found while building a chord.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A requested drop does not apply to the chord type and was discarded.
    #[error("drop {drop} is not compatible with chord type `{chord_type}`")]
    IncompatibleDrop {
        /// Name of the chord type.
        chord_type: &'static str,
        /// The rejected drop index.
        drop: usize,
    },

    /// No spelling exists for an interval above the root; the note was omitted.
    #[error(
        "can't find note (pitch class {pitch_class}, scale step {scale_step}) \
         for interval ({semitones} semitones, {scale_steps} steps) above {root}"
    )]
    UnresolvedInterval {
        /// Name of the root note.
        root: &'static str,
        /// Interval distance in semitones.
        semitones: u8,
        /// Interval distance in zero-based scale steps.
        scale_steps: u8,
        /// Pitch class that was looked up.
        pitch_class: u8,
        /// Scale step that was looked up.
        scale_step: u8,
    },

    /// A drop has no voice to lower, e.g. because the chord lost notes.
    #[error("drop {drop} has no voice to lower in a {len}-note chord with inversion cycle {cycle}")]
    DropOutOfRange {
        /// The drop index.
        drop: usize,
        /// Inversion cycle of the chord type.
        cycle: usize,
        /// Number of notes in the chord.
        len: usize,
    },
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade at warn level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
