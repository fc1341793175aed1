//! # chord_voicer
//!
//! Build spelled, octave-placed chord voicings from a root, a chord type, an
//! inversion and optional drop voicings.
//!
//! ## Example
//! ```rust
//! use chord_voicer::{from_name, LookupError};
//!
//! fn run() -> Result<(), LookupError> {
//!     // 1) First inversion of C major seventh
//!     let chord = from_name("C", "Maj7", 1, &[])?;
//!     assert_eq!(chord.name(), "CMaj7/E");
//!
//!     // 2) Drop 2 voicing in root position
//!     let chord = from_name("C", "Maj7", 0, &[2])?;
//!     assert_eq!(chord.name(), "CMaj7 drop 2");
//!     let voicing: Vec<String> = chord.notes().iter().map(|n| n.to_string()).collect();
//!     assert_eq!(voicing, ["C2", "G2", "B2", "E3"]);
//!
//!     // 3) Unknown names are an error, not a panic
//!     assert!(from_name("X", "Maj7", 0, &[]).is_err());
//!     Ok(())
//! }
//! run().unwrap();
//! ```
//!
//! Problems the builder can recover from (an incompatible drop, an interval
//! with no spelling) are reported through a [`DiagnosticSink`]; the default
//! [`LogSink`] forwards them to the `log` crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord value object and builder.
pub use chord::{build, Chord, ChordBuilder};

/// Chord-type registry.
pub use chord_type::{ChordFamily, ChordType, Interval, CHORD_TYPES};

/// Recoverable build problems.
pub use diagnostic::{Diagnostic, DiagnosticSink, LogSink};

/// Name-based entry point.
pub use lookup::{from_name, from_name_with, LookupError};

/// Note table.
pub use note::{Note, BASE_OCTAVE, NOTES};

/// Chord construction module.
pub mod chord;

/// Interval catalog module.
pub mod chord_type;

/// Diagnostic reporting module.
pub mod diagnostic;

/// Lookup facade module.
pub mod lookup;

/// Note table module.
pub mod note;
