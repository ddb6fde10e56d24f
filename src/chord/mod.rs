// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord detection for chordie.
//!
//! Turns the set of currently held notes into a chord label such as "Cmaj9",
//! "Eb/Bb" or "F#m7". Detection runs in stages:
//!
//! 1. normalize the notes and handle the empty and single-pitch cases
//! 2. score every template at every candidate root ([`analyzer`])
//! 3. name the best match if it is convincing ([`naming`])
//! 4. otherwise fall back to triad or interval descriptions ([`fallback`])

pub mod analyzer;
pub mod fallback;
pub mod naming;
pub mod template;

pub use analyzer::{analyze, ChordMatch};
pub use template::{ChordTemplate, Coverage, CHORD_TEMPLATES};

use tracing::{debug, warn};

use crate::music::{spell, KeySignature, MidiNote, NoteSet};

/// A best match scoring above this is named
pub const ACCEPT_SCORE: f64 = 500.0;

/// A best match covering at least this much of its template is named
pub const ACCEPT_COVERAGE: f64 = 0.8;

/// Which stage produced a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    /// No notes held
    Empty,
    /// Only one pitch class held (possibly in several octaves)
    SingleNote,
    /// Named from a chord template
    Template,
    /// Described as one or two complete triads
    OverlappingTriads,
    /// Described as intervals above a best-guess root
    IntervalAnalysis,
}

/// A chord label and how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub kind: ResolutionKind,
}

impl Resolution {
    fn new(label: String, kind: ResolutionKind) -> Self {
        Self { label, kind }
    }
}

/// Chord detector settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordDetector {
    enforce_root: bool,
    key: Option<KeySignature>,
}

impl ChordDetector {
    /// Detector that searches all roots and spells with sharps
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the lowest held note to be the root
    pub fn with_enforce_root(mut self, enforce_root: bool) -> Self {
        self.enforce_root = enforce_root;
        self
    }

    /// Spell labels for a key signature
    pub fn with_key(mut self, key: Option<KeySignature>) -> Self {
        self.key = key;
        self
    }

    /// Spell labels for a key token; unrecognized tokens fall back to sharps
    pub fn with_key_name(self, key: Option<&str>) -> Self {
        let parsed = key.and_then(|k| {
            let parsed = KeySignature::parse(k);
            if parsed.is_none() {
                warn!("Unrecognized key signature {:?}, spelling with sharps", k);
            }
            parsed
        });
        self.with_key(parsed)
    }

    pub fn enforce_root(&self) -> bool {
        self.enforce_root
    }

    pub fn key(&self) -> Option<KeySignature> {
        self.key
    }

    /// Label the held notes
    pub fn detect(&self, notes: &[MidiNote]) -> String {
        self.resolve(notes).label
    }

    /// Label the held notes and report which stage produced the label
    pub fn resolve(&self, notes: &[MidiNote]) -> Resolution {
        let note_set = NoteSet::new(notes);
        let Some(bass) = note_set.bass_pitch_class() else {
            return Resolution::new(String::new(), ResolutionKind::Empty);
        };

        let pitch_classes = note_set.pitch_classes();
        if pitch_classes.len() == 1 {
            return Resolution::new(spell(bass, self.key).to_string(), ResolutionKind::SingleNote);
        }

        let matches = analyze(pitch_classes, self.enforce_root, bass);
        if let Some(best) = matches.first() {
            if best.score > ACCEPT_SCORE || best.coverage >= ACCEPT_COVERAGE {
                let label = naming::build_chord_name(best, pitch_classes, bass, self.key);
                debug!(
                    "{:?} -> {} ({} at root {}, score {:.1}, coverage {:.2})",
                    note_set.notes(),
                    label,
                    best.template.name,
                    best.root,
                    best.score,
                    best.coverage
                );
                return Resolution::new(label, ResolutionKind::Template);
            }
            debug!(
                "Best match {}{} rejected (score {:.1}, coverage {:.2})",
                best.root, best.template.symbol, best.score, best.coverage
            );
        }

        if let Some(label) = fallback::describe_triads(pitch_classes, self.key) {
            debug!("{:?} -> {} (overlapping triads)", note_set.notes(), label);
            return Resolution::new(label, ResolutionKind::OverlappingTriads);
        }

        let root = fallback::best_root(pitch_classes, self.enforce_root, bass);
        let label = fallback::interval_analysis(pitch_classes, root, self.key);
        debug!("{:?} -> {} (interval analysis)", note_set.notes(), label);
        Resolution::new(label, ResolutionKind::IntervalAnalysis)
    }
}

/// Label held MIDI notes.
///
/// `enforce_root` makes the lowest note the root. `key` is a key-signature
/// token ("Eb", "F#", ...) that selects flat or sharp spelling; `None` or an
/// unrecognized token spells with sharps. An empty slice yields "".
pub fn detect_chord(notes: &[MidiNote], enforce_root: bool, key: Option<&str>) -> String {
    ChordDetector::new()
        .with_enforce_root(enforce_root)
        .with_key_name(key)
        .detect(notes)
}
