// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord template database.
//!
//! Each template is a semitone pattern above a root, the suffix it is written
//! with, a priority used for ranking, and a coverage policy. The table is
//! ordered: when two candidates tie on every ranking key, the one generated
//! from the earlier template wins.

use crate::music::{PitchClass, PitchClassSet};

/// How much of a template must be present before it may name a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// Every interval must sound (triads, sevenths, sixths, adds)
    Complete,
    /// A majority of intervals is enough (extended and altered chords,
    /// whose voicings routinely omit tones)
    Partial,
}

impl Coverage {
    /// Minimum fraction of intervals that must be present
    pub fn minimum(self) -> f64 {
        match self {
            Coverage::Complete => 1.0,
            Coverage::Partial => 0.6,
        }
    }
}

/// A chord shape relative to its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordTemplate {
    /// Distinct semitone offsets from the root, starting at 0
    pub intervals: &'static [u8],
    /// Suffix appended to the root name (e.g., "m7")
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Ranking weight
    pub priority: u32,
    pub coverage: Coverage,
}

impl ChordTemplate {
    const fn complete(
        intervals: &'static [u8],
        symbol: &'static str,
        name: &'static str,
        priority: u32,
    ) -> Self {
        Self {
            intervals,
            symbol,
            name,
            priority,
            coverage: Coverage::Complete,
        }
    }

    const fn partial(
        intervals: &'static [u8],
        symbol: &'static str,
        name: &'static str,
        priority: u32,
    ) -> Self {
        Self {
            intervals,
            symbol,
            name,
            priority,
            coverage: Coverage::Partial,
        }
    }

    /// Whether every interval must be present
    pub fn requires_all(&self) -> bool {
        self.coverage == Coverage::Complete
    }

    /// The pitch classes this template spells above `root`
    pub fn pitch_classes(&self, root: PitchClass) -> PitchClassSet {
        self.intervals.iter().map(|&i| root.transpose(i)).collect()
    }
}

/// All known chord templates, in tie-break order
pub static CHORD_TEMPLATES: &[ChordTemplate] = &[
    // Triads
    ChordTemplate::complete(&[0, 4, 7], "", "Major", 1000),
    ChordTemplate::complete(&[0, 3, 7], "m", "Minor", 1000),
    ChordTemplate::complete(&[0, 4, 8], "aug", "Augmented", 1000),
    ChordTemplate::complete(&[0, 3, 6], "dim", "Diminished", 1000),
    ChordTemplate::complete(&[0, 5, 7], "sus4", "Suspended 4th", 950),
    ChordTemplate::complete(&[0, 2, 7], "sus2", "Suspended 2nd", 950),
    // Sevenths
    ChordTemplate::complete(&[0, 4, 7, 11], "maj7", "Major 7th", 900),
    ChordTemplate::complete(&[0, 4, 7, 10], "7", "Dominant 7th", 900),
    ChordTemplate::complete(&[0, 3, 7, 10], "m7", "Minor 7th", 900),
    ChordTemplate::complete(&[0, 3, 7, 11], "m(maj7)", "Minor Major 7th", 850),
    ChordTemplate::complete(&[0, 3, 6, 10], "m7b5", "Half Diminished", 850),
    ChordTemplate::complete(&[0, 3, 6, 9], "dim7", "Diminished 7th", 850),
    ChordTemplate::complete(&[0, 4, 8, 10], "7#5", "Augmented 7th", 800),
    ChordTemplate::complete(&[0, 4, 8, 11], "maj7#5", "Major 7th Sharp 5", 800),
    ChordTemplate::complete(&[0, 5, 7, 10], "7sus4", "7th Suspended 4th", 750),
    ChordTemplate::complete(&[0, 2, 7, 10], "7sus2", "7th Suspended 2nd", 750),
    // Sixths
    ChordTemplate::complete(&[0, 4, 7, 9], "6", "Major 6th", 850),
    ChordTemplate::complete(&[0, 3, 7, 9], "m6", "Minor 6th", 850),
    ChordTemplate::complete(&[0, 4, 7, 9, 2], "6/9", "6th Add 9", 800),
    ChordTemplate::complete(&[0, 3, 7, 9, 2], "m6/9", "Minor 6th Add 9", 800),
    // Ninths
    ChordTemplate::partial(&[0, 4, 7, 10, 2], "9", "Dominant 9th", 700),
    ChordTemplate::partial(&[0, 4, 7, 11, 2], "maj9", "Major 9th", 700),
    ChordTemplate::partial(&[0, 3, 7, 10, 2], "m9", "Minor 9th", 700),
    ChordTemplate::partial(&[0, 3, 7, 11, 2], "m(maj9)", "Minor Major 9th", 650),
    ChordTemplate::partial(&[0, 4, 7, 10, 1], "7b9", "7th Flat 9", 650),
    ChordTemplate::partial(&[0, 4, 7, 10, 3], "7#9", "7th Sharp 9", 650),
    // Elevenths
    ChordTemplate::partial(&[0, 4, 7, 10, 2, 5], "11", "11th", 600),
    ChordTemplate::partial(&[0, 3, 7, 10, 2, 5], "m11", "Minor 11th", 600),
    ChordTemplate::partial(&[0, 4, 7, 10, 6], "7#11", "7th Sharp 11", 580),
    ChordTemplate::partial(&[0, 4, 7, 11, 6], "maj7#11", "Major 7th Sharp 11", 580),
    // Thirteenths
    ChordTemplate::partial(&[0, 4, 7, 10, 2, 9], "13", "13th", 550),
    ChordTemplate::partial(&[0, 3, 7, 10, 2, 9], "m13", "Minor 13th", 550),
    ChordTemplate::partial(&[0, 4, 7, 10, 8], "7b13", "7th Flat 13", 530),
    // Added tones
    ChordTemplate::complete(&[0, 4, 7, 2], "add9", "Add 9", 500),
    ChordTemplate::complete(&[0, 3, 7, 2], "m(add9)", "Minor Add 9", 500),
    ChordTemplate::complete(&[0, 4, 7, 5], "add11", "Add 11", 450),
    ChordTemplate::complete(&[0, 4, 7, 6], "add#11", "Add Sharp 11", 450),
    // Altered
    ChordTemplate::complete(&[0, 4, 6, 10], "7b5", "7th Flat 5", 600),
    // Power chord
    ChordTemplate::complete(&[0, 7], "5", "Power Chord", 100),
];

/// Access the template database
pub fn templates() -> &'static [ChordTemplate] {
    CHORD_TEMPLATES
}

/// Look up a template by its suffix
pub fn find(symbol: &str) -> Option<&'static ChordTemplate> {
    CHORD_TEMPLATES.iter().find(|t| t.symbol == symbol)
}
