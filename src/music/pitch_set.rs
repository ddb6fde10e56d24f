// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Normalized note collections.
//!
//! `NoteSet` keeps octave information (needed for the bass note), while
//! `PitchClassSet` is the octave-free view the chord matcher works on.

use super::note::{MidiNote, PitchClass};

/// Mask covering the twelve pitch-class bits
const PITCH_CLASS_MASK: u16 = 0x0FFF;

/// A set of pitch classes stored as a 12-bit mask (bit 0 = C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClassSet {
    bits: u16,
}

impl PitchClassSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from raw bits (only the low twelve are kept)
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & PITCH_CLASS_MASK,
        }
    }

    /// Build a set from MIDI notes, discarding octaves
    pub fn from_notes(notes: &[MidiNote]) -> Self {
        notes.iter().fold(Self::new(), |set, &n| set.with(PitchClass::of(n)))
    }

    /// Raw 12-bit mask
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Return a copy with a pitch class added
    pub const fn with(self, pc: PitchClass) -> Self {
        Self {
            bits: self.bits | (1 << pc.value()),
        }
    }

    /// Check membership
    pub const fn contains(self, pc: PitchClass) -> bool {
        self.bits & (1 << pc.value()) != 0
    }

    /// Number of distinct pitch classes
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate members in ascending pitch-class order
    pub fn iter(self) -> impl Iterator<Item = PitchClass> {
        (0..12u8)
            .filter(move |&v| self.bits & (1 << v) != 0)
            .map(PitchClass::new)
    }

    /// Members not present in `other`
    pub const fn difference(self, other: PitchClassSet) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Whether every member of `other` is in this set
    pub const fn is_superset(self, other: PitchClassSet) -> bool {
        self.bits & other.bits == other.bits
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, pc| set.with(pc))
    }
}

/// Deduplicated, ascending MIDI notes currently sounding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteSet {
    notes: Vec<MidiNote>,
}

impl NoteSet {
    /// Normalize raw notes: duplicates removed, sorted ascending
    pub fn new(raw: &[MidiNote]) -> Self {
        let mut notes = raw.to_vec();
        notes.sort_unstable();
        notes.dedup();
        Self { notes }
    }

    /// The normalized notes
    pub fn notes(&self) -> &[MidiNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Lowest sounding note
    pub fn bass(&self) -> Option<MidiNote> {
        self.notes.first().copied()
    }

    /// Pitch class of the lowest sounding note
    pub fn bass_pitch_class(&self) -> Option<PitchClass> {
        self.bass().map(PitchClass::of)
    }

    /// Octave-free view of the notes
    pub fn pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::from_notes(&self.notes)
    }
}
