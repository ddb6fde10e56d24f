// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for chordie.
//!
//! This module provides pitch classes, note sets, note-name parsing and
//! key-aware enharmonic spelling.

pub mod key;
pub mod note;
pub mod pitch_set;

pub use key::{spell, KeySignature, Spelling};
pub use note::{note_name_with_octave, parse_note, parse_note_name, MidiNote, PitchClass};
pub use pitch_set::{NoteSet, PitchClassSet};
