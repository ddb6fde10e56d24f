// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, MIDI note numbers and scientific pitch names.

use std::fmt;

use crate::error::{ChordieError, Result};

use super::key::{spell, KeySignature, Spelling};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// A note reduced to one of the twelve chromatic steps (0 = C .. 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Create a pitch class, wrapping any value into 0-11
    pub const fn new(value: u8) -> Self {
        PitchClass(value % 12)
    }

    /// Get the pitch class of a MIDI note
    pub const fn of(note: MidiNote) -> Self {
        PitchClass(note % 12)
    }

    /// Get the raw value (0-11)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Transpose upward by semitones
    pub const fn transpose(self, semitones: u8) -> Self {
        PitchClass((self.0 + semitones % 12) % 12)
    }

    /// Get interval in semitones to another pitch class (ascending)
    pub const fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Parse a pitch name without octave (e.g., "C", "F#", "Bb")
    pub fn from_str(s: &str) -> Option<Self> {
        let (natural, accidental) = parse_pitch(s.trim())?;
        Some(PitchClass::new((natural as i8 + accidental).rem_euclid(12) as u8))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Spelling::Sharps.name(*self))
    }
}

/// Split a pitch name into its natural letter's pitch class and accidental offset
fn parse_pitch(s: &str) -> Option<(u8, i8)> {
    let mut chars = s.chars();
    let natural = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let accidental = match chars.as_str() {
        "" => 0,
        "#" | "s" => 1,
        "b" => -1,
        _ => return None,
    };
    Some((natural, accidental))
}

/// Parse a scientific pitch name into a MIDI note number.
///
/// Middle C is `C4` = 60. Accidentals may push a note across an octave
/// boundary, so `Cb4` is 59 and `B#3` is 60.
pub fn parse_note_name(name: &str) -> Result<MidiNote> {
    let name = name.trim();
    let split = name
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || *c == '-')
        .map(|(i, _)| i)
        .ok_or_else(|| ChordieError::InvalidNoteName(name.to_string()))?;

    let (pitch, octave) = name.split_at(split);
    let (natural, accidental) =
        parse_pitch(pitch).ok_or_else(|| ChordieError::InvalidNoteName(name.to_string()))?;
    let octave: i32 = octave
        .parse()
        .map_err(|_| ChordieError::InvalidNoteName(name.to_string()))?;

    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|base| base.checked_add(natural as i32 + accidental as i32))
        .and_then(|midi| MidiNote::try_from(midi).ok())
        .filter(|&midi| midi <= 127)
        .ok_or_else(|| ChordieError::NoteOutOfRange(name.to_string()))
}

/// Parse either a MIDI number ("60") or a pitch name ("C4")
pub fn parse_note(token: &str) -> Result<MidiNote> {
    let token = token.trim();
    if token.chars().all(|c| c.is_ascii_digit()) && !token.is_empty() {
        return token
            .parse::<u8>()
            .ok()
            .filter(|n| *n <= 127)
            .ok_or_else(|| ChordieError::NoteOutOfRange(token.to_string()));
    }
    parse_note_name(token)
}

/// Render a MIDI note with its octave (e.g., 61 -> "C#4" or "Db4")
pub fn note_name_with_octave(note: MidiNote, key: Option<KeySignature>) -> String {
    let octave = (note / 12) as i16 - 1;
    format!("{}{}", spell(PitchClass::of(note), key), octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::new(12), PitchClass::C);
        assert_eq!(PitchClass::of(61).value(), 1);
        assert_eq!(PitchClass::of(127).value(), 7);
    }

    #[test]
    fn test_pitch_class_transpose() {
        assert_eq!(PitchClass::new(0).transpose(2).value(), 2);
        assert_eq!(PitchClass::new(10).transpose(4).value(), 2);
        assert_eq!(PitchClass::new(7).transpose(12).value(), 7);
    }

    #[test]
    fn test_pitch_class_interval() {
        assert_eq!(PitchClass::new(0).interval_to(PitchClass::new(7)), 7);
        assert_eq!(PitchClass::new(7).interval_to(PitchClass::new(0)), 5);
        assert_eq!(PitchClass::new(4).interval_to(PitchClass::new(4)), 0);
    }

    #[test]
    fn test_pitch_class_from_str() {
        assert_eq!(PitchClass::from_str("C"), Some(PitchClass::new(0)));
        assert_eq!(PitchClass::from_str("C#"), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::from_str("Db"), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::from_str("Cb"), Some(PitchClass::new(11)));
        assert_eq!(PitchClass::from_str("X"), None);
        assert_eq!(PitchClass::from_str("C##"), None);
    }

    #[test]
    fn test_parse_note_name() {
        assert_eq!(parse_note_name("C4").unwrap(), 60);
        assert_eq!(parse_note_name("A4").unwrap(), 69);
        assert_eq!(parse_note_name("C#4").unwrap(), 61);
        assert_eq!(parse_note_name("Db4").unwrap(), 61);
        assert_eq!(parse_note_name("C0").unwrap(), 12);
        assert_eq!(parse_note_name("C8").unwrap(), 108);
        assert_eq!(parse_note_name("C-1").unwrap(), 0);
    }

    #[test]
    fn test_parse_note_name_crosses_octave() {
        assert_eq!(parse_note_name("Cb4").unwrap(), 59);
        assert_eq!(parse_note_name("B#3").unwrap(), 60);
    }

    #[test]
    fn test_parse_note_name_rejects_garbage() {
        assert!(matches!(
            parse_note_name("H4"),
            Err(ChordieError::InvalidNoteName(_))
        ));
        assert!(matches!(
            parse_note_name("C"),
            Err(ChordieError::InvalidNoteName(_))
        ));
        assert!(matches!(
            parse_note_name("G#9"),
            Err(ChordieError::NoteOutOfRange(_))
        ));
        assert!(matches!(
            parse_note_name("Cb-1"),
            Err(ChordieError::NoteOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_note_name_huge_octave() {
        assert!(matches!(
            parse_note_name("C999999999"),
            Err(ChordieError::NoteOutOfRange(_))
        ));
        assert!(matches!(
            parse_note_name("C-999999999"),
            Err(ChordieError::NoteOutOfRange(_))
        ));
        assert!(matches!(
            parse_note("B2147483646"),
            Err(ChordieError::NoteOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_note_accepts_numbers() {
        assert_eq!(parse_note("60").unwrap(), 60);
        assert_eq!(parse_note("E2").unwrap(), 40);
        assert!(parse_note("128").is_err());
    }

    #[test]
    fn test_note_name_with_octave() {
        assert_eq!(note_name_with_octave(60, None), "C4");
        assert_eq!(note_name_with_octave(61, None), "C#4");
        assert_eq!(note_name_with_octave(61, KeySignature::parse("Db")), "Db4");
        assert_eq!(note_name_with_octave(0, None), "C-1");
    }
}
