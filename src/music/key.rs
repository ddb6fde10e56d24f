// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key signatures and enharmonic spelling.
//!
//! A key signature never influences which chord is detected, only how its
//! pitch classes are written: flat-side keys read "Eb", everything else
//! reads "D#".

use std::fmt;

use super::note::PitchClass;

/// All-sharps spelling table, indexed by pitch class
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// All-flats spelling table, indexed by pitch class
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which accidental the black keys are written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Spell a pitch class with this table
    pub fn name(self, pc: PitchClass) -> &'static str {
        match self {
            Spelling::Sharps => SHARP_NAMES[pc.value() as usize],
            Spelling::Flats => FLAT_NAMES[pc.value() as usize],
        }
    }
}

/// The major-key signatures a caller may select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySignature {
    C,
    G,
    D,
    A,
    E,
    B,
    FSharp,
    GFlat,
    DFlat,
    AFlat,
    EFlat,
    BFlat,
    F,
}

impl KeySignature {
    /// All recognized key signatures
    pub const ALL: [KeySignature; 13] = [
        KeySignature::C,
        KeySignature::G,
        KeySignature::D,
        KeySignature::A,
        KeySignature::E,
        KeySignature::B,
        KeySignature::FSharp,
        KeySignature::GFlat,
        KeySignature::DFlat,
        KeySignature::AFlat,
        KeySignature::EFlat,
        KeySignature::BFlat,
        KeySignature::F,
    ];

    /// Parse a key token (e.g., "C", "F#", "Bb"). Unrecognized tokens yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "C" => Some(KeySignature::C),
            "G" => Some(KeySignature::G),
            "D" => Some(KeySignature::D),
            "A" => Some(KeySignature::A),
            "E" => Some(KeySignature::E),
            "B" => Some(KeySignature::B),
            "F#" => Some(KeySignature::FSharp),
            "Gb" => Some(KeySignature::GFlat),
            "Db" => Some(KeySignature::DFlat),
            "Ab" => Some(KeySignature::AFlat),
            "Eb" => Some(KeySignature::EFlat),
            "Bb" => Some(KeySignature::BFlat),
            "F" => Some(KeySignature::F),
            _ => None,
        }
    }

    /// The token this key signature is written as
    pub fn token(self) -> &'static str {
        match self {
            KeySignature::C => "C",
            KeySignature::G => "G",
            KeySignature::D => "D",
            KeySignature::A => "A",
            KeySignature::E => "E",
            KeySignature::B => "B",
            KeySignature::FSharp => "F#",
            KeySignature::GFlat => "Gb",
            KeySignature::DFlat => "Db",
            KeySignature::AFlat => "Ab",
            KeySignature::EFlat => "Eb",
            KeySignature::BFlat => "Bb",
            KeySignature::F => "F",
        }
    }

    /// Whether this key writes black keys as flats.
    ///
    /// C counts as a flat-side key, so chromatic tones in C read Db, Eb, Gb,
    /// Ab and Bb.
    pub fn prefers_flats(self) -> bool {
        matches!(
            self,
            KeySignature::C
                | KeySignature::F
                | KeySignature::BFlat
                | KeySignature::EFlat
                | KeySignature::AFlat
                | KeySignature::DFlat
                | KeySignature::GFlat
        )
    }

    /// The spelling table for this key
    pub fn spelling(self) -> Spelling {
        if self.prefers_flats() {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Spelling used when a key is optional: no key means sharps
pub fn spelling_for(key: Option<KeySignature>) -> Spelling {
    key.map(KeySignature::spelling).unwrap_or_default()
}

/// Spell a pitch class for an optional key signature
pub fn spell(pc: PitchClass, key: Option<KeySignature>) -> &'static str {
    spelling_for(key).name(pc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(v: u8) -> PitchClass {
        PitchClass::new(v)
    }

    #[test]
    fn test_parse_all_tokens() {
        for key in KeySignature::ALL {
            assert_eq!(KeySignature::parse(key.token()), Some(key));
        }
        assert_eq!(KeySignature::parse(" Eb "), Some(KeySignature::EFlat));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(KeySignature::parse("H"), None);
        assert_eq!(KeySignature::parse("C#"), None);
        assert_eq!(KeySignature::parse(""), None);
    }

    #[test]
    fn test_f_sharp_and_g_flat_are_distinct() {
        assert_eq!(KeySignature::FSharp.spelling(), Spelling::Sharps);
        assert_eq!(KeySignature::GFlat.spelling(), Spelling::Flats);
    }

    #[test]
    fn test_flat_side_keys() {
        let flats: Vec<&str> = KeySignature::ALL
            .iter()
            .filter(|k| k.prefers_flats())
            .map(|k| k.token())
            .collect();
        assert_eq!(flats, vec!["C", "Gb", "Db", "Ab", "Eb", "Bb", "F"]);
    }

    #[test]
    fn test_spell_without_key_uses_sharps() {
        assert_eq!(spell(pc(1), None), "C#");
        assert_eq!(spell(pc(10), None), "A#");
        assert_eq!(spell(pc(0), None), "C");
    }

    #[test]
    fn test_spell_with_key() {
        assert_eq!(spell(pc(3), Some(KeySignature::E)), "D#");
        assert_eq!(spell(pc(3), Some(KeySignature::EFlat)), "Eb");
        assert_eq!(spell(pc(1), Some(KeySignature::C)), "Db");
        assert_eq!(spell(pc(6), Some(KeySignature::FSharp)), "F#");
        assert_eq!(spell(pc(6), Some(KeySignature::GFlat)), "Gb");
    }

    #[test]
    fn test_naturals_are_shared() {
        for v in [0, 2, 4, 5, 7, 9, 11] {
            assert_eq!(Spelling::Sharps.name(pc(v)), Spelling::Flats.name(pc(v)));
        }
    }
}
