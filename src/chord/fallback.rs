// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Labels for pitch sets no template names convincingly.
//!
//! Tier 1 looks for complete triads hiding inside the set (a polychord such as
//! "C + D"). Tier 2 always succeeds: it picks the most plausible root and
//! lists every tone as an interval above it.

use crate::music::{spell, KeySignature, PitchClass, PitchClassSet};

/// The triad qualities tier 1 searches for, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriadQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl TriadQuality {
    pub const ALL: [TriadQuality; 4] = [
        TriadQuality::Major,
        TriadQuality::Minor,
        TriadQuality::Augmented,
        TriadQuality::Diminished,
    ];

    /// Semitones above the root
    pub fn intervals(self) -> [u8; 3] {
        match self {
            TriadQuality::Major => [0, 4, 7],
            TriadQuality::Minor => [0, 3, 7],
            TriadQuality::Augmented => [0, 4, 8],
            TriadQuality::Diminished => [0, 3, 6],
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TriadQuality::Major => "",
            TriadQuality::Minor => "m",
            TriadQuality::Augmented => "aug",
            TriadQuality::Diminished => "dim",
        }
    }
}

/// A triad found inside a pitch-class set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triad {
    pub root: PitchClass,
    pub quality: TriadQuality,
}

impl Triad {
    pub fn pitch_classes(self) -> PitchClassSet {
        self.quality
            .intervals()
            .iter()
            .map(|&i| self.root.transpose(i))
            .collect()
    }

    /// Whether all three tones sound in `pitch_classes`
    pub fn is_complete(self, pitch_classes: PitchClassSet) -> bool {
        pitch_classes.is_superset(self.pitch_classes())
    }

    pub fn name(self, key: Option<KeySignature>) -> String {
        format!("{}{}", spell(self.root, key), self.quality.symbol())
    }
}

/// Every complete triad in the set, by ascending root then quality
pub fn overlapping_triads(pitch_classes: PitchClassSet) -> Vec<Triad> {
    (0..12u8)
        .map(PitchClass::new)
        .flat_map(|root| {
            TriadQuality::ALL
                .iter()
                .map(move |&quality| Triad { root, quality })
        })
        .filter(|t| t.is_complete(pitch_classes))
        .collect()
}

/// Tier 1: "X + Y" for two or more triads, a lone complete triad bare
pub fn describe_triads(pitch_classes: PitchClassSet, key: Option<KeySignature>) -> Option<String> {
    match overlapping_triads(pitch_classes).as_slice() {
        [] => None,
        [only] => only
            .is_complete(pitch_classes)
            .then(|| only.name(key)),
        [first, second, ..] => Some(format!("{} + {}", first.name(key), second.name(key))),
    }
}

/// How strongly a tone at `distance` semitones suggests the root beneath it
pub fn interval_weight(distance: u8) -> u32 {
    match distance {
        0 => 10,
        7 => 9,
        3 | 4 => 8,
        10 | 11 => 6,
        2 | 9 => 4,
        5 => 3,
        _ => 1,
    }
}

/// Bonus for a candidate root that is also the lowest note
pub const BASS_ROOT_BONUS: u32 = 5;

/// Pick the most plausible root: the first highest-weighted pitch class in
/// ascending order, or the bass outright when the root is enforced
pub fn best_root(pitch_classes: PitchClassSet, enforce_root: bool, bass: PitchClass) -> PitchClass {
    if enforce_root {
        return bass;
    }

    let mut best = bass;
    let mut best_score = None;
    for root in pitch_classes.iter() {
        let mut score: u32 = pitch_classes
            .iter()
            .map(|pc| interval_weight(root.interval_to(pc)))
            .sum();
        if root == bass {
            score += BASS_ROOT_BONUS;
        }
        if best_score.map_or(true, |s| score > s) {
            best = root;
            best_score = Some(score);
        }
    }
    best
}

/// Interval name for a tone `distance` semitones above the root
pub fn interval_name(distance: u8) -> &'static str {
    const NAMES: [&str; 12] = ["R", "b2", "2", "b3", "3", "4", "b5", "5", "#5", "6", "b7", "7"];
    NAMES[(distance % 12) as usize]
}

/// Tier 2: "C(R b2 2 b3)"-style listing, ascending by pitch class
pub fn interval_analysis(
    pitch_classes: PitchClassSet,
    root: PitchClass,
    key: Option<KeySignature>,
) -> String {
    let intervals: Vec<&str> = pitch_classes
        .iter()
        .map(|pc| interval_name(root.interval_to(pc)))
        .collect();
    format!("{}({})", spell(root, key), intervals.join(" "))
}
