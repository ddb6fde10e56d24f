// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Turn an accepted chord match into its display label.

use crate::music::{spell, KeySignature, PitchClass, PitchClassSet};

use super::analyzer::ChordMatch;

/// Separator between parenthesized extensions, e.g. "C7(b9,#11)"
pub const EXTENSION_SEPARATOR: &str = ",";

/// Extension written for a tone `distance` semitones above the root
pub fn extension_symbol(distance: u8) -> Option<&'static str> {
    match distance {
        1 => Some("b9"),
        2 => Some("9"),
        3 => Some("#9"),
        5 => Some("11"),
        6 => Some("#11"),
        8 => Some("b13"),
        9 => Some("13"),
        10 => Some("7"),
        11 => Some("maj7"),
        _ => None,
    }
}

/// Ninth form of a seventh-chord suffix
fn ninth_form(symbol: &str) -> Option<&'static str> {
    match symbol {
        "7" => Some("9"),
        "maj7" => Some("maj9"),
        "m7" => Some("m9"),
        "m(maj7)" => Some("m(maj9)"),
        "7sus4" => Some("9sus4"),
        _ => None,
    }
}

/// Extensions for the tones the match leaves unexplained, lowest first
fn extensions(best: &ChordMatch, pitch_classes: PitchClassSet) -> Vec<&'static str> {
    let mut distances: Vec<u8> = pitch_classes
        .difference(best.matched_pitch_classes())
        .iter()
        .map(|pc| best.root.interval_to(pc))
        .collect();
    distances.sort_unstable();
    distances.into_iter().filter_map(extension_symbol).collect()
}

/// Build the label for an accepted match.
///
/// Unexplained tones become parenthesized extensions. A stray 9th on a
/// seventh chord is folded into the suffix (C7 + D = C9); suffixes with no
/// ninth form simply drop it (Bm7b5 + C# = Bm7b5). A bass that is not the
/// root is written after a slash.
pub fn build_chord_name(
    best: &ChordMatch,
    pitch_classes: PitchClassSet,
    bass: PitchClass,
    key: Option<KeySignature>,
) -> String {
    let mut symbol = best.template.symbol;
    let mut extensions = extensions(best, pitch_classes);

    if symbol.contains('7') {
        if let Some(pos) = extensions.iter().position(|&e| e == "9") {
            extensions.remove(pos);
            if let Some(upgraded) = ninth_form(symbol) {
                symbol = upgraded;
            }
        }
    }

    let mut name = format!("{}{}", spell(best.root, key), symbol);
    if !extensions.is_empty() {
        name.push('(');
        name.push_str(&extensions.join(EXTENSION_SEPARATOR));
        name.push(')');
    }
    if bass != best.root {
        name.push('/');
        name.push_str(spell(bass, key));
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::analyzer::score_match;
    use crate::chord::template::find;

    fn set(pcs: &[u8]) -> PitchClassSet {
        pcs.iter().map(|&v| PitchClass::new(v)).collect()
    }

    fn pc(v: u8) -> PitchClass {
        PitchClass::new(v)
    }

    fn name(root: u8, symbol: &str, pcs: &[u8], bass: u8, key: Option<KeySignature>) -> String {
        let pcs = set(pcs);
        let m = score_match(pc(root), find(symbol).unwrap(), pcs).unwrap();
        build_chord_name(&m, pcs, pc(bass), key)
    }

    #[test]
    fn test_extension_table() {
        assert_eq!(extension_symbol(1), Some("b9"));
        assert_eq!(extension_symbol(6), Some("#11"));
        assert_eq!(extension_symbol(11), Some("maj7"));
        assert_eq!(extension_symbol(0), None);
        assert_eq!(extension_symbol(4), None);
        assert_eq!(extension_symbol(7), None);
    }

    #[test]
    fn test_plain_chord() {
        assert_eq!(name(0, "", &[0, 4, 7], 0, None), "C");
        assert_eq!(name(9, "m7", &[9, 0, 4, 7], 9, None), "Am7");
    }

    #[test]
    fn test_seventh_absorbs_ninth() {
        assert_eq!(name(0, "7", &[0, 4, 7, 10, 2], 0, None), "C9");
        assert_eq!(name(0, "maj7", &[0, 4, 7, 11, 2], 0, None), "Cmaj9");
        assert_eq!(name(9, "m7", &[9, 0, 4, 7, 11], 9, None), "Am9");
        assert_eq!(name(9, "m(maj7)", &[9, 0, 4, 8, 11], 9, None), "Am(maj9)");
        assert_eq!(name(7, "7sus4", &[7, 0, 2, 5, 9], 7, None), "G9sus4");
    }

    #[test]
    fn test_ninth_dropped_without_ninth_form() {
        assert_eq!(name(11, "m7b5", &[11, 2, 5, 9, 1], 11, None), "Bm7b5");
        assert_eq!(name(0, "7#5", &[0, 4, 8, 10, 2], 0, None), "C7#5");
        // Other extensions survive
        assert_eq!(name(0, "7b5", &[0, 4, 6, 10, 2, 9], 0, None), "C7b5(13)");
    }

    #[test]
    fn test_triad_keeps_ninth_as_extension() {
        assert_eq!(name(0, "", &[0, 4, 7, 2], 0, None), "C(9)");
    }

    #[test]
    fn test_extensions_sorted_by_distance() {
        assert_eq!(name(0, "7", &[0, 4, 7, 10, 1, 6], 0, None), "C7(b9,#11)");
        assert_eq!(name(0, "7", &[0, 4, 7, 10, 6, 2], 0, None), "C9(#11)");
    }

    #[test]
    fn test_undefined_distances_are_dropped() {
        // Major third over a minor triad has no extension name
        assert_eq!(name(9, "m", &[9, 0, 4, 1], 9, None), "Am");
    }

    #[test]
    fn test_slash_bass() {
        assert_eq!(name(0, "", &[0, 4, 7], 4, None), "C/E");
        assert_eq!(
            name(3, "", &[3, 7, 10], 10, Some(KeySignature::EFlat)),
            "Eb/Bb"
        );
        assert_eq!(name(3, "", &[3, 7, 10], 10, Some(KeySignature::G)), "D#/A#");
    }
}
