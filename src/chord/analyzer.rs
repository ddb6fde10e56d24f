// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Candidate analysis: score every (root, template) pair against a pitch-class
//! set and rank the survivors.

use std::cmp::Ordering;

use tracing::trace;

use crate::music::{PitchClass, PitchClassSet};

use super::template::{templates, ChordTemplate};

/// Exactness lost per input note the template does not explain
pub const EXTRA_NOTE_PENALTY: f64 = 0.2;

/// Scores closer than this are considered tied
pub const SCORE_TOLERANCE: f64 = 1.0;

/// Coverage gap needed to break a score tie
pub const COVERAGE_TOLERANCE: f64 = 0.1;

/// One template laid over one candidate root
#[derive(Debug, Clone, PartialEq)]
pub struct ChordMatch {
    pub root: PitchClass,
    pub template: &'static ChordTemplate,
    /// Template intervals present in the input, in template order
    pub matched_intervals: Vec<u8>,
    /// Fraction of the template present (0.0 - 1.0)
    pub coverage: f64,
    /// Penalty factor for unexplained input notes (0.0 - 1.0)
    pub exactness: f64,
    pub score: f64,
}

impl ChordMatch {
    /// Pitch classes of the matched chord tones
    pub fn matched_pitch_classes(&self) -> PitchClassSet {
        self.matched_intervals
            .iter()
            .map(|&i| self.root.transpose(i))
            .collect()
    }
}

/// Score one template at one root, or `None` if its coverage is too low
pub fn score_match(
    root: PitchClass,
    template: &'static ChordTemplate,
    pitch_classes: PitchClassSet,
) -> Option<ChordMatch> {
    let matched_intervals: Vec<u8> = template
        .intervals
        .iter()
        .copied()
        .filter(|&i| pitch_classes.contains(root.transpose(i)))
        .collect();

    let coverage = matched_intervals.len() as f64 / template.intervals.len() as f64;
    if coverage < template.coverage.minimum() {
        return None;
    }

    let extra_notes = pitch_classes.len().saturating_sub(matched_intervals.len());
    let exactness = (1.0 - extra_notes as f64 * EXTRA_NOTE_PENALTY).max(0.0);
    let score = coverage * template.priority as f64 * exactness;

    Some(ChordMatch {
        root,
        template,
        matched_intervals,
        coverage,
        exactness,
        score,
    })
}

/// Ranking comparator; `Less` means `a` is the better candidate.
///
/// Keys, in order: score (ties within 1.0), coverage (ties within 0.1),
/// template priority, then whether the candidate is rooted on the bass.
/// Because of the tolerances this is not a strict weak ordering, so it is
/// only ever used by [`rank`].
pub fn compare_matches(a: &ChordMatch, b: &ChordMatch, bass: PitchClass) -> Ordering {
    if (a.score - b.score).abs() >= SCORE_TOLERANCE {
        return b.score.total_cmp(&a.score);
    }
    if (a.coverage - b.coverage).abs() >= COVERAGE_TOLERANCE {
        return b.coverage.total_cmp(&a.coverage);
    }
    b.template
        .priority
        .cmp(&a.template.priority)
        .then_with(|| (b.root == bass).cmp(&(a.root == bass)))
}

/// Stable insertion sort with [`compare_matches`].
///
/// A candidate only moves ahead of one that compares strictly worse, so
/// fully tied candidates keep generation order.
pub fn rank(matches: &mut Vec<ChordMatch>, bass: PitchClass) {
    for i in 1..matches.len() {
        let mut j = i;
        while j > 0 && compare_matches(&matches[j - 1], &matches[j], bass) == Ordering::Greater {
            matches.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Score every template at every candidate root and return them ranked.
///
/// With `enforce_root` the only candidate root is the bass; otherwise every
/// pitch class present is tried, in ascending order.
pub fn analyze(
    pitch_classes: PitchClassSet,
    enforce_root: bool,
    bass: PitchClass,
) -> Vec<ChordMatch> {
    let roots: Vec<PitchClass> = if enforce_root {
        vec![bass]
    } else {
        pitch_classes.iter().collect()
    };

    let mut matches: Vec<ChordMatch> = roots
        .iter()
        .flat_map(|&root| {
            templates()
                .iter()
                .filter_map(move |t| score_match(root, t, pitch_classes))
        })
        .collect();

    trace!(
        "{} candidates from {} roots for {:012b}",
        matches.len(),
        roots.len(),
        pitch_classes.bits()
    );

    rank(&mut matches, bass);
    matches
}
