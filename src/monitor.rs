// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Live chord monitoring.
//!
//! [`ChordMonitor`] folds incoming MIDI messages into the held-note set and
//! publishes a new label once the held notes have stopped changing for the
//! debounce interval. Rolled chords and sloppy releases therefore produce one
//! update instead of a flurry of partial ones.
//!
//! The monitor never reads the clock itself; callers pass `Instant`s in,
//! which keeps it deterministic under test.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::chord::ChordDetector;
use crate::midi::{HeldNotes, MidiMessage};
use crate::music::MidiNote;

/// Default time the held notes must stay unchanged before a label is published
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(30);

/// A newly published chord label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordUpdate {
    /// "" when every key has been released
    pub label: String,
    /// Held notes the label was computed from, ascending
    pub notes: Vec<MidiNote>,
}

#[derive(Debug, Clone)]
struct Pending {
    update: ChordUpdate,
    since: Instant,
}

/// Debounced held-notes to chord-label pipeline
#[derive(Debug, Clone)]
pub struct ChordMonitor {
    detector: ChordDetector,
    held: HeldNotes,
    debounce: Duration,
    pending: Option<Pending>,
    published: String,
}

impl ChordMonitor {
    pub fn new(detector: ChordDetector) -> Self {
        Self {
            detector,
            held: HeldNotes::new(),
            debounce: DEFAULT_DEBOUNCE,
            pending: None,
            published: String::new(),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Only follow messages on `channel` (0-15)
    pub fn with_channel(mut self, channel: Option<u8>) -> Self {
        self.held = HeldNotes::with_channel(channel);
        self
    }

    pub fn detector(&self) -> &ChordDetector {
        &self.detector
    }

    pub fn held(&self) -> &HeldNotes {
        &self.held
    }

    /// Label most recently returned by [`poll`](Self::poll)
    pub fn current_label(&self) -> &str {
        &self.published
    }

    /// Feed one message received at `now`
    pub fn handle(&mut self, message: &MidiMessage, now: Instant) {
        if !self.held.apply(message) {
            return;
        }

        let notes = self.held.notes();
        let label = self.detector.detect(&notes);
        debug!("Held {:?} -> {:?}", notes, label);

        // Every change restarts the debounce window
        self.pending = Some(Pending {
            update: ChordUpdate { label, notes },
            since: now,
        });
    }

    /// Publish the pending label if it has been stable long enough and
    /// differs from the last one published
    pub fn poll(&mut self, now: Instant) -> Option<ChordUpdate> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.since) >= self.debounce);
        if !ready {
            return None;
        }

        let Pending { update, .. } = self.pending.take()?;
        if update.label == self.published {
            return None;
        }
        self.published = update.label.clone();
        Some(update)
    }
}
