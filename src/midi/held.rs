// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tracks which keys are currently down.

use std::collections::BTreeSet;

use super::input::MidiMessage;
use super::messages;
use crate::music::MidiNote;

/// The set of notes currently held, optionally restricted to one channel
#[derive(Debug, Clone, Default)]
pub struct HeldNotes {
    notes: BTreeSet<MidiNote>,
    /// Only messages on this channel (0-15) are applied
    channel: Option<u8>,
}

impl HeldNotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only follow messages on `channel` (0-15)
    pub fn with_channel(channel: Option<u8>) -> Self {
        Self {
            notes: BTreeSet::new(),
            channel,
        }
    }

    /// Apply a message; returns true if the held set changed
    pub fn apply(&mut self, message: &MidiMessage) -> bool {
        if let (Some(filter), Some(channel)) = (self.channel, message.channel()) {
            if filter != channel {
                return false;
            }
        }

        match *message {
            MidiMessage::NoteOn { note, .. } => self.notes.insert(note),
            MidiMessage::NoteOff { note, .. } => self.notes.remove(&note),
            MidiMessage::ControlChange { controller, .. }
                if controller == messages::ALL_SOUND_OFF
                    || controller == messages::ALL_NOTES_OFF =>
            {
                let changed = !self.notes.is_empty();
                self.notes.clear();
                changed
            }
            _ => false,
        }
    }

    /// Held notes, ascending
    pub fn notes(&self) -> Vec<MidiNote> {
        self.notes.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }
}
