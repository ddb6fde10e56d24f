// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI input layer.
//!
//! Raw bytes arrive on the midir callback thread, are parsed into
//! [`MidiMessage`]s and handed to the caller over a channel. [`HeldNotes`]
//! folds those messages into the set of keys currently down.

pub mod held;
pub mod input;

pub use held::HeldNotes;
pub use input::{find_source, list_sources, print_sources, MidiInput, MidiMessage};

/// MIDI message constants
pub mod messages {
    // Channel Voice Messages (upper nibble, lower nibble is channel 0-15)
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const CONTROL_CHANGE: u8 = 0xB0;
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    pub const PITCH_BEND: u8 = 0xE0;

    // Channel Mode controller numbers
    pub const ALL_SOUND_OFF: u8 = 120;
    pub const ALL_NOTES_OFF: u8 = 123;
}
