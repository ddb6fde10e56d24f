// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the fallible edges of chordie.
//!
//! The chord resolver itself is total and never returns an error. Errors only
//! arise when parsing user-supplied note names or talking to MIDI hardware.

use thiserror::Error;

/// Errors raised by note parsing and MIDI input handling
#[derive(Debug, Error)]
pub enum ChordieError {
    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),

    #[error("Note {0} is outside the MIDI range 0-127")]
    NoteOutOfRange(String),

    #[error("Failed to initialize MIDI: {0}")]
    MidiInit(String),

    #[error("MIDI source {0} not found")]
    SourceNotFound(usize),

    #[error("No MIDI source matching \"{0}\"")]
    DeviceNotFound(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result alias for chordie operations
pub type Result<T> = std::result::Result<T, ChordieError>;
