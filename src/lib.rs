// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! chordie - real-time chord naming for MIDI keyboards.
//!
//! Hold some keys, get a name: the [`chord`] module resolves any set of MIDI
//! note numbers to a conventional chord symbol ("Cmaj9", "Am7/G",
//! "C7(b9,#11)"), spelled with sharps or flats to suit a key signature.
//! Around it sit a [`midi`] input layer, a debounced [`monitor`] and a
//! [`config`] file format used by the `chordie` binary.

pub mod chord;
pub mod config;
pub mod error;
pub mod midi;
pub mod monitor;
pub mod music;

pub use chord::{detect_chord, ChordDetector, Resolution, ResolutionKind};
pub use config::Settings;
pub use error::{ChordieError, Result};
pub use monitor::{ChordMonitor, ChordUpdate};
pub use music::{KeySignature, MidiNote};
