// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI input from keyboards and controllers.
//!
//! This module parses raw MIDI bytes and connects to input ports through
//! midir. Parsed messages are forwarded from the midir callback thread over
//! an mpsc channel and drained by the caller with [`MidiInput::try_recv`].

use std::sync::mpsc::{self, Receiver, Sender};

use midir::{Ignore, MidiInputConnection, MidiInputPort};
use tracing::{debug, info};

use super::messages;
use crate::error::{ChordieError, Result};

const CLIENT_NAME: &str = "chordie";

/// Parsed MIDI message types
#[derive(Debug, Clone, PartialEq)]
pub enum MidiMessage {
    /// Note On: channel (0-15), note (0-127), velocity (1-127)
    NoteOn { channel: u8, note: u8, velocity: u8 },
    /// Note Off: channel (0-15), note (0-127), velocity (0-127)
    NoteOff { channel: u8, note: u8, velocity: u8 },
    /// Control Change: channel (0-15), controller (0-127), value (0-127)
    ControlChange { channel: u8, controller: u8, value: u8 },
    /// Program Change: channel (0-15), program (0-127)
    ProgramChange { channel: u8, program: u8 },
    /// Pitch Bend: channel (0-15), value (-8192 to 8191)
    PitchBend { channel: u8, value: i16 },
    /// Anything chordie does not act on
    Unknown(Vec<u8>),
}

impl MidiMessage {
    /// Parse raw MIDI bytes into a MidiMessage
    pub fn parse(data: &[u8]) -> Option<Self> {
        let (&status, rest) = data.split_first()?;

        let msg_type = status & 0xF0;
        let channel = status & 0x0F;

        match (msg_type, rest) {
            (messages::NOTE_OFF, [note, velocity, ..]) => Some(MidiMessage::NoteOff {
                channel,
                note: note & 0x7F,
                velocity: velocity & 0x7F,
            }),
            (messages::NOTE_ON, [note, velocity, ..]) => {
                let note = note & 0x7F;
                let velocity = velocity & 0x7F;
                // Note On with velocity 0 is equivalent to Note Off
                if velocity == 0 {
                    Some(MidiMessage::NoteOff {
                        channel,
                        note,
                        velocity: 0,
                    })
                } else {
                    Some(MidiMessage::NoteOn {
                        channel,
                        note,
                        velocity,
                    })
                }
            }
            (messages::CONTROL_CHANGE, [controller, value, ..]) => {
                Some(MidiMessage::ControlChange {
                    channel,
                    controller: controller & 0x7F,
                    value: value & 0x7F,
                })
            }
            (messages::PROGRAM_CHANGE, [program, ..]) => Some(MidiMessage::ProgramChange {
                channel,
                program: program & 0x7F,
            }),
            (messages::PITCH_BEND, [lsb, msb, ..]) => {
                let value = (((*msb as i16 & 0x7F) << 7) | (*lsb as i16 & 0x7F)) - 8192;
                Some(MidiMessage::PitchBend { channel, value })
            }
            _ => Some(MidiMessage::Unknown(data.to_vec())),
        }
    }

    /// Channel (0-15) for channel voice messages
    pub fn channel(&self) -> Option<u8> {
        match self {
            MidiMessage::NoteOn { channel, .. }
            | MidiMessage::NoteOff { channel, .. }
            | MidiMessage::ControlChange { channel, .. }
            | MidiMessage::ProgramChange { channel, .. }
            | MidiMessage::PitchBend { channel, .. } => Some(*channel),
            MidiMessage::Unknown(_) => None,
        }
    }
}

/// MIDI Input handler using midir
pub struct MidiInput {
    _connection: MidiInputConnection<()>,
    port_name: String,
    receiver: Receiver<MidiMessage>,
}

impl MidiInput {
    /// Connect to the input port at `source_index` (as listed by [`list_sources`])
    pub fn new(source_index: usize) -> Result<Self> {
        let midi_in = open_client()?;
        let port = midi_in
            .ports()
            .into_iter()
            .nth(source_index)
            .ok_or(ChordieError::SourceNotFound(source_index))?;
        Self::connect(midi_in, &port)
    }

    /// Connect to the first input port whose name contains `fragment`
    /// (case-insensitive)
    pub fn find(fragment: &str) -> Result<Self> {
        let index = find_source(fragment)?;
        Self::new(index)
    }

    fn connect(midi_in: midir::MidiInput, port: &MidiInputPort) -> Result<Self> {
        let port_name = midi_in
            .port_name(port)
            .map_err(|e| ChordieError::ConnectionFailed(e.to_string()))?;

        let (tx, rx): (Sender<MidiMessage>, Receiver<MidiMessage>) = mpsc::channel();

        let connection = midi_in
            .connect(
                port,
                "chordie-input",
                move |_timestamp_us, data, _| {
                    if let Some(msg) = MidiMessage::parse(data) {
                        // Receiver gone means we are shutting down
                        let _ = tx.send(msg);
                    }
                },
                (),
            )
            .map_err(|e| ChordieError::ConnectionFailed(e.to_string()))?;

        info!("Opened MIDI input: {}", port_name);

        Ok(Self {
            _connection: connection,
            port_name,
            receiver: rx,
        })
    }

    /// Name of the connected port
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Try to receive the next MIDI message (non-blocking)
    pub fn try_recv(&self) -> Option<MidiMessage> {
        self.receiver.try_recv().ok()
    }

    /// Receive all pending MIDI messages
    pub fn recv_all(&self) -> Vec<MidiMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = self.try_recv() {
            messages.push(msg);
        }
        messages
    }
}

impl Drop for MidiInput {
    fn drop(&mut self) {
        info!("Closed MIDI input: {}", self.port_name);
    }
}

fn open_client() -> Result<midir::MidiInput> {
    let mut midi_in =
        midir::MidiInput::new(CLIENT_NAME).map_err(|e| ChordieError::MidiInit(e.to_string()))?;
    // Chords only need channel messages
    midi_in.ignore(Ignore::All);
    Ok(midi_in)
}

/// List all available MIDI sources
pub fn list_sources() -> Result<Vec<(usize, String)>> {
    let midi_in = open_client()?;
    let sources = midi_in
        .ports()
        .iter()
        .enumerate()
        .map(|(i, port)| {
            let name = midi_in
                .port_name(port)
                .unwrap_or_else(|_| format!("Unknown {}", i));
            (i, name)
        })
        .collect();
    Ok(sources)
}

/// Index of the first source whose name contains `fragment` (case-insensitive)
pub fn find_source(fragment: &str) -> Result<usize> {
    let needle = fragment.to_lowercase();
    let sources = list_sources()?;
    debug!("Searching {} MIDI sources for {:?}", sources.len(), fragment);
    sources
        .into_iter()
        .find(|(_, name)| name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .ok_or_else(|| ChordieError::DeviceNotFound(fragment.to_string()))
}

/// Print all available MIDI sources to stdout
pub fn print_sources() -> Result<()> {
    let sources = list_sources()?;
    if sources.is_empty() {
        println!("No MIDI sources found.");
    } else {
        println!("Available MIDI sources (inputs):");
        for (i, name) in sources {
            println!("  {}: {}", i, name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_on() {
        let msg = MidiMessage::parse(&[0x90, 60, 100]);
        assert_eq!(
            msg,
            Some(MidiMessage::NoteOn {
                channel: 0,
                note: 60,
                velocity: 100
            })
        );
    }

    #[test]
    fn test_parse_note_on_velocity_zero() {
        // Note On with velocity 0 should be treated as Note Off
        let msg = MidiMessage::parse(&[0x93, 60, 0]);
        assert_eq!(
            msg,
            Some(MidiMessage::NoteOff {
                channel: 3,
                note: 60,
                velocity: 0
            })
        );
    }

    #[test]
    fn test_parse_note_off() {
        let msg = MidiMessage::parse(&[0x80, 60, 64]);
        assert_eq!(
            msg,
            Some(MidiMessage::NoteOff {
                channel: 0,
                note: 60,
                velocity: 64
            })
        );
    }

    #[test]
    fn test_parse_all_notes_off() {
        let msg = MidiMessage::parse(&[0xB0, 123, 0]);
        assert_eq!(
            msg,
            Some(MidiMessage::ControlChange {
                channel: 0,
                controller: messages::ALL_NOTES_OFF,
                value: 0
            })
        );
    }

    #[test]
    fn test_parse_program_change() {
        let msg = MidiMessage::parse(&[0xC0, 5]);
        assert_eq!(
            msg,
            Some(MidiMessage::ProgramChange {
                channel: 0,
                program: 5
            })
        );
    }

    #[test]
    fn test_parse_pitch_bend() {
        // Center position (0)
        let msg = MidiMessage::parse(&[0xE0, 0x00, 0x40]);
        assert_eq!(
            msg,
            Some(MidiMessage::PitchBend {
                channel: 0,
                value: 0
            })
        );
        let msg = MidiMessage::parse(&[0xE0, 0x7F, 0x7F]);
        assert_eq!(
            msg,
            Some(MidiMessage::PitchBend {
                channel: 0,
                value: 8191
            })
        );
    }

    #[test]
    fn test_parse_truncated_and_empty() {
        assert_eq!(MidiMessage::parse(&[]), None);
        assert_eq!(
            MidiMessage::parse(&[0x90, 60]),
            Some(MidiMessage::Unknown(vec![0x90, 60]))
        );
        assert_eq!(
            MidiMessage::parse(&[0xF8]),
            Some(MidiMessage::Unknown(vec![0xF8]))
        );
    }

    #[test]
    fn test_channel() {
        let msg = MidiMessage::parse(&[0x9F, 60, 100]).unwrap();
        assert_eq!(msg.channel(), Some(15));
        assert_eq!(MidiMessage::Unknown(vec![0xF8]).channel(), None);
    }

    #[test]
    #[ignore = "requires MIDI hardware or a virtual MIDI backend"]
    fn test_list_sources() {
        let sources = list_sources().unwrap();
        println!("Found {} sources", sources.len());
    }
}
