// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for chordie.
//!
//! Settings live in a YAML file (or TOML, chosen by the `.toml` extension)
//! with three optional sections: how chords are detected, which MIDI device
//! to follow, and how the live display behaves.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chord::ChordDetector;

/// Root settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub midi: MidiDeviceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Settings {
    /// Load settings from a YAML file, or TOML if the extension is `.toml`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        parsed.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse settings from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save settings to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Build a chord detector from the detector section
    pub fn detector(&self) -> ChordDetector {
        ChordDetector::new()
            .with_enforce_root(self.detector.enforce_root)
            .with_key_name(self.detector.key.as_deref())
    }
}

/// Chord detection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectorConfig {
    /// Treat the lowest held note as the root
    #[serde(default)]
    pub enforce_root: bool,
    /// Key signature for spelling (e.g., "Eb", "F#")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// MIDI input settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MidiDeviceConfig {
    /// Input device name (or part of it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Only follow this MIDI channel (1-16)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_channel: Option<u8>,
}

impl MidiDeviceConfig {
    /// Zero-based channel filter; out-of-range values disable filtering
    pub fn channel_filter(&self) -> Option<u8> {
        match self.input_channel {
            Some(ch @ 1..=16) => Some(ch - 1),
            Some(ch) => {
                warn!("Ignoring input_channel {}, expected 1-16", ch);
                None
            }
            None => None,
        }
    }
}

/// Live display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// How long held notes must be stable before the label updates
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Print the held note names next to the chord
    #[serde(default = "default_show_notes")]
    pub show_notes: bool,
}

fn default_debounce_ms() -> u64 {
    30
}
fn default_show_notes() -> bool {
    true
}

impl DisplayConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            show_notes: default_show_notes(),
        }
    }
}
