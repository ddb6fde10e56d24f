// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chordie::midi::{print_sources, MidiInput};
use chordie::music::{note_name_with_octave, parse_note, KeySignature};
use chordie::{ChordMonitor, Settings};

fn print_usage() {
    println!("chordie - Real-time chord names for MIDI keyboards");
    println!();
    println!("Usage: chordie [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --list-sources          List available MIDI sources (inputs)");
    println!("  --detect <NOTE>...      Name the chord formed by NOTEs (60, C4, Eb3, ...)");
    println!("  --monitor <N|NAME>      Name chords played on MIDI source N or NAME");
    println!("  --help                  Show this help message");
    println!();
    println!("Options:");
    println!("  --key <KEY>             Spell for key signature KEY (C, G, D, ..., Bb, F)");
    println!("  --enforce-root          Treat the lowest note as the root");
    println!("  --config <FILE>         Load settings from FILE (YAML, or TOML by extension)");
    println!();
    println!("Set RUST_LOG=debug to see how each chord was resolved.");
}

enum Command {
    ListSources,
    Detect(Vec<String>),
    Monitor(Option<String>),
    Help,
}

struct Options {
    command: Option<Command>,
    key: Option<String>,
    enforce_root: bool,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        command: None,
        key: None,
        enforce_root: false,
        config: None,
    };

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list-sources" => options.command = Some(Command::ListSources),
            "--detect" => {
                let mut notes = Vec::new();
                while let Some(next) = iter.next_if(|a| !a.starts_with("--")) {
                    notes.push(next.clone());
                }
                if notes.is_empty() {
                    return Err(anyhow!("--detect requires at least one note"));
                }
                options.command = Some(Command::Detect(notes));
            }
            "--monitor" => {
                let source = iter.next_if(|a| !a.starts_with("--")).cloned();
                options.command = Some(Command::Monitor(source));
            }
            "--key" => {
                let key = iter
                    .next()
                    .ok_or_else(|| anyhow!("--key requires a key signature"))?;
                options.key = Some(key.clone());
            }
            "--enforce-root" => options.enforce_root = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => options.command = Some(Command::Help),
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

/// File settings with command-line overrides applied
fn load_settings(options: &Options) -> Result<Settings> {
    let mut settings = match &options.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if options.key.is_some() {
        settings.detector.key = options.key.clone();
    }
    if options.enforce_root {
        settings.detector.enforce_root = true;
    }
    Ok(settings)
}

fn detect(settings: &Settings, tokens: &[String]) -> Result<()> {
    let notes = tokens
        .iter()
        .map(|t| parse_note(t).with_context(|| format!("Bad note: {}", t)))
        .collect::<Result<Vec<_>>>()?;

    let resolution = settings.detector().resolve(&notes);
    println!("{}", resolution.label);
    info!("Resolved via {:?}", resolution.kind);
    Ok(())
}

fn open_input(source: &str) -> Result<MidiInput> {
    let input = match source.parse::<usize>() {
        Ok(index) => MidiInput::new(index),
        Err(_) => MidiInput::find(source),
    };
    input.with_context(|| format!("Could not open MIDI source {:?}", source))
}

fn monitor_input(settings: &Settings, source: &str) -> Result<()> {
    println!("Connecting to MIDI source {}...", source);
    let input = open_input(source)?;
    let key = settings.detector.key.as_deref().and_then(KeySignature::parse);

    let mut monitor = ChordMonitor::new(settings.detector())
        .with_debounce(settings.display.debounce())
        .with_channel(settings.midi.channel_filter());

    println!("Listening on {} (press Ctrl+C to stop)...", input.port_name());
    println!();

    loop {
        for msg in input.recv_all() {
            monitor.handle(&msg, Instant::now());
        }

        if let Some(update) = monitor.poll(Instant::now()) {
            if settings.display.show_notes && !update.notes.is_empty() {
                let names: Vec<String> = update
                    .notes
                    .iter()
                    .map(|&n| note_name_with_octave(n, key))
                    .collect();
                println!("{:<16} [{}]", update.label, names.join(" "));
            } else {
                println!("{}", update.label);
            }
        }

        // Small sleep to prevent busy-waiting
        thread::sleep(Duration::from_millis(1));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("chordie - Real-time chord names for MIDI keyboards");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    let settings = load_settings(&options)?;

    match options.command {
        Some(Command::ListSources) => {
            print_sources()?;
        }
        Some(Command::Detect(tokens)) => {
            detect(&settings, &tokens)?;
        }
        Some(Command::Monitor(source)) => {
            let Some(source) = source.or_else(|| settings.midi.device.clone()) else {
                eprintln!("Error: --monitor requires a source number or name");
                eprintln!("Use --list-sources to see available sources");
                std::process::exit(1);
            };
            monitor_input(&settings, &source)?;
        }
        Some(Command::Help) => {
            print_usage();
        }
        None => {
            eprintln!("Error: no command given");
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
