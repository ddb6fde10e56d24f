// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for chordie
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - End-to-end detection for common and pathological voicings
//! - Candidate analysis alone
//! - Held-note bookkeeping for a stream of MIDI messages

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chordie::chord::analyze;
use chordie::midi::{HeldNotes, MidiMessage};
use chordie::music::{NoteSet, PitchClass};
use chordie::{ChordDetector, ChordMonitor};

const VOICINGS: &[(&str, &[u8])] = &[
    ("triad", &[60, 64, 67]),
    ("maj9", &[60, 64, 67, 71, 74]),
    ("slash_flat_key", &[46, 62, 65, 69]),
    ("cluster", &[60, 61, 62, 63]),
    ("chromatic", &[60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71]),
];

/// Benchmark the full detection path per voicing
fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let detector = ChordDetector::new().with_key_name(Some("Bb"));

    for (name, notes) in VOICINGS {
        group.bench_with_input(BenchmarkId::new("search_all_roots", name), notes, |b, notes| {
            b.iter(|| black_box(detector.detect(black_box(notes))))
        });
    }

    let enforced = detector.with_enforce_root(true);
    for (name, notes) in VOICINGS {
        group.bench_with_input(BenchmarkId::new("enforce_root", name), notes, |b, notes| {
            b.iter(|| black_box(enforced.detect(black_box(notes))))
        });
    }

    group.finish();
}

/// Benchmark candidate scoring and ranking without naming
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for (name, notes) in VOICINGS {
        let set = NoteSet::new(notes);
        let pcs = set.pitch_classes();
        let bass = set.bass_pitch_class().unwrap_or(PitchClass::C);
        group.bench_with_input(BenchmarkId::from_parameter(name), &pcs, |b, &pcs| {
            b.iter(|| black_box(analyze(black_box(pcs), false, bass).len()))
        });
    }

    group.finish();
}

/// Benchmark applying a burst of note on/off messages
fn bench_held_notes(c: &mut Criterion) {
    let messages: Vec<MidiMessage> = (0..128u8)
        .flat_map(|note| {
            [
                MidiMessage::NoteOn {
                    channel: 0,
                    note,
                    velocity: 100,
                },
                MidiMessage::NoteOff {
                    channel: 0,
                    note,
                    velocity: 0,
                },
            ]
        })
        .collect();

    c.bench_function("held_notes_apply_256", |b| {
        b.iter(|| {
            let mut held = HeldNotes::new();
            let mut changes = 0;
            for msg in &messages {
                if held.apply(black_box(msg)) {
                    changes += 1;
                }
            }
            black_box(changes)
        })
    });
}

/// Benchmark the monitor reacting to a rolled four-note chord
fn bench_monitor(c: &mut Criterion) {
    let rolled: Vec<MidiMessage> = [46u8, 62, 65, 69]
        .iter()
        .map(|&note| MidiMessage::NoteOn {
            channel: 0,
            note,
            velocity: 90,
        })
        .collect();

    c.bench_function("monitor_rolled_chord", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut monitor = ChordMonitor::new(ChordDetector::new());
            for msg in &rolled {
                monitor.handle(msg, t0);
            }
            black_box(monitor.poll(t0 + Duration::from_millis(30)))
        })
    });
}

criterion_group!(
    benches,
    bench_detect,
    bench_analyze,
    bench_held_notes,
    bench_monitor
);
criterion_main!(benches);
