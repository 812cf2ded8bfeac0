// ABOUTME: Replays recorded landmark frames through the form coach pipeline
// ABOUTME: Reads JSON-lines frames and prints per-frame repetition state and form results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Landmark replay tool.
//!
//! Each input line is one frame:
//!
//! ```json
//! {"timestamp_ms": 1700000000000, "landmarks": [{"name": "left_knee", "x": 0.5, "y": 0.6, "visibility": 0.9}]}
//! ```
//!
//! Usage:
//! ```bash
//! # Replay a squat recording, one JSON report per frame
//! cargo run --bin form-coach-replay -- --exercise squats --frames squats.jsonl
//!
//! # Use a custom exercise catalog and print only the final summary
//! cargo run --bin form-coach-replay -- --exercise planks --frames plank.jsonl \
//!     --catalog my_exercises.json --summary
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use form_coach::config::CoachConfig;
use form_coach::intelligence::{ExerciseCatalog, ExerciseSession};
use form_coach::logging::LoggingConfig;
use form_coach::models::{
    ExerciseProfile, ExerciseType, FormAnalysisResult, Landmark, RepetitionState,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "form-coach-replay",
    about = "Form Coach landmark replay",
    long_about = "Feed recorded pose landmarks through smoothing, repetition counting, and form scoring"
)]
struct ReplayArgs {
    /// Exercise to analyze (e.g. squats, push_ups, lunges, planks)
    #[arg(long)]
    exercise: ExerciseType,

    /// JSON-lines file of frames
    #[arg(long)]
    frames: PathBuf,

    /// Exercise catalog JSON (defaults to the bundled library)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print only the final summary instead of one report per frame
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One recorded input frame
#[derive(Deserialize)]
struct FrameRecord {
    timestamp_ms: i64,
    landmarks: Vec<Landmark>,
}

/// One output line per frame
#[derive(Serialize)]
struct FrameOutput<'a> {
    frame: usize,
    timestamp: DateTime<Utc>,
    repetition: &'a RepetitionState,
    form: &'a FormAnalysisResult,
}

/// Final session summary
#[derive(Serialize)]
struct ReplaySummary {
    exercise: ExerciseType,
    frames: usize,
    rep_count: u32,
    valid_rep_count: u32,
    set_count: u32,
    average_score: f64,
    incorrect_frames: usize,
}

fn main() -> Result<()> {
    let args = ReplayArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = CoachConfig::load().context("Invalid coach configuration")?;
    let catalog = match &args.catalog {
        Some(path) => ExerciseCatalog::from_path(path)?,
        None => ExerciseCatalog::builtin()?,
    };
    let profile = catalog.get(args.exercise)?;

    let input = File::open(&args.frames)
        .with_context(|| format!("Failed to open frames file {}", args.frames.display()))?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = replay(&args, profile, &config, BufReader::new(input), &mut out)?;

    if args.summary {
        serde_json::to_writer(&mut out, &summary)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        frames = summary.frames,
        rep_count = summary.rep_count,
        average_score = summary.average_score,
        "Replay finished"
    );
    Ok(())
}

fn replay(
    args: &ReplayArgs,
    profile: &ExerciseProfile,
    config: &CoachConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<ReplaySummary> {
    let mut session: Option<ExerciseSession> = None;
    let mut frames = 0_usize;
    let mut total_score = 0.0;
    let mut incorrect_frames = 0_usize;

    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: FrameRecord = serde_json::from_str(&line)
            .with_context(|| format!("Malformed frame on line {}", line_no + 1))?;
        let Some(timestamp) = DateTime::from_timestamp_millis(record.timestamp_ms) else {
            warn!(line = line_no + 1, "Skipping frame with out-of-range timestamp");
            continue;
        };

        // The session clock starts at the first frame
        let active = session
            .get_or_insert_with(|| ExerciseSession::new(profile.clone(), config, timestamp));

        let report = active.process_frame(&record.landmarks, timestamp);
        frames += 1;
        total_score += report.form.score;
        if !report.form.is_correct {
            incorrect_frames += 1;
        }

        if !args.summary {
            serde_json::to_writer(
                &mut *out,
                &FrameOutput {
                    frame: frames,
                    timestamp,
                    repetition: &report.repetition,
                    form: &report.form,
                },
            )?;
            writeln!(out)?;
        }
    }

    let (rep_count, valid_rep_count, set_count) = session.as_ref().map_or((0, 0, 1), |s| {
        let state = s.state();
        (state.rep_count, state.valid_rep_count, state.set_count)
    });

    let average_score = if frames == 0 {
        0.0
    } else {
        total_score / frames as f64
    };

    Ok(ReplaySummary {
        exercise: args.exercise,
        frames,
        rep_count,
        valid_rep_count,
        set_count,
        average_score,
        incorrect_frames,
    })
}
