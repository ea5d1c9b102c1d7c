//! Headless runner for the fish school.
//!
//! Drives the same [`School`] the browser front-end renders, frame by frame,
//! without a canvas. Useful for tuning settings and for checking that a
//! configuration produces a coherent school.

use anyhow::{Context, Result};
use clap::Parser;
use fish_core::{Bounds, PointerState, School, Vector2};
use fish_shared::{FrameSnapshot, SchoolSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Headless fish school simulation", long_about = None)]
pub struct Args {
    /// World width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// World height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Population size, shill included (overrides the settings file)
    #[arg(short = 'n', long)]
    pub fish_count: Option<usize>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    pub frames: u64,

    /// Seed for the initial positions and headings
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with school settings; missing fields take defaults
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Hold the pointer at X,Y for the whole run
    #[arg(short, long, value_parser = parse_pointer)]
    pub pointer: Option<Vector2>,

    /// Log a summary every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    pub snapshot_every: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Parses `X,Y` into a pointer position.
pub fn parse_pointer(value: &str) -> Result<Vector2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Vector2::new(x, y))
}

/// Loads the settings file (if any), applies command-line overrides and
/// validates the result.
pub fn load_settings(args: &Args) -> Result<SchoolSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            SchoolSettings::from_json(&json)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        }
        None => SchoolSettings::default(),
    };

    if let Some(count) = args.fish_count {
        settings.fish_count = count;
    }

    settings.validate().context("Invalid school settings")?;
    Ok(settings)
}

/// Summary line logged every `snapshot_every` frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub polarization: f32,
    pub centroid: Vector2,
    pub preview_len: usize,
}

pub struct Runner {
    school: School,
    pointer: PointerState,
    frame: u64,
}

impl Runner {
    pub fn new(args: &Args, settings: &SchoolSettings) -> Result<Self> {
        if !(args.width > 0.0 && args.height > 0.0) {
            anyhow::bail!("World size must be positive, got {}x{}", args.width, args.height);
        }

        let bounds = Bounds::new(args.width, args.height);
        let config = settings.to_config();
        let school = match args.seed {
            Some(seed) => School::with_rng(&mut StdRng::seed_from_u64(seed), bounds, config),
            None => School::new(bounds, config),
        };

        let mut pointer = PointerState::inactive();
        if let Some(target) = args.pointer {
            pointer.move_to(target.x, target.y);
        }

        log::info!(
            "School of {} fish in {}x{}, pointer {:?}",
            school.len(),
            args.width,
            args.height,
            pointer.target()
        );

        Ok(Self {
            school,
            pointer,
            frame: 0,
        })
    }

    pub fn school(&self) -> &School {
        &self.school
    }

    /// One frame: preview first, then the tick. Returns the preview length.
    pub fn step(&mut self) -> usize {
        let preview_len = self.school.preview_len(&self.pointer);
        self.school.tick(&self.pointer);
        self.frame += 1;
        preview_len
    }

    pub fn stats(&self, preview_len: usize) -> FrameStats {
        FrameStats {
            frame: self.frame,
            polarization: self.school.polarization(),
            centroid: self.school.centroid(),
            preview_len,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let preview = self.school.preview(&self.pointer);
        FrameSnapshot::capture(self.frame, &self.school.fish, preview.as_ref())
    }

    /// Runs `frames` frames, logging a summary every `snapshot_every` frames.
    pub fn run(&mut self, frames: u64, snapshot_every: u64) -> FrameSnapshot {
        log::info!("Running {} frames...", frames);

        for _ in 0..frames {
            let preview_len = self.step();
            if snapshot_every > 0 && self.frame % snapshot_every == 0 {
                let stats = self.stats(preview_len);
                log::info!(
                    "Frame {}: polarization {:.3}, centroid ({:.1}, {:.1}), preview {} steps",
                    stats.frame,
                    stats.polarization,
                    stats.centroid.x,
                    stats.centroid.y,
                    stats.preview_len
                );
            }
        }

        log::debug!("Finished after {} frames", self.frame);
        self.snapshot()
    }
}

/// Loads settings, builds the school and runs it to completion.
pub fn run(args: &Args) -> Result<FrameSnapshot> {
    let settings = load_settings(args)?;
    let mut runner = Runner::new(args, &settings).context("Failed to initialize school")?;
    Ok(runner.run(args.frames, args.snapshot_every))
}
