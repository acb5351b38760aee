// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `sprout`: command-line front end for `sprout-math`.
//!
//! # Usage
//! ```text
//! sprout [--precision N] [--json] [--log-level FILTER] [--config-dir DIR] <command>
//! ```
//!
//! Results go to stdout, one per line; logs go to stderr. Exits non-zero on
//! error.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod commands;
mod config;
mod prefs;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sprout_math::math::{Vec2, Vec3};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Reading;
use crate::config::{ConfigError, ConfigService, FsConfigStore};
use crate::prefs::{CliPrefs, PREFS_KEY};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout math playground")]
struct Cli {
    /// Log filter (e.g. `debug`, `sprout=trace`); `RUST_LOG` wins when set.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Decimal places for printed values.
    #[arg(long, global = true)]
    precision: Option<usize>,
    /// Print each result as a JSON line.
    #[arg(long, global = true)]
    json: bool,
    /// Directory holding `cli.json` (defaults to the platform config dir).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the start-up demo scenario.
    Demo,
    /// Scalar linear interpolation `a + (b - a) * t`.
    #[command(allow_negative_numbers = true)]
    Lerp { a: f32, b: f32, t: f32 },
    /// Hermite ease between two 2D points (`t` clamped to [0, 1]).
    #[command(allow_negative_numbers = true)]
    Smoothstep {
        ax: f32,
        ay: f32,
        bx: f32,
        by: f32,
        t: f32,
    },
    /// Reflect a 2D direction about a normal (normalised for you).
    #[command(allow_negative_numbers = true)]
    Reflect { ix: f32, iy: f32, nx: f32, ny: f32 },
    /// Rotate a 3D vector about an axis.
    #[command(allow_negative_numbers = true)]
    Rotate {
        x: f32,
        y: f32,
        z: f32,
        /// Rotation axis.
        #[arg(long, num_args = 3, value_names = ["AX", "AY", "AZ"], default_values_t = [0.0, 0.0, 1.0])]
        axis: Vec<f32>,
        /// Angle in degrees, counter-clockwise about the axis.
        #[arg(long)]
        degrees: f32,
    },
    /// Update stored preferences and print them.
    Config {
        /// Store a default log filter.
        #[arg(long)]
        set_log_level: Option<String>,
        /// Store a default precision.
        #[arg(long)]
        set_precision: Option<usize>,
    },
}

fn open_store(dir: Option<&PathBuf>) -> Result<ConfigService<FsConfigStore>, ConfigError> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir)?,
        None => FsConfigStore::new()?,
    };
    Ok(ConfigService::new(store))
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter `{directive}`"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn emit(readings: &[Reading], precision: Option<usize>, json: bool) -> Result<()> {
    for reading in readings {
        if json {
            println!("{}", serde_json::to_string(reading)?);
        } else {
            println!("{}", reading.render(precision));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config (best-effort): a broken store falls back to defaults.
    let (config, config_err) = match open_store(cli.config_dir.as_ref()) {
        Ok(svc) => (Some(svc), None),
        Err(err) => (None, Some(err)),
    };
    let (stored, load_err) = match config.as_ref().map(|c| c.load::<CliPrefs>(PREFS_KEY)) {
        Some(Ok(prefs)) => (prefs, None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };
    let absent = stored.is_none() && load_err.is_none();
    let mut prefs = stored.unwrap_or_default();

    init_tracing(prefs.log_directive(cli.log_level.as_deref()))?;

    if let Some(err) = config_err {
        warn!(%err, "config store unavailable; using defaults");
    }
    if let Some(err) = load_err {
        warn!(%err, "could not read stored prefs; using defaults");
    }
    if let Some(cfg) = &config {
        debug!(dir = %cfg.store().base().display(), "config store ready");
        // Persist defaults once if absent
        if absent {
            if let Err(err) = cfg.save(PREFS_KEY, &prefs) {
                warn!(%err, "could not persist default prefs");
            }
        }
    }

    let precision = prefs.precision(cli.precision);
    let readings = match cli.command {
        Command::Demo => commands::demo(),
        Command::Lerp { a, b, t } => vec![commands::lerp(a, b, t)],
        Command::Smoothstep { ax, ay, bx, by, t } => {
            vec![commands::smooth_step(Vec2::new(ax, ay), Vec2::new(bx, by), t)]
        }
        Command::Reflect { ix, iy, nx, ny } => {
            vec![commands::reflect(Vec2::new(ix, iy), Vec2::new(nx, ny))?]
        }
        Command::Rotate {
            x,
            y,
            z,
            axis,
            degrees,
        } => {
            let [ax, ay, az] = axis[..] else {
                bail!("--axis takes exactly three components, got {}", axis.len());
            };
            vec![commands::rotate(Vec3::new(x, y, z), Vec3::new(ax, ay, az), degrees)?]
        }
        Command::Config {
            set_log_level,
            set_precision,
        } => {
            let cfg = config.context("no config store available")?;
            if set_log_level.is_some() {
                prefs.log_level = set_log_level;
            }
            if set_precision.is_some() {
                prefs.precision = set_precision;
            }
            cfg.save(PREFS_KEY, &prefs)
                .with_context(|| format!("saving {}", cfg.store().path_for(PREFS_KEY).display()))?;
            println!("{}", serde_json::to_string_pretty(&prefs)?);
            return Ok(());
        }
    };

    emit(&readings, precision, cli.json)
}
