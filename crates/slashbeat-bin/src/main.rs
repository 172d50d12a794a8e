// slashbeat: headless front end for chart generation and autoplay runs.

mod simulate;
mod source;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use serde::Serialize;

use slashbeat_config::{DEFAULT_CONFIG_FILE, GameConfig};
use slashbeat_model::catalog::catalog;
use slashbeat_model::{Chart, Song};

use source::ChartSource;

#[derive(Parser, Debug)]
#[command(name = "slashbeat", about = "Rhythm chart generator and gameplay simulator")]
struct Args {
    /// Path to the config JSON file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in songs.
    Songs,

    /// Generate a chart and print it as JSON.
    Chart {
        #[command(flatten)]
        source: ChartSource,

        /// Write the chart to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Play a chart with autoplay input and print the result.
    Simulate {
        #[command(flatten)]
        source: ChartSource,

        /// Use the configured control mode with nobody playing instead of autoplay.
        #[arg(long)]
        idle: bool,
    },
}

#[derive(Serialize)]
struct ChartDocument<'a> {
    song: &'a Song,
    notes: &'a Chart,
}

fn main() -> Result<()> {
    // Max level is narrowed once the config is loaded.
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .try_init();
    log::set_max_level(LevelFilter::Info);

    let args = Args::parse();
    let config = GameConfig::read_or_default(&args.config)?;
    apply_log_level(&config, args.verbose);

    match args.command {
        Command::Songs => list_songs(),
        Command::Chart { source, out } => {
            let loaded = source.load(&config)?;
            let json = serde_json::to_string_pretty(&ChartDocument {
                song: &loaded.song,
                notes: &loaded.chart,
            })?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
                    info!("Wrote {} notes to {}", loaded.chart.len(), path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
        Command::Simulate { source, idle } => {
            let loaded = source.load(&config)?;
            let result = if idle {
                simulate::run_idle(&loaded.song, loaded.chart, config.device_input())?
            } else {
                simulate::run(&loaded.song, loaded.chart)?
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

/// RUST_LOG wins over the config file; `--verbose` wins over both.
fn apply_log_level(config: &GameConfig, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if std::env::var_os("RUST_LOG").is_some() {
        LevelFilter::Trace
    } else {
        config.log_level.parse().unwrap_or(LevelFilter::Info)
    };
    log::set_max_level(level);
}

fn list_songs() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for song in catalog() {
        writeln!(
            out,
            "{:<16} {:<16} {:<14} {:>5} BPM {:>5.0}s  {:<6} {}",
            song.id,
            song.title,
            song.artist,
            song.bpm,
            song.duration_seconds,
            song.difficulty.name(),
            song.genre.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}
