use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use slashbeat_audio::decode_file;
use slashbeat_chart::{ChartJob, CustomTrack, generate_from_song};
use slashbeat_config::GameConfig;
use slashbeat_model::{Chart, Difficulty, Song, catalog};

/// Where a chart comes from: a built-in song or an audio file.
#[derive(Args, Debug)]
pub struct ChartSource {
    /// Built-in song id (see `slashbeat songs`).
    #[arg(long, conflicts_with = "audio", required_unless_present = "audio")]
    song: Option<String>,

    /// Audio file to analyse.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Tempo of the audio file. Defaults to the configured custom-track BPM.
    #[arg(long, requires = "audio")]
    bpm: Option<f64>,

    /// Easy, Medium or Hard.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible charts. Overrides the configured seed.
    #[arg(long)]
    seed: Option<u64>,
}

pub struct LoadedChart {
    pub song: Song,
    pub chart: Chart,
}

const JOB_POLL_INTERVAL: Duration = Duration::from_millis(10);

impl ChartSource {
    pub fn load(&self, config: &GameConfig) -> Result<LoadedChart> {
        let seed = self.seed.or(config.chart_seed);

        if let Some(path) = &self.audio {
            return self.load_audio(path, config, seed);
        }

        let id = self
            .song
            .as_deref()
            .ok_or_else(|| anyhow!("Either --song or --audio is required"))?;
        let mut song = catalog::find(id).ok_or_else(|| anyhow!("Unknown song: {id}"))?;
        if let Some(difficulty) = self.difficulty {
            song.difficulty = difficulty;
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let chart = generate_from_song(&song, &mut rng);
        info!("Generated {} notes for {} ({})", chart.len(), song.title, song.difficulty);
        Ok(LoadedChart { song, chart })
    }

    fn load_audio(&self, path: &Path, config: &GameConfig, seed: Option<u64>) -> Result<LoadedChart> {
        let audio = decode_file(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom");

        let mut track_config = config.custom_track.clone();
        if let Some(bpm) = self.bpm {
            track_config.bpm = bpm;
        }
        if let Some(difficulty) = self.difficulty {
            track_config.difficulty = difficulty;
        }
        track_config.validate();

        let track = CustomTrack::from_upload(file_name, audio, track_config.bpm, track_config.difficulty);
        info!(
            "Analysing {} ({:.1}s) at {} BPM",
            track.song().title,
            track.song().duration_seconds,
            track.song().bpm
        );

        let job = track.spawn_job(seed);
        while !job.poll() {
            std::thread::sleep(JOB_POLL_INTERVAL);
        }
        let chart = job
            .wait()
            .with_context(|| format!("Failed to analyse {}", path.display()))?;

        Ok(LoadedChart {
            song: track.song().clone(),
            chart,
        })
    }
}
