use std::path::Path;

use log::info;
use rand::Rng;

use slashbeat_model::{AudioBuffer, Chart, Difficulty, Song};

use crate::analysis::generate_from_audio;
use crate::error::AnalysisError;
use crate::job::ChartJob;

pub const CUSTOM_TRACK_ID: &str = "custom-track";
const CUSTOM_ARTIST: &str = "YOU";
const CUSTOM_GENRE: &str = "Custom";
const MAX_TITLE_CHARS: usize = 20;

/// Display title for an uploaded file: the stem, cut to 20 characters.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.chars().take(MAX_TITLE_CHARS).collect()
}

/// An uploaded song together with its decoded audio.
///
/// The buffer is kept so the chart can be regenerated with a different
/// tempo or difficulty without decoding again.
#[derive(Debug, Clone)]
pub struct CustomTrack {
    song: Song,
    audio: AudioBuffer,
}

impl CustomTrack {
    pub fn from_upload(file_name: &str, audio: AudioBuffer, bpm: f64, difficulty: Difficulty) -> Self {
        let song = Song::new(
            CUSTOM_TRACK_ID,
            title_from_file_name(file_name),
            CUSTOM_ARTIST,
            bpm,
            audio.duration(),
            difficulty,
        )
        .with_genre(CUSTOM_GENRE);

        Self { song, audio }
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn audio(&self) -> &AudioBuffer {
        &self.audio
    }

    /// Analyse the cached buffer with the song's current settings.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Chart, AnalysisError> {
        generate_from_audio(
            &self.audio.samples,
            self.audio.sample_rate,
            self.song.bpm,
            self.song.difficulty,
            rng,
        )
    }

    /// Re-run analysis with new settings. The song keeps its previous
    /// settings if analysis fails.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        bpm: f64,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Chart, AnalysisError> {
        let chart = generate_from_audio(
            &self.audio.samples,
            self.audio.sample_rate,
            bpm,
            difficulty,
            rng,
        )?;

        self.song.bpm = bpm;
        self.song.difficulty = difficulty;
        info!(
            "Regenerated {} at {} BPM ({}): {} notes",
            self.song.title,
            bpm,
            difficulty,
            chart.len()
        );
        Ok(chart)
    }

    /// Analyse the cached buffer on a worker thread.
    pub fn spawn_job(&self, seed: Option<u64>) -> ChartJob {
        ChartJob::spawn(self.audio.clone(), self.song.bpm, self.song.difficulty, seed)
    }
}
