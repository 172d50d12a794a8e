// Chart generation: explicit pattern rules and audio-energy analysis

mod analysis;
mod cancel;
mod custom;
mod energy;
mod error;
mod job;
mod rule_based;

pub use analysis::{generate_from_audio, generate_from_audio_cancellable};
pub use cancel::CancelToken;
pub use custom::{CUSTOM_TRACK_ID, CustomTrack, title_from_file_name};
pub use energy::{global_average, window_rms};
pub use error::AnalysisError;
pub use job::{ChartJob, JobStage};
pub use rule_based::generate_from_song;
