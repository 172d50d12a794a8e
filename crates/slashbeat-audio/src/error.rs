use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to open audio file: {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No decodable audio track")]
    NoTrack,

    #[error("Audio track has no sample rate")]
    NoSampleRate,

    #[error("Unsupported or corrupt audio: {0}")]
    Codec(#[from] symphonia::core::errors::Error),
}
