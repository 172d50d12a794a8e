use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(u32),

    #[error("Invalid BPM: {0}")]
    InvalidBpm(f64),

    #[error("Chart analysis was cancelled")]
    Cancelled,

    #[error("Chart analysis worker terminated unexpectedly")]
    WorkerLost,
}
