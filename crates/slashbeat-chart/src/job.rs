use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use slashbeat_model::{AudioBuffer, Chart, Difficulty};

use crate::analysis::generate_from_audio_cancellable;
use crate::cancel::CancelToken;
use crate::error::AnalysisError;

/// Stage of a background analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobStage {
    #[default]
    Running,
    Complete,
    Failed,
    Cancelled,
}

impl JobStage {
    pub fn is_finished(self) -> bool {
        !matches!(self, JobStage::Running)
    }
}

/// State shared between the caller and the worker thread.
#[derive(Default)]
struct ChartJobState {
    stage: JobStage,
    result: Option<Result<Chart, AnalysisError>>,
}

/// One-shot audio analysis running on a worker thread.
///
/// The caller polls between ticks and takes the chart once finished; a
/// cancelled job only ever yields [`AnalysisError::Cancelled`].
pub struct ChartJob {
    state: Arc<Mutex<ChartJobState>>,
    cancel: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl ChartJob {
    /// Start analysing `audio`. With a `seed` the chart is reproducible.
    pub fn spawn(audio: AudioBuffer, bpm: f64, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let state = Arc::new(Mutex::new(ChartJobState::default()));
        let cancel = CancelToken::new();

        let state_clone = state.clone();
        let cancel_clone = cancel.clone();
        let handle = std::thread::spawn(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let result = generate_from_audio_cancellable(
                &audio.samples,
                audio.sample_rate,
                bpm,
                difficulty,
                &mut rng,
                &cancel_clone,
            );
            Self::finish(&state_clone, &cancel_clone, result);
        });

        Self {
            state,
            cancel,
            handle: Some(handle),
        }
    }

    fn finish(
        state: &Mutex<ChartJobState>,
        cancel: &CancelToken,
        result: Result<Chart, AnalysisError>,
    ) {
        let mut s = lock(state);

        // Checked under the lock: `cancel()` sets the flag before locking, so
        // a cancel racing this store is either seen here or sees the result.
        let result = if cancel.is_cancelled() {
            Err(AnalysisError::Cancelled)
        } else {
            result
        };

        s.stage = match &result {
            Ok(chart) => {
                info!("Chart analysis finished with {} notes", chart.len());
                JobStage::Complete
            }
            Err(AnalysisError::Cancelled) => {
                info!("Chart analysis cancelled");
                JobStage::Cancelled
            }
            Err(e) => {
                warn!("Chart analysis failed: {}", e);
                JobStage::Failed
            }
        };
        s.result = Some(result);
    }

    /// Request cancellation. A chart that finished but was not taken yet is
    /// discarded as well.
    pub fn cancel(&self) {
        self.cancel.cancel();

        let mut s = lock(&self.state);
        if matches!(s.result, Some(Ok(_))) {
            s.stage = JobStage::Cancelled;
            s.result = Some(Err(AnalysisError::Cancelled));
        }
    }

    pub fn stage(&self) -> JobStage {
        lock(&self.state).stage
    }

    /// Returns `true` once the worker has produced a result.
    pub fn poll(&self) -> bool {
        self.stage().is_finished()
    }

    /// Take the result. Returns `None` while running or after it was taken.
    pub fn take_result(&self) -> Option<Result<Chart, AnalysisError>> {
        lock(&self.state).result.take()
    }

    /// Block until the worker finishes and take its result.
    pub fn wait(mut self) -> Result<Chart, AnalysisError> {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                return Err(AnalysisError::WorkerLost);
            }
        }
        self.take_result().unwrap_or(Err(AnalysisError::WorkerLost))
    }
}

impl Drop for ChartJob {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}

fn lock(state: &Mutex<ChartJobState>) -> MutexGuard<'_, ChartJobState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
