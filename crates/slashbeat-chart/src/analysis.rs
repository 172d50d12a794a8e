use log::{debug, warn};
use rand::Rng;

use slashbeat_model::{Chart, CutDirection, Difficulty, Hand, Lane, Layer, Note};

use crate::cancel::CancelToken;
use crate::energy::{AVERAGE_FLOOR, global_average, window_rms};
use crate::error::AnalysisError;

const LEAD_IN_SECONDS: f64 = 2.0;
const TAIL_SECONDS: f64 = 1.0;
const RMS_WINDOW_SECONDS: f64 = 0.05;
const ON_BEAT_TOLERANCE: f64 = 0.05;

const MIN_GAP: f64 = 0.35;
const MIN_GAP_HARD: f64 = 0.15;

const PEAK_RATIO: f32 = 1.5;
const MEDIUM_ON_BEAT_RATIO: f32 = 0.8;
const ACCENT_RATIO: f32 = 2.5;
const FAILSAFE_BEATS: f64 = 4.0;
const FAILSAFE_RATIO: f32 = 0.2;
const DOUBLE_CHANCE: f64 = 0.2;

/// Candidates between cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 256;
/// Upper bound on grid candidates. A tempo that needs more is unusable.
const MAX_GRID_STEPS: f64 = 10_000_000.0;

/// Builds a chart by scanning `samples` for energy on a quantized beat grid.
pub fn generate_from_audio<R: Rng + ?Sized>(
    samples: &[f32],
    sample_rate: u32,
    bpm: f64,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Chart, AnalysisError> {
    generate_from_audio_cancellable(
        samples,
        sample_rate,
        bpm,
        difficulty,
        rng,
        &CancelToken::new(),
    )
}

/// Same as [`generate_from_audio`], giving up with
/// [`AnalysisError::Cancelled`] once `cancel` is set.
pub fn generate_from_audio_cancellable<R: Rng + ?Sized>(
    samples: &[f32],
    sample_rate: u32,
    bpm: f64,
    difficulty: Difficulty,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<Chart, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidSampleRate(sample_rate));
    }
    if !bpm.is_finite() || bpm <= 0.0 {
        return Err(AnalysisError::InvalidBpm(bpm));
    }

    let average = global_average(samples, sample_rate);
    if average <= AVERAGE_FLOOR {
        warn!("Audio is near silent, only failsafe notes can be placed");
    }

    let seconds_per_beat = 60.0 / bpm;
    let subdivision = match difficulty {
        Difficulty::Easy => 1.0,
        Difficulty::Medium => 2.0,
        Difficulty::Hard => 4.0,
    };
    let step = seconds_per_beat / subdivision;
    let min_gap = if difficulty == Difficulty::Hard {
        MIN_GAP_HARD
    } else {
        MIN_GAP
    };
    let duration = samples.len() as f64 / sample_rate as f64;
    let end = duration - TAIL_SECONDS;

    let steps = ((end - LEAD_IN_SECONDS) / step).ceil().max(0.0);
    if !steps.is_finite() || steps > MAX_GRID_STEPS {
        warn!("BPM {} needs {} grid steps over {:.1}s", bpm, steps, duration);
        return Err(AnalysisError::InvalidBpm(bpm));
    }

    let mut notes = Vec::new();
    let mut last_note_time = 0.0f64;
    let mut next_hand = Hand::Left;

    for k in 0..steps as usize {
        let t = LEAD_IN_SECONDS + k as f64 * step;
        if t >= end {
            break;
        }
        if k % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }

        let since_last = t - last_note_time;
        if since_last < min_gap {
            continue;
        }

        let rms = window_rms(samples, sample_rate, t, RMS_WINDOW_SECONDS);
        let loud = rms > average;
        let peak = rms > average * PEAK_RATIO;
        let on_beat = is_on_beat(t, seconds_per_beat);

        let mut spawn = match difficulty {
            Difficulty::Easy => on_beat && loud,
            Difficulty::Medium => (on_beat && rms > average * MEDIUM_ON_BEAT_RATIO) || peak,
            Difficulty::Hard => loud,
        };
        if since_last > seconds_per_beat * FAILSAFE_BEATS && rms > average * FAILSAFE_RATIO {
            spawn = true;
        }
        if !spawn {
            continue;
        }
        last_note_time = t;

        let id = notes.len() as u32;
        if peak && difficulty != Difficulty::Easy && rng.gen_bool(DOUBLE_CHANCE) {
            notes.push(Note::new(id, t, Lane::InnerLeft, Layer::Low, Hand::Left, CutDirection::Down));
            notes.push(Note::new(id + 1, t, Lane::InnerRight, Layer::Low, Hand::Right, CutDirection::Down));
        } else {
            let layer = if rms > average * ACCENT_RATIO {
                Layer::High
            } else {
                Layer::Low
            };
            notes.push(Note::new(id, t, lane_for_time(t), layer, next_hand, CutDirection::Any));
            next_hand = next_hand.other();
        }
    }

    debug!(
        "Analysis placed {} notes over {:.1}s ({}, {} BPM, average {:.4})",
        notes.len(),
        duration,
        difficulty,
        bpm,
        average
    );
    Ok(Chart::new(notes))
}

/// Within tolerance of the nearest whole-beat boundary on either side.
fn is_on_beat(t: f64, seconds_per_beat: f64) -> bool {
    let offset = t.rem_euclid(seconds_per_beat);
    offset.min(seconds_per_beat - offset) < ON_BEAT_TOLERANCE
}

/// Sweeps singles across the lanes with a slow sine.
fn lane_for_time(t: f64) -> Lane {
    let s = (t * 0.5).sin();
    if s < -0.4 {
        Lane::OuterLeft
    } else if s < 0.0 {
        Lane::InnerLeft
    } else if s < 0.4 {
        Lane::InnerRight
    } else {
        Lane::OuterRight
    }
}
