//! Loudness measurements over a mono sample buffer.

/// Lower bound for the calibrated average so silent input never divides the
/// thresholds down to zero.
pub const AVERAGE_FLOOR: f32 = 0.01;

/// Mean absolute amplitude of the buffer, sampled 100 times per second of
/// audio and floored to [`AVERAGE_FLOOR`].
pub fn global_average(samples: &[f32], sample_rate: u32) -> f32 {
    let stride = ((sample_rate / 100) as usize).max(1);

    let mut sum = 0.0f64;
    let mut count = 0usize;
    for sample in samples.iter().step_by(stride) {
        sum += sample.abs() as f64;
        count += 1;
    }

    if count == 0 {
        return AVERAGE_FLOOR;
    }
    ((sum / count as f64) as f32).max(AVERAGE_FLOOR)
}

/// RMS over a window of `window_seconds` centred at `time`, clipped to the
/// buffer. Returns 0 when the clipped window is empty.
pub fn window_rms(samples: &[f32], sample_rate: u32, time: f64, window_seconds: f64) -> f32 {
    if samples.is_empty() || sample_rate == 0 || !time.is_finite() || time < 0.0 {
        return 0.0;
    }

    let rate = sample_rate as f64;
    let center = (time * rate).round() as usize;
    let half = (window_seconds * rate / 2.0).floor() as usize;
    let start = center.saturating_sub(half).min(samples.len());
    let end = center.saturating_add(half).min(samples.len());
    if start >= end {
        return 0.0;
    }

    let window = &samples[start..end];
    let sum_sq: f64 = window.iter().map(|s| (*s as f64) * (*s as f64)).sum();
    (sum_sq / window.len() as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_average_floors_silence() {
        assert_eq!(global_average(&[], 44100), AVERAGE_FLOOR);
        assert_eq!(global_average(&[0.0; 1000], 44100), AVERAGE_FLOOR);
    }

    #[test]
    fn test_global_average_of_constant() {
        let samples = vec![-0.5f32; 44100];
        assert!((global_average(&samples, 44100) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_global_average_tiny_rate_does_not_stall() {
        assert!((global_average(&[0.25; 10], 50) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_window_rms_constant() {
        let samples = vec![0.3f32; 44100];
        assert!((window_rms(&samples, 44100, 0.5, 0.05) - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_window_rms_clipped_at_edges() {
        let samples = vec![0.3f32; 1000];
        assert!((window_rms(&samples, 1000, 0.0, 0.05) - 0.3).abs() < 1e-5);
        assert_eq!(window_rms(&samples, 1000, 5.0, 0.05), 0.0);
    }
}
