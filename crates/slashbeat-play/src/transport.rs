/// Abstraction over the audio playback clock.
/// Implementations: the host's audio player (production), ManualTransport (testing and headless runs).
pub trait Transport {
    /// Playback position in seconds.
    fn current_time(&self) -> f64;

    /// Whether playback reached the end of the media.
    fn ended(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    fn seek(&mut self, seconds: f64);
}

/// Transport driven by explicit time updates.
#[derive(Debug, Clone, Default)]
pub struct ManualTransport {
    time: f64,
    playing: bool,
    length: Option<f64>,
}

impl ManualTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that reports `ended()` once `length` seconds have played.
    pub fn with_length(length: f64) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    pub fn set_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    /// Advance the clock by `delta` seconds, only while playing.
    pub fn advance(&mut self, delta: f64) {
        if self.playing {
            self.time += delta;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Transport for ManualTransport {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn ended(&self) -> bool {
        self.length.is_some_and(|length| self.time >= length)
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.time = seconds.max(0.0);
    }
}
