use glam::Vec3;
use log::info;

use slashbeat_model::{HandSample, InputSnapshot};

use crate::source::InputSource;

/// Latest hand positions pushed by an external tracker.
///
/// The landmark inference itself happens elsewhere; this only holds the
/// most recent frame and the readiness flag.
#[derive(Debug, Clone, Default)]
pub struct HandTrackerFeed {
    ready: bool,
    latest: InputSnapshot,
}

impl HandTrackerFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ready(&mut self, ready: bool) {
        if ready != self.ready {
            info!("Hand tracker {}", if ready { "ready" } else { "lost" });
        }
        self.ready = ready;
    }

    /// Replace the held frame.
    pub fn push(&mut self, snapshot: InputSnapshot) {
        self.latest = snapshot;
    }

    /// Replace the held frame from raw positions, deriving each hand's
    /// velocity from its previous position over `dt` seconds.
    pub fn push_positions(&mut self, left: Option<Vec3>, right: Option<Vec3>, dt: f32) {
        let next = InputSnapshot {
            left: follow(&self.latest.left, left, dt),
            right: follow(&self.latest.right, right, dt),
        };
        self.latest = next;
    }
}

fn follow(previous: &HandSample, position: Option<Vec3>, dt: f32) -> HandSample {
    match (previous.position, position) {
        (Some(old), Some(new)) if dt > 0.0 => HandSample::at(new, (new - old) / dt),
        (_, Some(new)) => HandSample::at(new, Vec3::ZERO),
        (_, None) => HandSample::absent(),
    }
}

impl InputSource for HandTrackerFeed {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn snapshot(&self) -> InputSnapshot {
        self.latest
    }
}
