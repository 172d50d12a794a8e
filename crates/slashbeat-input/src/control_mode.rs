use serde::{Deserialize, Serialize};

/// How the player's hands are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlMode {
    #[default]
    HandTracking,
    TouchControl,
}

impl ControlMode {
    /// Touch needs no warm-up; hand tracking waits for the camera.
    pub fn always_ready(self) -> bool {
        matches!(self, ControlMode::TouchControl)
    }
}
