use log::info;

use slashbeat_model::InputSnapshot;

use crate::control_mode::ControlMode;
use crate::source::InputSource;
use crate::touch::TouchMapper;
use crate::tracker::HandTrackerFeed;

/// Live player input for a control mode.
#[derive(Debug, Clone)]
pub enum DeviceInput {
    Touch(TouchMapper),
    Tracking(HandTrackerFeed),
}

impl DeviceInput {
    /// Build the input for `mode`. The surface size only matters for touch.
    pub fn new(mode: ControlMode, surface_width: f32, surface_height: f32) -> Self {
        if !mode.always_ready() {
            info!("Waiting for the hand tracker before play can start");
        }
        match mode {
            ControlMode::TouchControl => {
                DeviceInput::Touch(TouchMapper::new(surface_width, surface_height))
            }
            ControlMode::HandTracking => DeviceInput::Tracking(HandTrackerFeed::new()),
        }
    }

    pub fn mode(&self) -> ControlMode {
        match self {
            DeviceInput::Touch(_) => ControlMode::TouchControl,
            DeviceInput::Tracking(_) => ControlMode::HandTracking,
        }
    }

    pub fn touch_mut(&mut self) -> Option<&mut TouchMapper> {
        match self {
            DeviceInput::Touch(mapper) => Some(mapper),
            DeviceInput::Tracking(_) => None,
        }
    }

    pub fn tracker_mut(&mut self) -> Option<&mut HandTrackerFeed> {
        match self {
            DeviceInput::Tracking(feed) => Some(feed),
            DeviceInput::Touch(_) => None,
        }
    }
}

impl InputSource for DeviceInput {
    fn is_ready(&self) -> bool {
        match self {
            DeviceInput::Touch(mapper) => mapper.is_ready(),
            DeviceInput::Tracking(feed) => feed.is_ready(),
        }
    }

    fn snapshot(&self) -> InputSnapshot {
        match self {
            DeviceInput::Touch(mapper) => mapper.snapshot(),
            DeviceInput::Tracking(feed) => feed.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touch::TouchPoint;

    #[test]
    fn test_touch_is_ready_immediately() {
        let mut input = DeviceInput::new(ControlMode::TouchControl, 1000.0, 500.0);
        assert_eq!(input.mode(), ControlMode::TouchControl);
        assert!(input.is_ready());
        assert!(input.tracker_mut().is_none());

        let mapper = input.touch_mut().unwrap();
        mapper.touch_start(&[TouchPoint::new(0.0, 500.0)]);
        let left = input.snapshot().left.position.unwrap();
        assert!((left.x - -2.5).abs() < 1e-5);
    }

    #[test]
    fn test_tracking_waits_for_tracker() {
        let mut input = DeviceInput::new(ControlMode::HandTracking, 1000.0, 500.0);
        assert_eq!(input.mode(), ControlMode::HandTracking);
        assert!(!input.is_ready());
        assert!(input.touch_mut().is_none());

        input.tracker_mut().unwrap().set_ready(true);
        assert!(input.is_ready());
    }
}
