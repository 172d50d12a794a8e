//! Touch-screen input mapped onto the two sabers.

use glam::Vec3;

use slashbeat_model::{Hand, HandSample, InputSnapshot};

use crate::source::InputSource;

/// Width of the world region the touch surface spans.
const WORLD_WIDTH: f32 = 5.0;
/// Height of the world region the touch surface spans.
const WORLD_HEIGHT: f32 = 3.5;
/// World height of the bottom edge of the surface.
const WORLD_FLOOR: f32 = 0.8;
/// Touch events are assumed to arrive at display rate.
const EVENTS_PER_SECOND: f32 = 60.0;

/// A touch in surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps touches to hand positions. The left half of the surface drives the
/// left hand.
#[derive(Debug, Clone)]
pub struct TouchMapper {
    width: f32,
    height: f32,
    state: InputSnapshot,
}

impl TouchMapper {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            state: InputSnapshot::default(),
        }
    }

    /// Update the surface size after a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn to_world(&self, touch: TouchPoint) -> Vec3 {
        Vec3::new(
            (touch.x / self.width - 0.5) * WORLD_WIDTH,
            (1.0 - touch.y / self.height) * WORLD_HEIGHT + WORLD_FLOOR,
            0.0,
        )
    }

    pub fn hand_for(&self, touch: TouchPoint) -> Hand {
        if touch.x < self.width / 2.0 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        for &touch in touches {
            let position = self.to_world(touch);
            let hand = self.hand_for(touch);
            *self.state.hand_mut(hand) = HandSample::at(position, Vec3::ZERO);
        }
    }

    /// Moves only hands that are already down.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        for &touch in touches {
            let position = self.to_world(touch);
            let hand = self.hand_for(touch);
            let sample = self.state.hand_mut(hand);
            if let Some(previous) = sample.position {
                sample.velocity = (position - previous) * EVENTS_PER_SECOND;
                sample.position = Some(position);
            }
        }
    }

    /// Lifting any finger releases both hands.
    pub fn touch_end(&mut self) {
        self.state = InputSnapshot::default();
    }
}

impl InputSource for TouchMapper {
    fn is_ready(&self) -> bool {
        true
    }

    fn snapshot(&self) -> InputSnapshot {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> TouchMapper {
        TouchMapper::new(1000.0, 500.0)
    }

    #[test]
    fn test_to_world_corners() {
        let m = mapper();
        let bottom_left = m.to_world(TouchPoint::new(0.0, 500.0));
        assert!(bottom_left.abs_diff_eq(Vec3::new(-2.5, 0.8, 0.0), 1e-5));
        let top_middle = m.to_world(TouchPoint::new(500.0, 0.0));
        assert!(top_middle.abs_diff_eq(Vec3::new(0.0, 4.3, 0.0), 1e-5));
    }

    #[test]
    fn test_start_assigns_hand_by_side() {
        let mut m = mapper();
        m.touch_start(&[TouchPoint::new(100.0, 250.0), TouchPoint::new(900.0, 250.0)]);
        let snap = m.snapshot();
        assert!(snap.left.position.unwrap().x < 0.0);
        assert!(snap.right.position.unwrap().x > 0.0);
        assert_eq!(snap.left.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_move_sets_velocity() {
        let mut m = mapper();
        m.touch_start(&[TouchPoint::new(100.0, 250.0)]);
        m.touch_move(&[TouchPoint::new(100.0, 150.0)]);
        let left = m.snapshot().left;
        // 100px of 500px is 0.7 world units, times 60
        assert!((left.velocity.y - 42.0).abs() < 1e-3);
        assert!((left.position.unwrap().y - 3.25).abs() < 1e-5);
    }

    #[test]
    fn test_move_ignores_hand_that_is_up() {
        let mut m = mapper();
        m.touch_start(&[TouchPoint::new(100.0, 250.0)]);
        m.touch_move(&[TouchPoint::new(900.0, 250.0)]);
        assert_eq!(m.snapshot().right, HandSample::absent());
    }

    #[test]
    fn test_end_clears_both_hands() {
        let mut m = mapper();
        m.touch_start(&[TouchPoint::new(100.0, 250.0), TouchPoint::new(900.0, 250.0)]);
        m.touch_move(&[TouchPoint::new(120.0, 200.0)]);
        m.touch_end();
        assert_eq!(m.snapshot(), InputSnapshot::default());
        assert!(m.is_ready());
    }
}
