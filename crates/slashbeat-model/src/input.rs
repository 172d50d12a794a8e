use glam::Vec3;

use crate::note::Hand;

/// One hand's tracked state for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandSample {
    /// `None` when the hand is not tracked or not touching.
    pub position: Option<Vec3>,
    pub velocity: Vec3,
}

impl HandSample {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn at(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position: Some(position),
            velocity,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Both hands, read once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub left: HandSample,
    pub right: HandSample,
}

impl InputSnapshot {
    pub fn hand(&self, hand: Hand) -> &HandSample {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    pub fn hand_mut(&mut self, hand: Hand) -> &mut HandSample {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }
}
