//! Scripted input that swings through every note.

use glam::Vec3;

use slashbeat_model::world::{note_depth, note_position};
use slashbeat_model::{Chart, CutDirection, Hand, HandSample, InputSnapshot, Note};

use crate::source::InputSource;

/// Autoplay input that places each hand on its next note as it arrives.
pub struct AutoplayInput {
    /// Per-hand note lists in time order, indexed Left then Right.
    lanes: [Vec<Note>; 2],
    cursors: [usize; 2],
    current: InputSnapshot,
}

impl AutoplayInput {
    /// How early before a note's time the hand moves onto it.
    const REACH_SECONDS: f64 = 0.2;
    /// Swing speed, comfortably above the good-cut threshold.
    const SWING_SPEED: f32 = 2.0;

    pub fn new(chart: &Chart) -> Self {
        let mut lanes = [Vec::new(), Vec::new()];
        for note in chart.notes() {
            lanes[slot(note.hand)].push(*note);
        }

        Self {
            lanes,
            cursors: [0, 0],
            current: InputSnapshot::default(),
        }
    }

    /// Rewind to the start of the chart.
    pub fn reset(&mut self) {
        self.cursors = [0, 0];
        self.current = InputSnapshot::default();
    }

    /// Recompute both hands for song time `now`.
    pub fn update(&mut self, now: f64) {
        for hand in [Hand::Left, Hand::Right] {
            let sample = self.sample_for(hand, now);
            *self.current.hand_mut(hand) = sample;
        }
    }

    fn sample_for(&mut self, hand: Hand, now: f64) -> HandSample {
        let i = slot(hand);
        let notes = &self.lanes[i];
        let cursor = &mut self.cursors[i];

        while *cursor < notes.len() && notes[*cursor].time < now {
            *cursor += 1;
        }

        match notes.get(*cursor) {
            Some(note) if note.time - now <= Self::REACH_SECONDS => {
                let depth = note_depth(note.time, now);
                let position = note_position(note.lane, note.layer, depth);
                HandSample::at(position, swing_velocity(note.cut_direction))
            }
            _ => HandSample::absent(),
        }
    }
}

fn slot(hand: Hand) -> usize {
    match hand {
        Hand::Left => 0,
        Hand::Right => 1,
    }
}

/// Downward swing for notes that accept any direction.
fn swing_velocity(direction: CutDirection) -> Vec3 {
    let dir = match direction {
        CutDirection::Any => Vec3::NEG_Y,
        other => other.vector(),
    };
    dir * AutoplayInput::SWING_SPEED
}

impl InputSource for AutoplayInput {
    fn is_ready(&self) -> bool {
        true
    }

    fn snapshot(&self) -> InputSnapshot {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashbeat_model::{Lane, Layer};

    fn chart() -> Chart {
        Chart::new(vec![
            Note::new(0, 1.0, Lane::InnerLeft, Layer::Low, Hand::Left, CutDirection::Up),
            Note::new(1, 1.5, Lane::OuterRight, Layer::High, Hand::Right, CutDirection::Any),
            Note::new(2, 2.0, Lane::OuterLeft, Layer::Mid, Hand::Left, CutDirection::Right),
        ])
    }

    #[test]
    fn test_hands_absent_until_reach() {
        let mut auto = AutoplayInput::new(&chart());
        auto.update(0.5);
        assert_eq!(auto.snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_hand_tracks_note_position() {
        let mut auto = AutoplayInput::new(&chart());
        auto.update(0.9);
        let left = auto.snapshot().left;
        let expected = note_position(Lane::InnerLeft, Layer::Low, note_depth(1.0, 0.9));
        assert_eq!(left.position, Some(expected));
        assert_eq!(left.velocity, Vec3::Y * 2.0);
        assert_eq!(auto.snapshot().right.position, None);
    }

    #[test]
    fn test_any_direction_swings_down() {
        let mut auto = AutoplayInput::new(&chart());
        auto.update(1.4);
        assert_eq!(auto.snapshot().right.velocity, Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_moves_on_after_note_passes() {
        let mut auto = AutoplayInput::new(&chart());
        auto.update(1.9);
        let left = auto.snapshot().left;
        assert_eq!(left.position.map(|p| p.x), Some(-1.2));
        assert_eq!(left.velocity, Vec3::X * 2.0);

        auto.reset();
        auto.update(0.9);
        assert_eq!(auto.snapshot().left.position.map(|p| p.x), Some(-0.4));
    }
}
