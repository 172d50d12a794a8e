//! Hit and miss detection for active notes.

use glam::Vec3;

use slashbeat_model::world::{HIT_RADIUS, MISS_Z, in_hit_window, note_depth, note_position};
use slashbeat_model::{Chart, CutDirection, InputSnapshot, NoteStates};

use crate::timeline::NoteTimeline;

/// Swings slower than this are never good cuts.
pub const MIN_CUT_SPEED: f32 = 0.8;
/// Minimum alignment between the swing and the required direction.
pub const MIN_CUT_DOT: f32 = 0.2;

/// Outcome of a note within one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteEvent {
    Hit {
        index: usize,
        note_id: u32,
        time: f64,
        good: bool,
    },
    Miss {
        index: usize,
        note_id: u32,
        time: f64,
    },
}

impl NoteEvent {
    pub fn index(&self) -> usize {
        match *self {
            NoteEvent::Hit { index, .. } | NoteEvent::Miss { index, .. } => index,
        }
    }
}

/// Whether a swing with `velocity` counts as a good cut for `direction`.
pub fn cut_is_good(direction: CutDirection, velocity: Vec3) -> bool {
    let speed = velocity.length();
    if speed < MIN_CUT_SPEED {
        return false;
    }
    match direction {
        CutDirection::Any => true,
        dir => velocity.normalize_or_zero().dot(dir.vector()) >= MIN_CUT_DOT,
    }
}

/// Resolves active notes against the clock and the hand snapshot.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Check every active note once, newest first. Resolved notes are marked
    /// in `states`, removed from the timeline and reported in `events`.
    pub fn resolve(
        chart: &Chart,
        states: &mut NoteStates,
        timeline: &mut NoteTimeline,
        input: &InputSnapshot,
        now: f64,
        events: &mut Vec<NoteEvent>,
    ) {
        for position in (0..timeline.active().len()).rev() {
            let index = timeline.active()[position];
            let Some(note) = chart.get(index) else {
                timeline.deactivate_at(position);
                continue;
            };
            if states.get(index).is_none_or(|s| !s.is_pending()) {
                timeline.deactivate_at(position);
                continue;
            }

            let depth = note_depth(note.time, now);

            if depth > MISS_Z {
                states.mark_missed(index);
                timeline.deactivate_at(position);
                events.push(NoteEvent::Miss {
                    index,
                    note_id: note.id,
                    time: now,
                });
                continue;
            }

            if !in_hit_window(depth) {
                continue;
            }

            let hand = input.hand(note.hand);
            let Some(hand_position) = hand.position else {
                continue;
            };
            let target = note_position(note.lane, note.layer, depth);
            if hand_position.distance(target) >= HIT_RADIUS {
                continue;
            }

            let good = cut_is_good(note.cut_direction, hand.velocity);
            states.mark_hit(index, now, good);
            timeline.deactivate_at(position);
            events.push(NoteEvent::Hit {
                index,
                note_id: note.id,
                time: now,
                good,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashbeat_model::world::PLAYER_Z;
    use slashbeat_model::{Hand, HandSample, Lane, Layer, Note, NoteState};

    fn single(cut: CutDirection) -> Chart {
        Chart::new(vec![Note::new(
            0,
            5.0,
            Lane::InnerLeft,
            Layer::Low,
            Hand::Left,
            cut,
        )])
    }

    fn left_hand(position: Vec3, velocity: Vec3) -> InputSnapshot {
        InputSnapshot {
            left: HandSample::at(position, velocity),
            right: HandSample::absent(),
        }
    }

    fn run(chart: &Chart, input: &InputSnapshot, now: f64) -> (NoteStates, Vec<NoteEvent>) {
        let mut states = NoteStates::new(chart.len());
        let mut timeline = NoteTimeline::new();
        let mut events = Vec::new();
        timeline.activate(chart, now);
        CollisionResolver::resolve(chart, &mut states, &mut timeline, input, now, &mut events);
        (states, events)
    }

    #[test]
    fn test_good_hit_at_note_position() {
        let chart = single(CutDirection::Any);
        let input = left_hand(Vec3::new(-0.4, 0.8, PLAYER_Z), Vec3::new(0.0, -1.0, 0.0));
        let (states, events) = run(&chart, &input, 5.0);
        assert_eq!(
            events,
            vec![NoteEvent::Hit {
                index: 0,
                note_id: 0,
                time: 5.0,
                good: true
            }]
        );
        assert_eq!(states.get(0), Some(NoteState::Hit { time: 5.0, good: true }));
    }

    #[test]
    fn test_slow_swing_is_hit_but_not_good() {
        let chart = single(CutDirection::Any);
        let input = left_hand(Vec3::new(-0.4, 0.8, PLAYER_Z), Vec3::new(0.0, -0.3, 0.0));
        let (_, events) = run(&chart, &input, 5.0);
        assert!(matches!(events[..], [NoteEvent::Hit { good: false, .. }]));
    }

    #[test]
    fn test_wrong_hand_does_not_hit() {
        let chart = single(CutDirection::Any);
        let input = InputSnapshot {
            left: HandSample::absent(),
            right: HandSample::at(Vec3::new(-0.4, 0.8, PLAYER_Z), Vec3::NEG_Y),
        };
        let (_, events) = run(&chart, &input, 5.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_outside_hit_window_does_not_hit() {
        let chart = single(CutDirection::Any);
        // depth -3 at t = 4.7
        let input = left_hand(Vec3::new(-0.4, 0.8, -3.0), Vec3::NEG_Y);
        let (_, events) = run(&chart, &input, 4.7);
        assert!(events.is_empty());
    }

    #[test]
    fn test_past_miss_plane_is_missed() {
        let chart = single(CutDirection::Any);
        let input = left_hand(Vec3::new(-0.4, 0.8, 5.5), Vec3::NEG_Y);
        let (states, events) = run(&chart, &input, 5.6);
        assert!(matches!(events[..], [NoteEvent::Miss { index: 0, .. }]));
        assert_eq!(states.get(0), Some(NoteState::Missed));
    }

    #[test]
    fn test_resolved_notes_are_never_revisited() {
        let chart = single(CutDirection::Any);
        let mut states = NoteStates::new(1);
        let mut timeline = NoteTimeline::new();
        let mut events = Vec::new();
        timeline.activate(&chart, 5.6);
        let idle = InputSnapshot::default();
        CollisionResolver::resolve(&chart, &mut states, &mut timeline, &idle, 5.6, &mut events);
        assert_eq!(events.len(), 1);

        let swing = left_hand(Vec3::new(-0.4, 0.8, 0.0), Vec3::NEG_Y);
        for t in [5.0, 5.6, 7.0] {
            timeline.activate(&chart, t);
            CollisionResolver::resolve(&chart, &mut states, &mut timeline, &swing, t, &mut events);
        }
        assert_eq!(events.len(), 1);
        assert_eq!(states.get(0), Some(NoteState::Missed));
    }

    #[test]
    fn test_cut_direction_quality() {
        assert!(cut_is_good(CutDirection::Down, Vec3::new(0.0, -1.0, 0.0)));
        assert!(cut_is_good(CutDirection::Down, Vec3::new(0.9, -0.3, 0.0)));
        assert!(!cut_is_good(CutDirection::Down, Vec3::new(1.0, 0.0, 0.0)));
        assert!(!cut_is_good(CutDirection::Up, Vec3::new(0.0, -2.0, 0.0)));
        assert!(!cut_is_good(CutDirection::Up, Vec3::new(0.0, 0.5, 0.0)));
        assert!(!cut_is_good(CutDirection::Any, Vec3::ZERO));
        assert!(cut_is_good(CutDirection::Any, Vec3::new(0.0, 0.0, 1.0)));
    }
}
