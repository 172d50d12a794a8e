//! Read-only per-tick snapshot for the presentation layer.

use glam::Vec3;

use slashbeat_model::world::{note_depth, note_position};
use slashbeat_model::{Chart, Note, NoteState, NoteStates};

use crate::lifecycle::GameStatus;
use crate::score::ScoreState;

/// Pending notes are drawn from this far ahead of their time.
const VISIBLE_AHEAD: f64 = 3.0;
/// Pending notes stay drawn this long after their time.
const VISIBLE_BEHIND: f64 = 1.5;
/// Hit notes linger this long for the slice effect.
const HIT_LINGER: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleNote {
    pub note: Note,
    pub state: NoteState,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub time: f64,
    pub status: GameStatus,
    pub score: u64,
    pub combo: u32,
    pub multiplier: u32,
    pub health: u32,
    pub notes: Vec<VisibleNote>,
}

impl FrameView {
    pub fn build(
        chart: &Chart,
        states: &NoteStates,
        score: &ScoreState,
        status: GameStatus,
        now: f64,
    ) -> Self {
        let notes = chart
            .notes()
            .iter()
            .enumerate()
            .filter_map(|(index, note)| {
                let state = states.get(index)?;
                is_visible(note, state, now).then(|| VisibleNote {
                    note: *note,
                    state,
                    position: note_position(note.lane, note.layer, note_depth(note.time, now)),
                })
            })
            .collect();

        Self {
            time: now,
            status,
            score: score.score,
            combo: score.combo,
            multiplier: score.multiplier,
            health: score.health,
            notes,
        }
    }
}

fn is_visible(note: &Note, state: NoteState, now: f64) -> bool {
    match state {
        NoteState::Pending => {
            let ahead = note.time - now;
            ahead > -VISIBLE_BEHIND && ahead < VISIBLE_AHEAD
        }
        NoteState::Hit { time, .. } => now - time < HIT_LINGER,
        NoteState::Missed => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashbeat_model::{CutDirection, Hand, Lane, Layer};

    fn note(time: f64) -> Note {
        Note::new(0, time, Lane::InnerLeft, Layer::Low, Hand::Left, CutDirection::Any)
    }

    #[test]
    fn test_pending_visibility_window() {
        assert!(!is_visible(&note(13.0), NoteState::Pending, 10.0));
        assert!(is_visible(&note(12.9), NoteState::Pending, 10.0));
        assert!(is_visible(&note(8.6), NoteState::Pending, 10.0));
        assert!(!is_visible(&note(8.5), NoteState::Pending, 10.0));
    }

    #[test]
    fn test_hit_lingers_briefly() {
        let hit = NoteState::Hit {
            time: 10.0,
            good: true,
        };
        assert!(is_visible(&note(10.0), hit, 10.4));
        assert!(!is_visible(&note(10.0), hit, 10.5));
    }

    #[test]
    fn test_missed_never_visible() {
        assert!(!is_visible(&note(10.0), NoteState::Missed, 10.0));
    }
}
