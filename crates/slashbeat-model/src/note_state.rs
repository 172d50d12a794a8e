/// Runtime state of one chart note within a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoteState {
    #[default]
    Pending,
    Hit {
        time: f64,
        good: bool,
    },
    Missed,
}

impl NoteState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Per-playthrough note states, index-aligned with the chart.
///
/// A note leaves `Pending` at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteStates {
    states: Vec<NoteState>,
}

impl NoteStates {
    pub fn new(note_count: usize) -> Self {
        Self {
            states: vec![NoteState::Pending; note_count],
        }
    }

    /// Resizes to `note_count` and marks every note pending.
    pub fn reset(&mut self, note_count: usize) {
        self.states.clear();
        self.states.resize(note_count, NoteState::Pending);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NoteState> {
        self.states.get(index).copied()
    }

    /// Returns `false` if the note was already resolved or out of range.
    pub fn mark_hit(&mut self, index: usize, time: f64, good: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state) if state.is_pending() => {
                *state = NoteState::Hit { time, good };
                true
            }
            _ => false,
        }
    }

    /// Returns `false` if the note was already resolved or out of range.
    pub fn mark_missed(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if state.is_pending() => {
                *state = NoteState::Missed;
                true
            }
            _ => false,
        }
    }

    pub fn all_resolved(&self) -> bool {
        self.states.iter().all(|s| !s.is_pending())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteState> {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states_are_final() {
        let mut states = NoteStates::new(2);
        assert!(states.mark_missed(0));
        assert!(!states.mark_hit(0, 1.0, true));
        assert_eq!(states.get(0), Some(NoteState::Missed));

        assert!(states.mark_hit(1, 2.0, false));
        assert!(!states.mark_missed(1));
        assert_eq!(states.get(1), Some(NoteState::Hit { time: 2.0, good: false }));
        assert!(states.all_resolved());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut states = NoteStates::new(1);
        assert!(!states.mark_hit(5, 0.0, true));
        assert!(!states.mark_missed(5));
        assert_eq!(states.get(5), None);
    }

    #[test]
    fn test_reset() {
        let mut states = NoteStates::new(1);
        states.mark_missed(0);
        states.reset(3);
        assert_eq!(states.len(), 3);
        assert!(states.iter().all(NoteState::is_pending));
    }
}
